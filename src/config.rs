use clap::{Args, ValueEnum};
use strum_macros::Display;

use crate::evaluator::{Algorithm, FactorVariant};

/// Which scoring strategy the evaluator is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum AlgorithmKind {
    /// Effective-roll counting normalized against a genre baseline.
    #[default]
    Rolls,
    /// Empirical linear-combination score.
    Coefficient,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EngineConfig {
    #[arg(long, value_enum, default_value_t = AlgorithmKind::Rolls)]
    pub algorithm: AlgorithmKind,

    /// Coefficient table to use when --algorithm coefficient is selected.
    #[arg(long, value_enum, default_value_t = FactorVariant::Community)]
    pub factors: FactorVariant,
}

impl EngineConfig {
    pub fn algorithm(&self) -> Algorithm {
        match self.algorithm {
            AlgorithmKind::Rolls => Algorithm::RollEfficiency,
            AlgorithmKind::Coefficient => Algorithm::Coefficient(self.factors),
        }
    }
}
