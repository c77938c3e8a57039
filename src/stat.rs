// ===== artiforge/src/stat.rs =====
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The closed set of scorable attribute kinds.
///
/// The `#[strum(serialize = ...)]` values are the vendor wire names as they
/// appear in raw equipment payloads, so `StatKind::from_str` doubles as the
/// payload decoder. An unrecognized wire name is a data-shape failure, not a
/// silent zero.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
pub enum StatKind {
    #[strum(serialize = "FIGHT_PROP_HP")]
    Hp,
    #[strum(serialize = "FIGHT_PROP_HP_PERCENT")]
    HpPercent,
    #[strum(serialize = "FIGHT_PROP_ATTACK")]
    Atk,
    #[strum(serialize = "FIGHT_PROP_ATTACK_PERCENT")]
    AtkPercent,
    #[strum(serialize = "FIGHT_PROP_DEFENSE")]
    Def,
    #[strum(serialize = "FIGHT_PROP_DEFENSE_PERCENT")]
    DefPercent,
    #[strum(serialize = "FIGHT_PROP_CRITICAL")]
    CritRate,
    #[strum(serialize = "FIGHT_PROP_CRITICAL_HURT")]
    CritDmg,
    #[strum(serialize = "FIGHT_PROP_CHARGE_EFFICIENCY")]
    EnergyRecharge,
    #[strum(serialize = "FIGHT_PROP_ELEMENT_MASTERY")]
    ElementalMastery,
    #[strum(serialize = "FIGHT_PROP_FIRE_ADD_HURT")]
    PyroDmgBonus,
    #[strum(serialize = "FIGHT_PROP_ELEC_ADD_HURT")]
    ElectroDmgBonus,
    #[strum(serialize = "FIGHT_PROP_ICE_ADD_HURT")]
    CryoDmgBonus,
    #[strum(serialize = "FIGHT_PROP_WATER_ADD_HURT")]
    HydroDmgBonus,
    #[strum(serialize = "FIGHT_PROP_ROCK_ADD_HURT")]
    GeoDmgBonus,
    #[strum(serialize = "FIGHT_PROP_WIND_ADD_HURT")]
    AnemoDmgBonus,
    #[strum(serialize = "FIGHT_PROP_GRASS_ADD_HURT")]
    DendroDmgBonus,
    #[strum(serialize = "FIGHT_PROP_PHYSICAL_ADD_HURT")]
    PhysicalDmgBonus,
    #[strum(serialize = "FIGHT_PROP_HEAL_ADD")]
    HealingBonus,
}

/// How an attribute's value relates to a character's base stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatNature {
    /// Absolute value (flat HP/ATK/DEF).
    Flat,
    /// Percentage of the matching base stat (HP%/ATK%/DEF%).
    Percent,
    /// Dimensionless or already normalized (crit, recharge, mastery, damage
    /// bonuses).
    Special,
}

/// Character base-stat kinds used to de-flatten fixed secondary attributes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
pub enum BaseStatKind {
    #[strum(serialize = "FIGHT_PROP_BASE_HP")]
    BaseHp,
    #[strum(serialize = "FIGHT_PROP_BASE_ATTACK")]
    BaseAtk,
    #[strum(serialize = "FIGHT_PROP_BASE_DEFENSE")]
    BaseDef,
}

impl StatKind {
    pub fn nature(self) -> StatNature {
        match self {
            Self::Hp | Self::Atk | Self::Def => StatNature::Flat,
            Self::HpPercent | Self::AtkPercent | Self::DefPercent => StatNature::Percent,
            _ => StatNature::Special,
        }
    }

    /// The percent-nature counterpart of a flat kind (ATK -> ATK%).
    ///
    /// Total over flat kinds; `None` for everything else. Together with
    /// [`flat_counterpart`](Self::flat_counterpart) this is the unit
    /// conversion bridge the scoring engine relies on, so the pairing is
    /// spelled out here rather than recovered from wire-name string math.
    pub fn percent_counterpart(self) -> Option<StatKind> {
        match self {
            Self::Hp => Some(Self::HpPercent),
            Self::Atk => Some(Self::AtkPercent),
            Self::Def => Some(Self::DefPercent),
            _ => None,
        }
    }

    /// The flat-nature counterpart of a percent kind (ATK% -> ATK).
    pub fn flat_counterpart(self) -> Option<StatKind> {
        match self {
            Self::HpPercent => Some(Self::Hp),
            Self::AtkPercent => Some(Self::Atk),
            Self::DefPercent => Some(Self::Def),
            _ => None,
        }
    }

    /// The character base stat a flat kind is measured against.
    pub fn base_stat(self) -> Option<BaseStatKind> {
        match self {
            Self::Hp => Some(BaseStatKind::BaseHp),
            Self::Atk => Some(BaseStatKind::BaseAtk),
            Self::Def => Some(BaseStatKind::BaseDef),
            _ => None,
        }
    }

    /// Compact label for tables and logs; the `Display` impl keeps the wire
    /// name.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::HpPercent => "HP%",
            Self::Atk => "ATK",
            Self::AtkPercent => "ATK%",
            Self::Def => "DEF",
            Self::DefPercent => "DEF%",
            Self::CritRate => "CRIT Rate",
            Self::CritDmg => "CRIT DMG",
            Self::EnergyRecharge => "ER",
            Self::ElementalMastery => "EM",
            Self::PyroDmgBonus => "Pyro DMG",
            Self::ElectroDmgBonus => "Electro DMG",
            Self::CryoDmgBonus => "Cryo DMG",
            Self::HydroDmgBonus => "Hydro DMG",
            Self::GeoDmgBonus => "Geo DMG",
            Self::AnemoDmgBonus => "Anemo DMG",
            Self::DendroDmgBonus => "Dendro DMG",
            Self::PhysicalDmgBonus => "Physical DMG",
            Self::HealingBonus => "Healing",
        }
    }

    /// Whether the rolled value is rendered with a `%` suffix.
    pub fn is_percent_like(self) -> bool {
        !matches!(
            self,
            Self::Hp | Self::Atk | Self::Def | Self::ElementalMastery
        )
    }
}

/// One rolled attribute: a kind plus its value. Immutable once built; the
/// value carries no bounds invariant since live game data can exceed the
/// nominal roll ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub kind: StatKind,
    pub value: f64,
}

impl Stat {
    pub fn new(kind: StatKind, value: f64) -> Self {
        Self { kind, value }
    }

    pub fn display_value(&self) -> String {
        if self.kind.is_percent_like() {
            format!("{}%", self.value)
        } else {
            format!("{}", self.value)
        }
    }
}
