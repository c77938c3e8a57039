pub mod artifact;
pub mod character;
pub mod player;

pub use artifact::{Artifact, Slot, MAX_SUB_STATS};
pub use character::Character;
pub use player::Player;
