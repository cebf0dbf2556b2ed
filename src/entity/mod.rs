//! Stateful match entities

pub mod player;
pub mod stronghold;

pub use player::{class_stats, ClassStats, Player};
pub use stronghold::Stronghold;
