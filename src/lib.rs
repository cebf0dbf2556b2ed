//! Strongholds - turn-based text siege between two factions

pub mod battle;
pub mod core;
pub mod entity;
pub mod ui;
pub mod world;
