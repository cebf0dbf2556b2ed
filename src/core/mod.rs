pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, parse_class, parse_race, MatchConfig};
pub use error::{Result, SiegeError};
pub use types::{Health, PlayerClass, Race, Round};
