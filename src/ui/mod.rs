//! UI module - line-based terminal menus and narration

pub mod console;
pub mod menu;

pub use console::{select_class, select_race, ConsoleCommander, ConsoleNarrator};
pub use menu::{choose_option, parse_selection};
