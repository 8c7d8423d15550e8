//! Pure, platform-agnostic navigation logic shared by the components.

pub mod format;
pub mod links;
pub mod menu;
pub mod nav_state;
pub mod scroll;
pub mod style;
