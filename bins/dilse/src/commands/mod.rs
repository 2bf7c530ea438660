//! CLI command implementations

pub mod categories;
pub mod favorites;
pub mod prefs;
pub mod quotes;
pub mod render;
