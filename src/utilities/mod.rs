// Utilities module
// Helper functions and tools

pub mod helpers;

pub use helpers::{hex_color, parse_color, Theme};
