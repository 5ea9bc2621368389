// Slider Tabs Library
// A tabbed navigation widget for ratatui with an animated highlight under the active tab

// Core infrastructure - foundational systems
pub mod core;

// Managers - classification, geometry, and the orchestrator
pub mod managers;

// Elements - terminal rendering of the widget parts
pub mod elements;

// Utilities - helper functions and tools
pub mod utilities;

// Configuration loading and validation
pub mod config;
pub mod config_validation;

// Re-export commonly used items for convenience
pub use crate::core::{RectRegistry, SelectionState, TabKey, TabsError};
pub use elements::TabsView;
pub use managers::{classify, ChildNode, NodeKind, Tabs, TabsOptions};
