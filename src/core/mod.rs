// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod app;
pub mod error;
pub mod events;
pub mod rect_handle;
pub mod scheduler;
pub mod selection;

pub use app::App;
pub use error::{Result, TabsError};
pub use events::{AppEvent, EventHandler};
pub use rect_handle::{RealizedTab, RectHandle, RectRegistry};
pub use scheduler::{PaintSlot, TimerSlot};
pub use selection::{SelectionState, TabKey};
