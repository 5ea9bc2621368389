// Managers module
// Classification, slider geometry, resize signalling, and the orchestrator

pub mod classifier;
pub mod geometry;
pub mod resize;
pub mod tabs;

pub use classifier::{classify, ChildNode, ClassifiedChildren, NodeKind};
pub use geometry::{measure, BoundingBoxProvider, SliderBox, SliderStyle, TabBox, Transition};
pub use resize::ResizeSignal;
pub use tabs::{Composition, Tabs, TabsOptions};
