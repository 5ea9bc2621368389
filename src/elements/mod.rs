// Elements module
// Terminal renditions of the bar, slider, and panel switcher

pub mod panels;
pub mod slider;
pub mod tab_bar;
pub mod tabs_view;

pub use panels::PanelSwitcher;
pub use slider::{SliderContent, SliderMarker, SliderWrapper};
pub use tab_bar::{BarLayout, BarProps, TabBarAlignment, TabsBar};
pub use tabs_view::TabsView;
