// Slider
// Highlight row drawn under the active tab

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
    Frame,
};

use crate::core::RectRegistry;
use crate::elements::tab_bar::BarLayout;
use crate::managers::classifier::ChildNode;
use crate::managers::geometry::{SliderBox, SliderStyle};
use crate::utilities::Theme;

/// Fill used by the default marker
pub const SLIDER_FILL: &str = "━";
/// Registry name of the drawn highlight
pub const HWND_TABS_SLIDER: &str = "tabs.slider";

/// The default highlight, drawn when no override nodes are given
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderMarker {
    pub color: Option<Color>,
}

/// What fills the highlight
#[derive(Debug, Clone, PartialEq)]
pub enum SliderContent<'a> {
    /// Slider override nodes; their text is repeated across the highlight
    Custom(Vec<&'a ChildNode>),
    Marker(SliderMarker),
}

/// Positioned container around the slider content
#[derive(Debug, Clone, PartialEq)]
pub struct SliderWrapper<'a> {
    pub style: SliderStyle,
    /// Position to draw this frame
    pub frame: Option<SliderBox>,
    pub content: SliderContent<'a>,
}

impl SliderWrapper<'_> {
    fn pattern(&self) -> String {
        match &self.content {
            SliderContent::Marker(_) => SLIDER_FILL.to_string(),
            SliderContent::Custom(nodes) => {
                let text: String = nodes.iter().map(|node| node.text.as_str()).collect();
                if text.is_empty() {
                    SLIDER_FILL.to_string()
                } else {
                    text
                }
            }
        }
    }

    fn draw_style(&self, theme: &Theme) -> Style {
        match &self.content {
            SliderContent::Marker(SliderMarker { color: Some(color) }) => theme.bar_style().fg(*color),
            _ => theme.slider_style(),
        }
    }
}

/// Screen columns of the highlight within `layout`'s viewport, clipped.
///
/// Returns (x, width) or None when the highlight is scrolled out of view.
pub fn visible_span(layout: &BarLayout, frame: SliderBox) -> Option<(u16, u16)> {
    let start = i32::from(frame.left) - i32::from(layout.scroll);
    let end = start + i32::from(frame.width);
    let clipped_start = start.max(0);
    let clipped_end = end.min(i32::from(layout.viewport.width));
    if clipped_end <= clipped_start {
        return None;
    }
    Some((
        layout.viewport.x + clipped_start as u16,
        (clipped_end - clipped_start) as u16,
    ))
}

/// Draw the highlight row
pub fn render_slider(
    f: &mut Frame,
    area: Rect,
    layout: &BarLayout,
    wrapper: &SliderWrapper<'_>,
    theme: &Theme,
    registry: &mut RectRegistry,
) {
    f.render_widget(Block::default().style(theme.bar_style()), area);

    let span = wrapper.frame.and_then(|frame| visible_span(layout, frame));
    let Some((x, width)) = span else {
        registry.unregister_by_name(HWND_TABS_SLIDER);
        return;
    };

    let fill: String = wrapper.pattern().chars().cycle().take(width as usize).collect();
    f.buffer_mut()
        .set_stringn(x, area.y, &fill, width as usize, wrapper.draw_style(theme));
    registry.register(HWND_TABS_SLIDER, Rect::new(x, area.y, width, 1));
}
