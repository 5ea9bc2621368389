// Tab Bar Component
// Selectable row of tab labels with overflow scrolling and arrows

use ratatui::{
    layout::Rect,
    widgets::Block,
    Frame,
};
use tracing::trace;

use crate::core::{RectRegistry, TabKey};
use crate::managers::classifier::ChildNode;
use crate::managers::geometry::TabBox;
use crate::utilities::Theme;

/// Horizontal padding on each side of a label
pub const TAB_PADDING: u16 = 1;
/// Indent applied by `align_with_title`
pub const TITLE_INSET: u16 = 4;
/// Registry name of the bar rectangle
pub const HWND_TABS_BAR: &str = "tabs.bar";
/// Default registry name of the active label's visible cells
pub const HWND_ACTIVE_TAB: &str = "tabs.tab.active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabBarAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Options the bar takes from its parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarProps {
    pub alignment: TabBarAlignment,
    pub grow: bool,
    pub fixed_tabs: bool,
    pub align_with_title: bool,
    pub icons_and_text: bool,
    pub show_arrows: bool,
    /// Viewport width in cells below which the bar is condensed
    pub mobile_break_point: u16,
    pub prev_icon: String,
    pub next_icon: String,
    /// Label rows
    pub height: u16,
    /// Registry name given to the active label while it is visible
    pub highlight_class: String,
}

impl Default for BarProps {
    fn default() -> Self {
        Self {
            alignment: TabBarAlignment::Left,
            grow: false,
            fixed_tabs: false,
            align_with_title: false,
            icons_and_text: false,
            show_arrows: false,
            mobile_break_point: 60,
            prev_icon: "‹".to_string(),
            next_icon: "›".to_string(),
            height: 1,
            highlight_class: HWND_ACTIVE_TAB.to_string(),
        }
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Selection                                                   │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Item-group state behind the bar: the ordered keys and the single active one.
///
/// Every method that changes the active key on its own (user selection or a
/// mandatory fallback) returns the new key as a change event.
#[derive(Debug, Clone, Default)]
pub struct TabsBar {
    keys: Vec<TabKey>,
    active: Option<TabKey>,
    mandatory: bool,
}

impl TabsBar {
    pub fn new(mandatory: bool) -> Self {
        Self {
            keys: Vec::new(),
            active: None,
            mandatory,
        }
    }

    pub fn keys(&self) -> &[TabKey] {
        &self.keys
    }

    pub fn active(&self) -> Option<&TabKey> {
        self.active.as_ref()
    }

    pub fn active_index(&self) -> Option<usize> {
        let active = self.active.as_ref()?;
        self.keys.iter().position(|key| key == active)
    }

    /// Replace the item set, keeping the active key if it survives
    pub fn set_items(&mut self, keys: Vec<TabKey>) -> Option<TabKey> {
        self.keys = keys;
        self.enforce_mandatory()
    }

    /// Apply the value bound by the parent. Only a mandatory fallback is reported.
    pub fn set_value(&mut self, value: Option<TabKey>) -> Option<TabKey> {
        self.active = value.filter(|key| self.keys.contains(key));
        self.enforce_mandatory()
    }

    /// User selection of `key`
    pub fn select(&mut self, key: &TabKey) -> Option<TabKey> {
        if !self.keys.contains(key) || self.active.as_ref() == Some(key) {
            return None;
        }
        self.active = Some(key.clone());
        self.active.clone()
    }

    pub fn select_index(&mut self, index: usize) -> Option<TabKey> {
        let key = self.keys.get(index)?.clone();
        self.select(&key)
    }

    pub fn select_next(&mut self) -> Option<TabKey> {
        self.step(1)
    }

    pub fn select_previous(&mut self) -> Option<TabKey> {
        self.step(-1)
    }

    fn step(&mut self, direction: i32) -> Option<TabKey> {
        if self.keys.is_empty() {
            return None;
        }
        let count = self.keys.len();
        let next = match self.active_index() {
            None => 0,
            Some(current) if direction < 0 => (current + count - 1) % count,
            Some(current) => (current + 1) % count,
        };
        self.select_index(next)
    }

    fn enforce_mandatory(&mut self) -> Option<TabKey> {
        if let Some(active) = &self.active {
            if self.keys.contains(active) {
                return None;
            }
            self.active = None;
        }
        if !self.mandatory {
            return None;
        }
        self.active = self.keys.first().cloned();
        self.active.clone()
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Layout                                                      │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// One laid-out label
#[derive(Debug, Clone, PartialEq)]
pub struct TabSlot {
    pub key: TabKey,
    pub tab_box: TabBox,
    /// Visible screen cells
    pub area: Rect,
}

/// Result of laying out the bar inside an area
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarLayout {
    /// Screen cells where labels are drawn, between the arrows
    pub viewport: Rect,
    /// Cells scrolled off the left edge
    pub scroll: u16,
    pub content_width: u16,
    pub arrows: bool,
    pub tabs: Vec<TabSlot>,
}

impl BarLayout {
    /// Lay out `labels` (keyed by `keys`) in `area`, scrolling `active` into view.
    pub fn compute(
        area: Rect,
        labels: &[&ChildNode],
        keys: &[TabKey],
        active: Option<&TabKey>,
        props: &BarProps,
    ) -> Self {
        let inset = if props.align_with_title { TITLE_INSET.min(area.width) } else { 0 };
        let available = area.width - inset;

        let mut widths: Vec<u16> = labels
            .iter()
            .map(|label| label_width(label, props.icons_and_text))
            .collect();
        if props.fixed_tabs {
            let uniform = widths.iter().copied().max().unwrap_or(0);
            widths.iter_mut().for_each(|w| *w = uniform);
        }

        let natural: u16 = widths.iter().fold(0u16, |acc, w| acc.saturating_add(*w));
        let overflowing = natural > available;
        let arrows = overflowing && (props.show_arrows || area.width >= props.mobile_break_point);
        let arrow_width = if arrows {
            arrow_cells(&props.prev_icon)
                .max(arrow_cells(&props.next_icon))
                .min(available / 2)
        } else {
            0
        };
        let viewport_width = available.saturating_sub(arrow_width.saturating_mul(2));

        if props.grow && !overflowing && !widths.is_empty() {
            grow_widths(&mut widths, viewport_width);
        }
        let content_width: u16 = widths.iter().fold(0u16, |acc, w| acc.saturating_add(*w));

        let start = if content_width >= viewport_width {
            0
        } else {
            match props.alignment {
                TabBarAlignment::Left => 0,
                TabBarAlignment::Center => (viewport_width - content_width) / 2,
                TabBarAlignment::Right => viewport_width - content_width,
            }
        };

        let mut lefts = Vec::with_capacity(widths.len());
        let mut cursor = start;
        for width in &widths {
            lefts.push(cursor);
            cursor = cursor.saturating_add(*width);
        }

        let active_index = active.and_then(|key| keys.iter().position(|k| k == key));
        let scroll = match active_index {
            Some(idx) if idx < widths.len() && content_width > viewport_width => {
                let left = lefts[idx];
                let right = left.saturating_add(widths[idx]);
                if right > viewport_width {
                    left.min(right - viewport_width)
                } else {
                    0
                }
            }
            _ => 0,
        };

        let viewport = Rect {
            x: area.x.saturating_add(inset).saturating_add(arrow_width),
            y: area.y,
            width: viewport_width,
            height: area.height,
        };

        let tabs = keys
            .iter()
            .zip(lefts.iter().zip(widths.iter()))
            .map(|(key, (&left, &width))| {
                let visible_start = left.max(scroll);
                let visible_end = left.saturating_add(width).min(scroll.saturating_add(viewport_width));
                let client_width = visible_end.saturating_sub(visible_start);
                let area = if client_width > 0 {
                    Rect {
                        x: viewport.x + (visible_start - scroll),
                        y: viewport.y,
                        width: client_width,
                        height: viewport.height,
                    }
                } else {
                    Rect::new(viewport.x, viewport.y, 0, 0)
                };
                TabSlot {
                    key: key.clone(),
                    tab_box: TabBox {
                        offset_left: left,
                        client_width,
                        scroll_width: width,
                    },
                    area,
                }
            })
            .collect();

        Self {
            viewport,
            scroll,
            content_width,
            arrows,
            tabs,
        }
    }

    /// Whether content is hidden past the left edge
    pub fn can_scroll_prev(&self) -> bool {
        self.scroll > 0
    }

    /// Whether content is hidden past the right edge
    pub fn can_scroll_next(&self) -> bool {
        self.scroll.saturating_add(self.viewport.width) < self.content_width
    }
}

/// Natural width of a label, padding included
pub fn label_width(label: &ChildNode, icons_and_text: bool) -> u16 {
    let text = label.text.chars().count();
    let icon = label.icon.as_deref().map(|i| i.chars().count()).unwrap_or(0);
    let content = match (icons_and_text, icon) {
        (_, 0) => text,
        (true, icon) => text.max(icon),
        (false, icon) => icon + 1 + text,
    };
    u16::try_from(content).unwrap_or(u16::MAX).saturating_add(TAB_PADDING * 2)
}

fn arrow_cells(icon: &str) -> u16 {
    u16::try_from(icon.chars().count()).unwrap_or(u16::MAX).saturating_add(1)
}

/// Widen tabs to fill `target`, equal widths when they all fit
fn grow_widths(widths: &mut [u16], target: u16) {
    let count = widths.len() as u16;
    let widest = widths.iter().copied().max().unwrap_or(0);
    let total: u16 = widths.iter().fold(0u16, |acc, w| acc.saturating_add(*w));

    if widest.saturating_mul(count) <= target {
        let base = target / count;
        let remainder = target % count;
        for (idx, width) in widths.iter_mut().enumerate() {
            *width = base + u16::from((idx as u16) < remainder);
        }
    } else {
        let extra = target.saturating_sub(total);
        let share = extra / count;
        let remainder = extra % count;
        for (idx, width) in widths.iter_mut().enumerate() {
            *width += share + u16::from((idx as u16) < remainder);
        }
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Rendering                                                   │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Render the bar and record every realized tab in the registry
#[allow(clippy::too_many_arguments)]
pub fn render_bar(
    f: &mut Frame,
    area: Rect,
    layout: &BarLayout,
    labels: &[&ChildNode],
    active: Option<&TabKey>,
    props: &BarProps,
    theme: &Theme,
    registry: &mut RectRegistry,
) {
    f.render_widget(Block::default().style(theme.bar_style()), area);
    registry.register(HWND_TABS_BAR, area);
    registry.begin_tabs();

    if layout.arrows {
        let prev_x = layout.viewport.x.saturating_sub(arrow_cells(&props.prev_icon)).max(area.x);
        let next_x = layout.viewport.right().saturating_add(1).min(area.right().saturating_sub(1));
        let row = area.y + area.height.saturating_sub(1) / 2;
        let buf = f.buffer_mut();
        buf.set_string(prev_x, row, &props.prev_icon, theme.arrow_style(layout.can_scroll_prev()));
        buf.set_string(next_x, row, &props.next_icon, theme.arrow_style(layout.can_scroll_next()));
    }

    let mut highlighted = false;
    for (slot, label) in layout.tabs.iter().zip(labels.iter()) {
        registry.realize_tab(slot.key.clone(), slot.tab_box, slot.area);
        if slot.area.width == 0 {
            continue;
        }

        let is_active = active == Some(&slot.key);
        if is_active {
            registry.register(&props.highlight_class, slot.area);
            highlighted = true;
        }
        let style = if is_active {
            theme.active_tab_style()
        } else {
            theme.inactive_tab_style()
        };
        let width = slot.tab_box.scroll_width as usize;
        let skip = layout.scroll.saturating_sub(slot.tab_box.offset_left) as usize;
        let visible = slot.area.width as usize;

        let rows = label_rows(label, props.icons_and_text, area.height);
        let buf = f.buffer_mut();
        for (row, text) in rows {
            let line: String = center(&text, width).chars().skip(skip).take(visible).collect();
            buf.set_stringn(slot.area.x, area.y + row, &line, visible, style);
        }
    }

    if !highlighted {
        registry.unregister_by_name(&props.highlight_class);
    }

    trace!(
        tabs = layout.tabs.len(),
        scroll = layout.scroll,
        arrows = layout.arrows,
        "bar laid out"
    );
}

/// Text per row for a label: icon above text when stacked, otherwise one line
fn label_rows(label: &ChildNode, icons_and_text: bool, height: u16) -> Vec<(u16, String)> {
    let last = height.saturating_sub(1);
    match label.icon.as_deref() {
        Some(icon) if icons_and_text && height >= 2 => {
            vec![(last - 1, icon.to_string()), (last, label.text.clone())]
        }
        Some(icon) if !icons_and_text => vec![(last / 2, format!("{} {}", icon, label.text))],
        _ => vec![(last / 2, label.text.clone())],
    }
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(width - len - left))
}
