// Tabs Orchestrator
// Owns the selection, composes bar/slider/panels, and schedules slider measurement
//
// Driving a `Tabs` from an event loop:
//   tabs.mount(now);
//   loop {
//       tabs.tick(now);                          // fire settle/resize timers
//       terminal.draw(|f| TabsView::new(&tabs.compose(now)).render(f, area, &mut registry))?;
//       tabs.after_paint(&registry, now);        // measure against committed boxes
//   }

use ratatui::style::Color;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::core::scheduler::{PaintSlot, TimerSlot};
use crate::core::{RectRegistry, SelectionState, TabKey};
use crate::elements::panels::PanelSwitcher;
use crate::elements::slider::{SliderContent, SliderMarker, SliderWrapper};
use crate::elements::tab_bar::{BarProps, TabBarAlignment, TabsBar};
use crate::managers::classifier::{classify, ChildNode};
use crate::managers::geometry::{self, BoundingBoxProvider, SliderBox, SliderStyle, TRANSITION_TIME};
use crate::utilities::Theme;

/// Delay before the first measurement after mount
pub const SETTLE_DELAY: Duration = Duration::from_millis(50);
/// Debounce applied to resize signals
pub const RESIZE_DEBOUNCE: Duration = Duration::ZERO;

/// Options accepted by the widget
#[derive(Debug, Clone, PartialEq)]
pub struct TabsOptions {
    /// Bound active key
    pub value: Option<TabKey>,
    pub color: Color,
    pub slider_color: Option<Color>,
    pub background_color: Option<Color>,
    pub centered: bool,
    pub grow: bool,
    pub fixed_tabs: bool,
    pub icons_and_text: bool,
    pub hide_slider: bool,
    pub right: bool,
    pub show_arrows: bool,
    pub align_with_title: bool,
    pub mobile_break_point: u16,
    pub prev_icon: String,
    pub next_icon: String,
    pub active_class: String,
    /// Bar rows; defaults to 1, or 2 with icons stacked over text
    pub height: Option<u16>,
    pub dark: bool,
}

impl Default for TabsOptions {
    fn default() -> Self {
        let bar = BarProps::default();
        Self {
            value: None,
            color: Color::Cyan,
            slider_color: None,
            background_color: None,
            centered: false,
            grow: false,
            fixed_tabs: false,
            icons_and_text: false,
            hide_slider: false,
            right: false,
            show_arrows: false,
            align_with_title: false,
            mobile_break_point: bar.mobile_break_point,
            prev_icon: bar.prev_icon,
            next_icon: bar.next_icon,
            active_class: "tabs.panel.active".to_string(),
            height: None,
            dark: true,
        }
    }
}

impl TabsOptions {
    pub fn bar_props(&self) -> BarProps {
        let alignment = if self.centered {
            TabBarAlignment::Center
        } else if self.right {
            TabBarAlignment::Right
        } else {
            TabBarAlignment::Left
        };
        BarProps {
            alignment,
            grow: self.grow,
            fixed_tabs: self.fixed_tabs,
            align_with_title: self.align_with_title,
            icons_and_text: self.icons_and_text,
            show_arrows: self.show_arrows,
            mobile_break_point: self.mobile_break_point,
            prev_icon: self.prev_icon.clone(),
            next_icon: self.next_icon.clone(),
            height: self.bar_height(),
            ..BarProps::default()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme {
            color: self.color,
            slider_color: self.slider_color,
            background: self.background_color,
            dark: self.dark,
        }
    }

    fn bar_height(&self) -> u16 {
        match self.height {
            Some(height) => height.max(1),
            None if self.icons_and_text => 2,
            None => 1,
        }
    }

    /// Whether going from `self` to `other` can move the selected tab's box
    fn moves_slider(&self, other: &TabsOptions) -> bool {
        self.align_with_title != other.align_with_title
            || self.centered != other.centered
            || self.fixed_tabs != other.fixed_tabs
            || self.grow != other.grow
            || self.right != other.right
            || self.icons_and_text != other.icons_and_text
            || self.height != other.height
            || self.hide_slider != other.hide_slider
            || self.show_arrows != other.show_arrows
            || self.mobile_break_point != other.mobile_break_point
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Unmounted,
    Mounted,
    Destroyed,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Composition                                                 │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// The bar part of a composition
#[derive(Debug, Clone, PartialEq)]
pub struct BarNode<'a> {
    pub labels: Vec<&'a ChildNode>,
    pub keys: Vec<TabKey>,
    pub active: Option<TabKey>,
    pub props: BarProps,
    /// Absent when the slider is hidden
    pub slider: Option<SliderWrapper<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelsNode<'a> {
    /// Panel containers given by the caller, used as-is
    Explicit {
        containers: Vec<&'a ChildNode>,
        active: Option<TabKey>,
        active_class: String,
    },
    /// Loose panel items wrapped in a generated switcher
    Wrapped(PanelSwitcher<'a>),
}

/// What one paint pass draws
#[derive(Debug, Clone, PartialEq)]
pub struct Composition<'a> {
    pub bar: BarNode<'a>,
    pub panels: Option<PanelsNode<'a>>,
    pub theme: Theme,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Orchestrator                                                │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// The tabs widget state.
///
/// The bar decides which tab is active; this type forwards its change events
/// to the selection and keeps the slider measured against the boxes of the
/// last committed paint.
#[derive(Debug, Clone)]
pub struct Tabs {
    options: TabsOptions,
    children: Vec<ChildNode>,
    bar: TabsBar,
    selection: SelectionState,
    slider: Option<SliderBox>,
    previous_slider: Option<SliderBox>,
    measured_at: Option<Instant>,
    settle_timer: TimerSlot,
    resize_timer: TimerSlot,
    measure_after_paint: PaintSlot,
    lifecycle: Lifecycle,
    measurements: usize,
}

impl Tabs {
    pub fn new(options: TabsOptions, children: Vec<ChildNode>) -> Self {
        let mut tabs = Self {
            selection: SelectionState::new(options.value.clone()),
            options,
            children,
            bar: TabsBar::new(true),
            slider: None,
            previous_slider: None,
            measured_at: None,
            settle_timer: TimerSlot::default(),
            resize_timer: TimerSlot::default(),
            measure_after_paint: PaintSlot::default(),
            lifecycle: Lifecycle::Unmounted,
            measurements: 0,
        };
        tabs.bar.set_items(classify(&tabs.children).tab_keys());
        let fallback = tabs.bar.set_value(tabs.options.value.clone());
        tabs.follow_bar(fallback);
        tabs
    }

    pub fn options(&self) -> &TabsOptions {
        &self.options
    }

    pub fn children(&self) -> &[ChildNode] {
        &self.children
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_alive(&self) -> bool {
        self.lifecycle != Lifecycle::Destroyed
    }

    fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Active key as held by the selection
    pub fn value(&self) -> Option<&TabKey> {
        self.selection.active()
    }

    /// Drain selection changes for the host
    pub fn take_changes(&mut self) -> Vec<TabKey> {
        self.selection.take_changes()
    }

    /// Last measured slider box
    pub fn slider_box(&self) -> Option<SliderBox> {
        self.slider
    }

    pub fn slider_style(&self) -> SliderStyle {
        SliderStyle::derive(self.previous_slider, self.slider, TRANSITION_TIME)
    }

    /// Number of measurements that produced a box
    pub fn measurement_count(&self) -> usize {
        self.measurements
    }

    /// Whether a measurement waits for the next paint
    pub fn measurement_pending(&self) -> bool {
        self.is_mounted() && self.measure_after_paint.is_pending()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        match self.measured_at {
            Some(at) => self.slider_style().is_animating(now.saturating_duration_since(at)),
            None => false,
        }
    }

    /// Earliest pending timer deadline, for sizing the event-loop poll
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.settle_timer.due(), self.resize_timer.due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ── lifecycle ───────────────────────────────────────────────────────────────────────────────

    /// Mount the widget; the first measurement follows the settle delay
    pub fn mount(&mut self, now: Instant) {
        if self.lifecycle != Lifecycle::Unmounted {
            return;
        }
        self.lifecycle = Lifecycle::Mounted;
        self.settle_timer.arm(now, SETTLE_DELAY);
        debug!(delay_ms = SETTLE_DELAY.as_millis() as u64, "tabs mounted, settle timer armed");
    }

    /// Tear down: drop queued work and turn every later entry point into a no-op
    pub fn teardown(&mut self) {
        if !self.is_alive() {
            return;
        }
        self.lifecycle = Lifecycle::Destroyed;
        self.settle_timer.cancel();
        self.resize_timer.cancel();
        let dropped = self.measure_after_paint.take();
        debug!(dropped, "tabs torn down");
    }

    /// Fire due timers
    pub fn tick(&mut self, now: Instant) {
        if !self.is_mounted() {
            return;
        }
        let settled = self.settle_timer.fire(now);
        let resized = self.resize_timer.fire(now);
        if settled || resized {
            debug!(settled, resized, "timer fired");
            self.request_measure();
        }
    }

    /// Layout may have changed: debounce into one trailing measurement.
    /// Ignored outside the mounted state.
    pub fn on_resize(&mut self, now: Instant) {
        if !self.is_mounted() {
            return;
        }
        let replaced = self.resize_timer.arm(now, RESIZE_DEBOUNCE);
        debug!(replaced, "resize signal");
    }

    /// Run the measurement queued for this paint against its committed boxes.
    ///
    /// Returns true when a new slider box was recorded.
    pub fn after_paint<P: BoundingBoxProvider>(&mut self, provider: &P, now: Instant) -> bool {
        if !self.is_mounted() || !self.measure_after_paint.take() {
            return false;
        }
        if self.options.hide_slider {
            return false;
        }

        let selected = self.bar.active().and_then(|key| provider.tab_box(key));
        let Some(measured) = geometry::measure(selected.as_ref()) else {
            debug!(active = ?self.bar.active(), "selected tab not realized, keeping slider");
            return false;
        };

        self.previous_slider = self.slider;
        self.slider = Some(measured);
        self.measured_at = Some(now);
        self.measurements += 1;
        debug!(left = measured.left, width = measured.width, "slider measured");
        true
    }

    fn request_measure(&mut self) {
        if !self.is_mounted() || self.options.hide_slider || self.bar.active().is_none() {
            return;
        }
        if !self.measure_after_paint.request() {
            debug!("measurement already queued");
        }
    }

    // ── inputs ──────────────────────────────────────────────────────────────────────────────────

    /// Replace the child nodes
    pub fn set_children(&mut self, children: Vec<ChildNode>) {
        if !self.is_alive() || self.children == children {
            return;
        }
        self.children = children;
        let keys = classify(&self.children).tab_keys();
        let fallback = self.bar.set_items(keys);
        self.follow_bar(fallback);
        self.request_measure();
    }

    /// Replace the options; geometry-affecting changes remeasure
    pub fn set_options(&mut self, options: TabsOptions) {
        if !self.is_alive() {
            return;
        }
        let moves = self.options.moves_slider(&options);
        let value = (self.options.value != options.value).then(|| options.value.clone());
        self.options = options;

        if let Some(value) = value {
            self.set_value(value);
        }
        // set_value returns early when the value echoes the selection
        if moves {
            self.request_measure();
        }
    }

    /// Bind the active key from the host. The binding is not echoed back.
    pub fn set_value(&mut self, value: Option<TabKey>) {
        if !self.is_alive() {
            return;
        }
        self.options.value = value.clone();
        if !self.selection.bind(value.clone()) {
            return;
        }
        let fallback = self.bar.set_value(value);
        self.follow_bar(fallback);
        self.request_measure();
    }

    pub fn select(&mut self, key: &TabKey) -> bool {
        let change = self.bar.select(key);
        self.on_bar_change(change)
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        let change = self.bar.select_index(index);
        self.on_bar_change(change)
    }

    pub fn select_next(&mut self) -> bool {
        let change = self.bar.select_next();
        self.on_bar_change(change)
    }

    pub fn select_previous(&mut self) -> bool {
        let change = self.bar.select_previous();
        self.on_bar_change(change)
    }

    /// Change emitted by the panel switcher. It goes through the bar, so a key
    /// the bar does not hold is ignored.
    pub fn select_panel(&mut self, key: &TabKey) -> bool {
        debug!(key = %key, "panel switch requested");
        self.select(key)
    }

    /// Swipe the panel switcher one panel forward or back, without wrapping
    pub fn swipe_panels(&mut self, forward: bool) -> bool {
        let classified = classify(&self.children);
        let items: Vec<&ChildNode> = match classified.panel_container.first() {
            Some(container) => container.children.iter().collect(),
            None => classified.panel_items,
        };
        let switcher = PanelSwitcher {
            active: self.bar.active().cloned(),
            active_class: self.options.active_class.clone(),
            items,
        };
        match switcher.neighbour(forward) {
            Some(key) => self.select_panel(&key),
            None => false,
        }
    }

    /// Select the tab drawn under (column, row) in the last paint
    pub fn click(&mut self, column: u16, row: u16, registry: &RectRegistry) -> bool {
        match registry.tab_at(column, row).cloned() {
            Some(key) => self.select(&key),
            None => false,
        }
    }

    /// Mirror a bar fallback into the selection. An empty bar clears it.
    fn follow_bar(&mut self, change: Option<TabKey>) {
        if let Some(key) = change {
            self.selection.apply_change(key);
        } else if self.bar.active().is_none() && self.selection.clear() {
            debug!("no tabs left, selection cleared");
        }
    }

    fn on_bar_change(&mut self, change: Option<TabKey>) -> bool {
        if !self.is_alive() {
            return false;
        }
        let Some(key) = change else {
            return false;
        };
        debug!(key = %key, "selection changed");
        if self.selection.apply_change(key) {
            self.request_measure();
            return true;
        }
        false
    }

    // ── composition ─────────────────────────────────────────────────────────────────────────────

    /// Classify the children and describe what to draw at `now`
    pub fn compose(&self, now: Instant) -> Composition<'_> {
        let classified = classify(&self.children);
        let keys = classified.tab_keys();
        let active = self.bar.active().cloned();

        let slider = (!self.options.hide_slider).then(|| {
            let style = self.slider_style();
            let elapsed = self
                .measured_at
                .map(|at| now.saturating_duration_since(at))
                .unwrap_or(Duration::ZERO);
            let content = if classified.slider_override.is_empty() {
                SliderContent::Marker(SliderMarker {
                    color: self.options.slider_color,
                })
            } else {
                SliderContent::Custom(classified.slider_override.clone())
            };
            SliderWrapper {
                style,
                frame: style.frame_at(elapsed),
                content,
            }
        });

        let panels = if !classified.panel_container.is_empty() {
            Some(PanelsNode::Explicit {
                containers: classified.panel_container,
                active: active.clone(),
                active_class: self.options.active_class.clone(),
            })
        } else if !classified.panel_items.is_empty() {
            Some(PanelsNode::Wrapped(PanelSwitcher {
                active: active.clone(),
                active_class: self.options.active_class.clone(),
                items: classified.panel_items,
            }))
        } else {
            None
        };

        Composition {
            bar: BarNode {
                labels: classified.tab_labels,
                keys,
                active,
                props: self.options.bar_props(),
                slider,
            },
            panels,
            theme: self.options.theme(),
        }
    }
}
