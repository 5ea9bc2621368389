//! End-to-end scenarios: orchestrator, paint pass, and measurement together

use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use std::collections::HashMap;
use std::time::{Duration, Instant};

use slider_tabs::core::{RectRegistry, TabKey};
use slider_tabs::elements::TabsView;
use slider_tabs::managers::geometry::{SliderBox, TabBox, Transition};
use slider_tabs::managers::tabs::{Lifecycle, SETTLE_DELAY};
use slider_tabs::managers::{ChildNode, Tabs, TabsOptions};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn children() -> Vec<ChildNode> {
    vec![
        ChildNode::new("Home"),
        ChildNode::new("Settings").with_value("settings"),
        ChildNode::new("About"),
        ChildNode::panel("home body"),
        ChildNode::panel("settings body").with_value("settings"),
        ChildNode::panel("about body"),
    ]
}

struct Harness {
    terminal: Terminal<TestBackend>,
    registry: RectRegistry,
    tabs: Tabs,
}

impl Harness {
    fn new(options: TabsOptions, width: u16) -> Self {
        Self {
            terminal: Terminal::new(TestBackend::new(width, 8)).unwrap(),
            registry: RectRegistry::new(),
            tabs: Tabs::new(options, children()),
        }
    }

    /// One frame: timers, paint, then the after-paint measurement
    fn frame(&mut self, now: Instant) -> bool {
        self.tabs.tick(now);
        let tabs = &self.tabs;
        let registry = &mut self.registry;
        self.terminal
            .draw(|f| {
                let composition = tabs.compose(now);
                TabsView::new(&composition).render(f, f.area(), registry);
            })
            .unwrap();
        self.tabs.after_paint(&self.registry, now)
    }

    fn row(&self, y: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }
}

#[test]
fn slider_follows_selection_with_animation() {
    let t0 = Instant::now();
    let mut h = Harness::new(TabsOptions::default(), 40);
    h.tabs.mount(t0);

    assert!(!h.frame(t0));
    assert!(h.frame(t0 + SETTLE_DELAY));
    assert_eq!(h.tabs.slider_box(), Some(SliderBox { left: 0, width: 6 }));
    assert_eq!(h.tabs.slider_style().transition, Transition::None);

    assert!(h.tabs.select(&TabKey::from("settings")));
    assert_eq!(h.tabs.take_changes(), vec![TabKey::Index(0), TabKey::from("settings")]);

    let t1 = t0 + ms(200);
    assert!(h.frame(t1));
    assert_eq!(h.tabs.slider_box(), Some(SliderBox { left: 6, width: 10 }));
    assert_eq!(h.tabs.slider_style().transition, Transition::Animated(ms(300)));
    assert!(h.tabs.is_animating(t1 + ms(100)));

    h.frame(t1 + ms(400));
    let expected = format!("{}{}{}", " ".repeat(6), "━".repeat(10), " ".repeat(24));
    assert_eq!(h.row(1), expected);
    assert!(h.row(3).contains("settings body"));
}

#[test]
fn three_resizes_in_one_tick_measure_once() {
    let t0 = Instant::now();
    let mut tabs = Tabs::new(TabsOptions::default(), children());
    tabs.mount(t0);
    tabs.tick(t0 + SETTLE_DELAY);

    let mut boxes: HashMap<TabKey, TabBox> = HashMap::new();
    boxes.insert(TabKey::Index(0), TabBox { offset_left: 0, client_width: 6, scroll_width: 6 });
    assert!(tabs.after_paint(&boxes, t0 + SETTLE_DELAY));

    let now = t0 + ms(500);
    for width in [8u16, 9, 12] {
        boxes.insert(TabKey::Index(0), TabBox { offset_left: 2, client_width: width, scroll_width: width });
        tabs.on_resize(now);
    }
    tabs.tick(now);

    assert!(tabs.after_paint(&boxes, now));
    assert!(!tabs.after_paint(&boxes, now));
    assert_eq!(tabs.measurement_count(), 2);
    assert_eq!(tabs.slider_box(), Some(SliderBox { left: 2, width: 12 }));
}

#[test]
fn teardown_race_is_discarded() {
    let t0 = Instant::now();
    let mut h = Harness::new(TabsOptions::default(), 40);
    h.tabs.mount(t0);
    h.frame(t0 + SETTLE_DELAY);
    let before = h.tabs.slider_box();

    h.tabs.select_next();
    assert!(h.tabs.measurement_pending());
    h.tabs.teardown();

    assert!(!h.frame(t0 + ms(100)));
    assert_eq!(h.tabs.slider_box(), before);
    assert_eq!(h.tabs.lifecycle(), Lifecycle::Destroyed);
}

#[test]
fn hidden_slider_is_never_composed_or_measured() {
    let t0 = Instant::now();
    let options = TabsOptions {
        hide_slider: true,
        ..TabsOptions::default()
    };
    let mut h = Harness::new(options, 40);
    h.tabs.mount(t0);
    h.frame(t0 + SETTLE_DELAY);
    h.tabs.select_next();
    h.tabs.on_resize(t0 + ms(80));
    h.frame(t0 + ms(80));

    assert_eq!(h.tabs.measurement_count(), 0);
    assert!(h.tabs.slider_box().is_none());
    assert!(h.registry.get_by_name("tabs.slider").is_none());
    assert!(h.row(2).contains("settings body"));
}

#[test]
fn overflowing_bar_scrolls_active_tab_into_view() {
    let t0 = Instant::now();
    let options = TabsOptions {
        show_arrows: true,
        ..TabsOptions::default()
    };
    let mut h = Harness::new(options, 16);
    h.tabs.mount(t0);
    h.tabs.select_index(2);
    h.frame(t0 + SETTLE_DELAY);

    let about = h.registry.realized_tabs().iter().find(|t| t.key == TabKey::Index(2)).unwrap();
    assert!(about.area.width > 0);
    assert!(about.area.x + about.area.width <= 16);
    assert_eq!(h.tabs.slider_box(), Some(SliderBox { left: 16, width: 7 }));
    assert!(h.row(0).contains("About"));
    assert_eq!(h.registry.get_by_name("tabs.bar"), Some(Rect::new(0, 0, 16, 1)));
}

#[test]
fn inserted_tab_shifts_slider_on_next_paint() {
    let t0 = Instant::now();
    let mut h = Harness::new(TabsOptions::default(), 40);
    h.tabs.mount(t0);
    h.frame(t0 + SETTLE_DELAY);
    h.tabs.select(&TabKey::from("settings"));
    assert!(h.frame(t0 + ms(100)));
    assert_eq!(h.tabs.slider_box(), Some(SliderBox { left: 6, width: 10 }));

    let mut grown = children();
    grown.insert(0, ChildNode::new("New"));
    h.tabs.set_children(grown);
    assert!(h.tabs.measurement_pending());
    assert_eq!(h.tabs.value(), Some(&TabKey::from("settings")));

    assert!(h.frame(t0 + ms(200)));
    assert_eq!(h.tabs.slider_box(), Some(SliderBox { left: 11, width: 10 }));
}
