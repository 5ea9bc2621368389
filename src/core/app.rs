// Application State
// Demo host around one tabs widget: sidebar, footer, and the paint cycle

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use tracing::debug;

use super::events::AppEvent;
use super::{RectRegistry, TabKey};
use crate::config::BindingConfigYaml;
use crate::elements::tabs_view::TabsView;
use crate::managers::classifier::{classify, ChildNode};
use crate::managers::resize::ResizeSignal;
use crate::managers::tabs::{Tabs, TabsOptions};

/// Width of the optional sidebar, in cells
pub const SIDEBAR_WIDTH: u16 = 20;
/// Longest the event loop sleeps while the slider is moving
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);
/// Longest the event loop sleeps when idle
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// Main application state
#[derive(Debug)]
pub struct App {
    pub title: String,
    pub bindings: Vec<BindingConfigYaml>,
    pub tabs: Tabs,
    pub registry: RectRegistry,
    pub resize: ResizeSignal,
    pub show_sidebar: bool,
    /// Selection changes reported by the widget, newest last
    pub history: Vec<TabKey>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        title: String,
        bindings: Vec<BindingConfigYaml>,
        options: TabsOptions,
        children: Vec<ChildNode>,
        quiet_resize: bool,
    ) -> Self {
        let mut tabs = Tabs::new(options, children);
        let history = tabs.take_changes();
        Self {
            title,
            bindings,
            tabs,
            registry: RectRegistry::new(),
            resize: ResizeSignal::new(quiet_resize),
            show_sidebar: false,
            history,
            should_quit: false,
        }
    }

    /// Apply one event at `now`
    pub fn handle(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Quit => self.should_quit = true,
            AppEvent::SelectPrevious => {
                self.tabs.select_previous();
            }
            AppEvent::SelectNext => {
                self.tabs.select_next();
            }
            AppEvent::SelectIndex(index) => {
                self.tabs.select_index(index);
            }
            AppEvent::SwipePanel { forward } => {
                self.tabs.swipe_panels(forward);
            }
            AppEvent::Click { column, row } => {
                self.tabs.click(column, row, &self.registry);
            }
            AppEvent::Resize(width, height) => {
                if self.resize.observe(width, height) {
                    self.tabs.on_resize(now);
                }
            }
            AppEvent::ToggleCentered => self.update_options(|o| o.centered = !o.centered),
            AppEvent::ToggleRight => self.update_options(|o| o.right = !o.right),
            AppEvent::ToggleGrow => self.update_options(|o| o.grow = !o.grow),
            AppEvent::ToggleFixed => self.update_options(|o| o.fixed_tabs = !o.fixed_tabs),
            AppEvent::ToggleArrows => self.update_options(|o| o.show_arrows = !o.show_arrows),
            AppEvent::ToggleHideSlider => self.update_options(|o| o.hide_slider = !o.hide_slider),
            AppEvent::ToggleIcons => self.update_options(|o| o.icons_and_text = !o.icons_and_text),
            AppEvent::ToggleSidebar => self.show_sidebar = !self.show_sidebar,
            AppEvent::AddTab => self.add_tab(),
            AppEvent::RemoveTab => self.remove_tab(),
            AppEvent::None => {}
        }
        self.history.extend(self.tabs.take_changes());
    }

    fn update_options(&mut self, change: impl FnOnce(&mut TabsOptions)) {
        let mut options = self.tabs.options().clone();
        change(&mut options);
        self.tabs.set_options(options);
    }

    fn add_tab(&mut self) {
        let mut children = self.tabs.children().to_vec();
        let count = classify(&children).tab_labels.len() + 1;
        let insert_at = children
            .iter()
            .rposition(ChildNode::is_tab_label)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        children.insert(insert_at, ChildNode::new(format!("Tab {}", count)));
        children.push(ChildNode::panel(format!("Panel for tab {}", count)));
        self.tabs.set_children(children);
    }

    fn remove_tab(&mut self) {
        let mut children = self.tabs.children().to_vec();
        let classified = classify(&children);
        let last_label = classified.tab_labels.last().map(|node| (*node).clone());
        let last_panel = classified.panel_items.last().map(|node| (*node).clone());
        for node in [last_label, last_panel].into_iter().flatten() {
            if let Some(idx) = children.iter().rposition(|child| *child == node) {
                children.remove(idx);
            }
        }
        self.tabs.set_children(children);
    }

    /// Insets of the widget inside `area`: (left, right)
    pub fn insets(&self) -> (u16, u16) {
        if self.show_sidebar {
            (SIDEBAR_WIDTH, 0)
        } else {
            (0, 0)
        }
    }

    /// Work done before each draw: feed the resize signal and fire timers
    pub fn before_draw(&mut self, area: Rect, now: Instant) {
        let (left, right) = self.insets();
        let resized = self.resize.observe(area.width, area.height);
        let shifted = self.resize.observe_insets(left, right);
        if resized || shifted {
            debug!(resized, shifted, "host layout changed");
            self.tabs.on_resize(now);
        }
        self.tabs.tick(now);
    }

    /// Work done once the draw has committed: run the pending measurement
    pub fn after_draw(&mut self, now: Instant) -> bool {
        self.tabs.after_paint(&self.registry, now)
    }

    /// How long the event loop may wait for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if self.tabs.is_animating(now) || self.tabs.measurement_pending() {
            return ANIMATION_FRAME;
        }
        match self.tabs.next_deadline() {
            Some(due) => due.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    pub fn render(&mut self, f: &mut Frame, now: Instant) {
        let area = f.area();
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))),
            header,
        );

        let (left, right) = self.insets();
        let content = Rect {
            x: body.x + left.min(body.width),
            y: body.y,
            width: body.width.saturating_sub(left + right),
            height: body.height,
        };
        if self.show_sidebar {
            let sidebar = Rect {
                width: left.min(body.width),
                ..body
            };
            let lines: Vec<Line> = self
                .history
                .iter()
                .rev()
                .take(sidebar.height.saturating_sub(2) as usize)
                .map(|key| Line::from(format!("→ {}", key)))
                .collect();
            f.render_widget(
                Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Changes ")),
                sidebar,
            );
        }

        let composition = self.tabs.compose(now);
        TabsView::new(&composition).render(f, content, &mut self.registry);

        let help: Vec<Span> = self
            .bindings
            .iter()
            .map(|b| Span::raw(format!(" {}: {} ", b.key, b.description)))
            .collect();
        f.render_widget(Paragraph::new(Line::from(help)), footer);
    }
}
