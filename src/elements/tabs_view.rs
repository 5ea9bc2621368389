// Tabs View
// Draws a composition: bar rows, slider row, then the panel area

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::core::RectRegistry;
use crate::elements::panels::render_containers;
use crate::elements::slider::render_slider;
use crate::elements::tab_bar::{render_bar, BarLayout};
use crate::managers::tabs::{Composition, PanelsNode};

pub struct TabsView<'c, 'a> {
    composition: &'c Composition<'a>,
}

impl<'c, 'a> TabsView<'c, 'a> {
    pub fn new(composition: &'c Composition<'a>) -> Self {
        Self { composition }
    }

    /// Split `area` into bar, slider and panel rects
    pub fn areas(&self, area: Rect) -> (Rect, Option<Rect>, Rect) {
        let bar = &self.composition.bar;
        let slider_rows = u16::from(bar.slider.is_some());
        let [bar_area, slider_area, panel_area] = Layout::vertical([
            Constraint::Length(bar.props.height),
            Constraint::Length(slider_rows),
            Constraint::Fill(1),
        ])
        .areas(area);
        let slider_area = (slider_rows > 0 && slider_area.height > 0).then_some(slider_area);
        (bar_area, slider_area, panel_area)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, registry: &mut RectRegistry) {
        let composition = self.composition;
        let bar = &composition.bar;
        let theme = &composition.theme;
        let (bar_area, slider_area, panel_area) = self.areas(area);

        let layout = BarLayout::compute(bar_area, &bar.labels, &bar.keys, bar.active.as_ref(), &bar.props);
        render_bar(f, bar_area, &layout, &bar.labels, bar.active.as_ref(), &bar.props, theme, registry);

        if let (Some(wrapper), Some(slider_area)) = (&bar.slider, slider_area) {
            render_slider(f, slider_area, &layout, wrapper, theme, registry);
        }

        if panel_area.height == 0 {
            return;
        }
        match &composition.panels {
            Some(PanelsNode::Explicit {
                containers,
                active,
                active_class,
            }) => render_containers(f, panel_area, containers, active.as_ref(), active_class, theme, registry),
            Some(PanelsNode::Wrapped(switcher)) => switcher.render(f, panel_area, theme, registry),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TabKey;
    use crate::elements::tab_bar::HWND_ACTIVE_TAB;
    use crate::managers::classifier::ChildNode;
    use crate::managers::geometry::BoundingBoxProvider;
    use crate::managers::tabs::{Tabs, TabsOptions, SETTLE_DELAY};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    fn draw(terminal: &mut Terminal<TestBackend>, tabs: &Tabs, registry: &mut RectRegistry, now: Instant) {
        terminal
            .draw(|f| {
                let composition = tabs.compose(now);
                TabsView::new(&composition).render(f, f.area(), registry);
            })
            .unwrap();
    }

    #[test]
    fn test_render_bar_slider_and_panel() {
        let children = vec![
            ChildNode::new("Home"),
            ChildNode::new("About"),
            ChildNode::panel("Welcome home"),
            ChildNode::panel("About us"),
        ];
        let t0 = Instant::now();
        let mut tabs = Tabs::new(TabsOptions::default(), children);
        tabs.mount(t0);
        let mut registry = RectRegistry::new();
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();

        draw(&mut terminal, &tabs, &mut registry, t0);
        assert!(row_text(&terminal, 0).starts_with(" Home  About "));
        assert_eq!(registry.tab_box(&TabKey::Index(1)).map(|b| b.offset_left), Some(6));

        let now = t0 + SETTLE_DELAY;
        tabs.tick(now);
        draw(&mut terminal, &tabs, &mut registry, now);
        assert!(tabs.after_paint(&registry, now));
        draw(&mut terminal, &tabs, &mut registry, now);

        assert!(row_text(&terminal, 1).starts_with("━━━━━━ "));
        assert!(row_text(&terminal, 3).contains("Welcome home"));
        assert!(registry.get_by_name(&tabs.options().active_class).is_some());
    }

    #[test]
    fn test_click_selects_realized_tab() {
        let t0 = Instant::now();
        let mut tabs = Tabs::new(TabsOptions::default(), vec![ChildNode::new("Home"), ChildNode::new("About")]);
        let mut registry = RectRegistry::new();
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        draw(&mut terminal, &tabs, &mut registry, t0);

        assert!(tabs.click(8, 0, &registry));
        assert_eq!(tabs.value(), Some(&TabKey::Index(1)));
        assert!(!tabs.click(25, 0, &registry));
    }

    #[test]
    fn test_active_label_is_registered_under_highlight_class() {
        let t0 = Instant::now();
        let mut tabs = Tabs::new(TabsOptions::default(), vec![ChildNode::new("Home"), ChildNode::new("About")]);
        let mut registry = RectRegistry::new();
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();

        draw(&mut terminal, &tabs, &mut registry, t0);
        assert_eq!(registry.get_by_name(HWND_ACTIVE_TAB), Some(Rect::new(0, 0, 6, 1)));

        tabs.select_index(1);
        draw(&mut terminal, &tabs, &mut registry, t0);
        assert_eq!(registry.get_by_name(HWND_ACTIVE_TAB), Some(Rect::new(6, 0, 7, 1)));

        tabs.set_children(Vec::new());
        draw(&mut terminal, &tabs, &mut registry, t0);
        assert!(registry.get_by_name(HWND_ACTIVE_TAB).is_none());
    }

    #[test]
    fn test_hidden_slider_gives_panels_the_row() {
        let options = TabsOptions {
            hide_slider: true,
            ..TabsOptions::default()
        };
        let tabs = Tabs::new(options, vec![ChildNode::new("Home"), ChildNode::panel("Body")]);
        let composition = tabs.compose(Instant::now());
        let (bar, slider, panels) = TabsView::new(&composition).areas(Rect::new(0, 0, 20, 6));
        assert_eq!(bar, Rect::new(0, 0, 20, 1));
        assert!(slider.is_none());
        assert_eq!(panels, Rect::new(0, 1, 20, 5));
    }
}
