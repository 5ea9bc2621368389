// Panel Switcher
// Shows exactly one content panel: the one keyed like the active tab

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::{RectRegistry, TabKey};
use crate::managers::classifier::ChildNode;
use crate::utilities::Theme;

/// A set of panels of which only the active one is shown
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSwitcher<'a> {
    pub active: Option<TabKey>,
    /// Registry name given to the active panel's rect
    pub active_class: String,
    pub items: Vec<&'a ChildNode>,
}

impl<'a> PanelSwitcher<'a> {
    /// Panel keyed like the active tab
    pub fn active_panel(&self) -> Option<&'a ChildNode> {
        let active = self.active.as_ref()?;
        self.items
            .iter()
            .enumerate()
            .find(|(idx, item)| &item.key(*idx) == active)
            .map(|(_, item)| *item)
    }

    /// Key of the panel beside the active one. This is the switcher's change
    /// event; there is no wrap past either end.
    pub fn neighbour(&self, forward: bool) -> Option<TabKey> {
        let active = self.active.as_ref()?;
        let keys: Vec<TabKey> = self.items.iter().enumerate().map(|(idx, item)| item.key(idx)).collect();
        let current = keys.iter().position(|key| key == active)?;
        let next = if forward { current + 1 } else { current.checked_sub(1)? };
        keys.get(next).cloned()
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, registry: &mut RectRegistry) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border_style());

        let Some(panel) = self.active_panel() else {
            f.render_widget(block, area);
            registry.unregister_by_name(&self.active_class);
            return;
        };

        if let Some(value) = &panel.value {
            block = block.title(format!(" {} ", value));
        }
        let paragraph = Paragraph::new(panel_text(panel))
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
        registry.register(&self.active_class, area);
    }
}

/// Panel body: its own text, then one line per nested child
fn panel_text(panel: &ChildNode) -> Text<'_> {
    let mut lines: Vec<Line> = panel.text.lines().map(Line::from).collect();
    lines.extend(panel.children.iter().map(|child| Line::from(child.text.as_str())));
    Text::from(lines)
}

/// Render explicit panel containers, stacked, each switching on `active`
pub fn render_containers(
    f: &mut Frame,
    area: Rect,
    containers: &[&ChildNode],
    active: Option<&TabKey>,
    active_class: &str,
    theme: &Theme,
    registry: &mut RectRegistry,
) {
    if containers.is_empty() {
        return;
    }
    let rows = Layout::vertical(vec![Constraint::Fill(1); containers.len()]).split(area);
    for (container, row) in containers.iter().zip(rows.iter()) {
        let switcher = PanelSwitcher {
            active: active.cloned(),
            active_class: active_class.to_string(),
            items: container.children.iter().collect(),
        };
        switcher.render(f, *row, theme, registry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_panel_by_index_and_value() {
        let panels = [
            ChildNode::panel("first"),
            ChildNode::panel("named").with_value("settings"),
            ChildNode::panel("third"),
        ];
        let mut switcher = PanelSwitcher {
            active: Some(TabKey::Index(2)),
            active_class: "panel-active".to_string(),
            items: panels.iter().collect(),
        };
        assert_eq!(switcher.active_panel().map(|p| p.text.as_str()), Some("third"));

        switcher.active = Some(TabKey::from("settings"));
        assert_eq!(switcher.active_panel().map(|p| p.text.as_str()), Some("named"));

        switcher.active = Some(TabKey::Index(1));
        assert!(switcher.active_panel().is_none());

        switcher.active = None;
        assert!(switcher.active_panel().is_none());
    }

    #[test]
    fn test_neighbour_stops_at_the_ends() {
        let panels = [
            ChildNode::panel("first"),
            ChildNode::panel("named").with_value("settings"),
            ChildNode::panel("third"),
        ];
        let mut switcher = PanelSwitcher {
            active: Some(TabKey::Index(0)),
            active_class: "panel-active".to_string(),
            items: panels.iter().collect(),
        };
        assert_eq!(switcher.neighbour(true), Some(TabKey::from("settings")));
        assert_eq!(switcher.neighbour(false), None);

        switcher.active = Some(TabKey::from("settings"));
        assert_eq!(switcher.neighbour(true), Some(TabKey::Index(2)));

        switcher.active = Some(TabKey::Index(2));
        assert_eq!(switcher.neighbour(true), None);
        assert_eq!(switcher.neighbour(false), Some(TabKey::from("settings")));
    }
}
