// Rectangle Handle System (HWND-like)
// Tracks rendered rectangles by name, plus the tab boxes realized by the last bar paint
//
// Usage:
//   let mut registry = RectRegistry::new();
//   let handle = registry.register("tabs.bar", rect);
//   // After a paint pass...
//   if let Some(tab) = registry.tab_box(&TabKey::Index(0)) {
//       println!("Tab at {} spans {} cells", tab.offset_left, tab.scroll_width);
//   }

use ratatui::layout::Rect;
use std::collections::HashMap;

use crate::core::TabKey;
use crate::managers::geometry::{BoundingBoxProvider, TabBox};

/// Handle to a registered rectangle (similar to Windows HWND)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectHandle(u64);

/// A tab label as laid out by the most recent bar paint
#[derive(Debug, Clone, PartialEq)]
pub struct RealizedTab {
    pub key: TabKey,
    /// Box relative to the bar content origin
    pub tab_box: TabBox,
    /// Visible screen cells (empty when scrolled out of view)
    pub area: Rect,
}

/// Registry for tracking rendered rectangles with handles
#[derive(Debug, Clone)]
pub struct RectRegistry {
    rects: HashMap<u64, Rect>,
    name_to_handle: HashMap<String, u64>,
    /// Next handle ID to assign
    next_id: u64,
    tabs: Vec<RealizedTab>,
}

impl RectRegistry {
    pub fn new() -> Self {
        Self {
            rects: HashMap::new(),
            name_to_handle: HashMap::new(),
            next_id: 1, // 0 is never handed out
            tabs: Vec::new(),
        }
    }

    /// Register a named rectangle, updating it in place if the name exists
    pub fn register(&mut self, name: &str, rect: Rect) -> RectHandle {
        if let Some(&id) = self.name_to_handle.get(name) {
            self.rects.insert(id, rect);
            return RectHandle(id);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.rects.insert(id, rect);
        self.name_to_handle.insert(name.to_string(), id);
        RectHandle(id)
    }

    pub fn get(&self, handle: RectHandle) -> Option<Rect> {
        self.rects.get(&handle.0).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<Rect> {
        self.name_to_handle.get(name).and_then(|id| self.rects.get(id)).copied()
    }

    /// Remove a rectangle by name
    pub fn unregister_by_name(&mut self, name: &str) -> bool {
        match self.name_to_handle.remove(name) {
            Some(id) => self.rects.remove(&id).is_some(),
            None => false,
        }
    }

    /// Forget the tabs realized by the previous paint; called at the start of a bar pass
    pub fn begin_tabs(&mut self) {
        self.tabs.clear();
    }

    /// Record a tab laid out by the current bar pass
    pub fn realize_tab(&mut self, key: TabKey, tab_box: TabBox, area: Rect) {
        self.tabs.retain(|tab| tab.key != key);
        self.tabs.push(RealizedTab { key, tab_box, area });
    }

    /// Tabs realized by the last bar paint, in bar order
    pub fn realized_tabs(&self) -> &[RealizedTab] {
        &self.tabs
    }

    /// Key of the visible tab covering the cell at (column, row)
    pub fn tab_at(&self, column: u16, row: u16) -> Option<&TabKey> {
        self.tabs
            .iter()
            .find(|tab| {
                let area = tab.area;
                column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
            })
            .map(|tab| &tab.key)
    }
}

impl Default for RectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundingBoxProvider for RectRegistry {
    fn tab_box(&self, key: &TabKey) -> Option<TabBox> {
        self.tabs.iter().find(|tab| &tab.key == key).map(|tab| tab.tab_box)
    }
}
