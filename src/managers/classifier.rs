// Node Classifier
// Buckets the widget's child nodes into tab labels, slider, and panels

use crate::core::TabKey;

/// Declared role of a child node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Tab label. Classified like any untagged node.
    Tab,
    /// Replacement content for the default slider marker
    Slider,
    /// Explicit panel container holding its own panels
    Panels,
    /// A single content panel
    Panel,
    /// A component this widget does not know about
    Other(String),
}

impl NodeKind {
    /// Parse a kind from its configuration name
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "tab" => NodeKind::Tab,
            "slider" => NodeKind::Slider,
            "panels" | "items" => NodeKind::Panels,
            "panel" | "item" => NodeKind::Panel,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

/// A child node handed to the widget
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChildNode {
    pub kind: Option<NodeKind>,
    /// Explicit key; falls back to the node's index within its bucket
    pub value: Option<String>,
    pub text: String,
    pub icon: Option<String>,
    pub children: Vec<ChildNode>,
}

impl ChildNode {
    /// Untagged node; classified as a tab label
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn tab(text: impl Into<String>) -> Self {
        Self::new(text).with_kind(NodeKind::Tab)
    }

    /// Slider override; `fill` is the pattern repeated across the highlight
    pub fn slider(fill: impl Into<String>) -> Self {
        Self::new(fill).with_kind(NodeKind::Slider)
    }

    pub fn panels(children: Vec<ChildNode>) -> Self {
        Self {
            kind: Some(NodeKind::Panels),
            children,
            ..Self::default()
        }
    }

    pub fn panel(text: impl Into<String>) -> Self {
        Self::new(text).with_kind(NodeKind::Panel)
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Whether `classify` puts this node in the tab-label bucket
    pub fn is_tab_label(&self) -> bool {
        !matches!(
            self.kind,
            Some(NodeKind::Slider | NodeKind::Panels | NodeKind::Panel)
        )
    }

    /// Key of this node when it sits at `index` within its bucket
    pub fn key(&self, index: usize) -> TabKey {
        match &self.value {
            Some(value) => TabKey::Name(value.clone()),
            None => TabKey::Index(index),
        }
    }
}

/// Child nodes partitioned by role, each bucket in input order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassifiedChildren<'a> {
    pub tab_labels: Vec<&'a ChildNode>,
    pub slider_override: Vec<&'a ChildNode>,
    pub panel_container: Vec<&'a ChildNode>,
    pub panel_items: Vec<&'a ChildNode>,
}

impl ClassifiedChildren<'_> {
    /// Total number of classified nodes
    pub fn len(&self) -> usize {
        self.tab_labels.len() + self.slider_override.len() + self.panel_container.len() + self.panel_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys of the tab labels in bar order
    pub fn tab_keys(&self) -> Vec<TabKey> {
        keys_of(&self.tab_labels)
    }
}

/// Keys for a bucket of nodes, by position
pub fn keys_of(nodes: &[&ChildNode]) -> Vec<TabKey> {
    nodes.iter().enumerate().map(|(idx, node)| node.key(idx)).collect()
}

/// Partition `children` into role buckets in a single pass.
pub fn classify(children: &[ChildNode]) -> ClassifiedChildren<'_> {
    let mut classified = ClassifiedChildren::default();

    for node in children {
        match node.kind {
            Some(NodeKind::Slider) => classified.slider_override.push(node),
            Some(NodeKind::Panels) => classified.panel_container.push(node),
            Some(NodeKind::Panel) => classified.panel_items.push(node),
            // Tab is deliberately not matched: it lands with the untagged labels
            _ => classified.tab_labels.push(node),
        }
    }

    classified
}
