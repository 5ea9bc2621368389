// Selection State
// Active tab key with an outward change queue

use std::fmt;

/// Identifier of a tab label.
///
/// Labels without an explicit value are keyed by their position among the
/// tab labels, matching how the bar enumerates its items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TabKey {
    Index(usize),
    Name(String),
}

impl fmt::Display for TabKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabKey::Index(idx) => write!(f, "#{}", idx),
            TabKey::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for TabKey {
    fn from(idx: usize) -> Self {
        TabKey::Index(idx)
    }
}

impl From<&str> for TabKey {
    fn from(name: &str) -> Self {
        TabKey::Name(name.to_string())
    }
}

impl From<String> for TabKey {
    fn from(name: String) -> Self {
        TabKey::Name(name)
    }
}

/// Holds the single active key.
///
/// Writes come from two places only: the bar's change notification
/// (`apply_change`, queued outward for the host) and the host's own binding
/// (`bind`, not echoed back).
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    active: Option<TabKey>,
    outbox: Vec<TabKey>,
}

impl SelectionState {
    pub fn new(initial: Option<TabKey>) -> Self {
        Self {
            active: initial,
            outbox: Vec::new(),
        }
    }

    /// Currently active key
    pub fn active(&self) -> Option<&TabKey> {
        self.active.as_ref()
    }

    /// Record a change emitted by the bar. Returns true if the key differs.
    pub fn apply_change(&mut self, key: TabKey) -> bool {
        if self.active.as_ref() == Some(&key) {
            return false;
        }
        self.active = Some(key.clone());
        self.outbox.push(key);
        true
    }

    /// Set the key from the host binding. Returns true if the key differs.
    pub fn bind(&mut self, key: Option<TabKey>) -> bool {
        if self.active == key {
            return false;
        }
        self.active = key;
        true
    }

    /// Drop the active key once the bar has nothing to select. Not queued outward.
    pub fn clear(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Drain change notifications not yet delivered to the host
    pub fn take_changes(&mut self) -> Vec<TabKey> {
        std::mem::take(&mut self.outbox)
    }
}
