// Resize Signal
// Reports "layout may have changed" when the viewport or host insets move

/// Watches the viewport size and the host container's left/right insets.
///
/// In quiet mode the first observation only records the size; otherwise
/// attaching reports a signal like any later change.
#[derive(Debug, Clone, Default)]
pub struct ResizeSignal {
    quiet: bool,
    size: Option<(u16, u16)>,
    insets: (u16, u16),
}

impl ResizeSignal {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            size: None,
            insets: (0, 0),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.size.is_some()
    }

    /// Start observing a viewport of `width` x `height`
    pub fn attach(&mut self, width: u16, height: u16) -> bool {
        self.size = Some((width, height));
        !self.quiet
    }

    /// Record the current viewport size. Returns true when a signal is due.
    pub fn observe(&mut self, width: u16, height: u16) -> bool {
        match self.size {
            None => self.attach(width, height),
            Some(size) if size == (width, height) => false,
            Some(_) => {
                self.size = Some((width, height));
                true
            }
        }
    }

    /// Record the host container's insets around the widget
    pub fn observe_insets(&mut self, left: u16, right: u16) -> bool {
        if self.insets == (left, right) {
            return false;
        }
        self.insets = (left, right);
        self.is_attached()
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_attach_is_silent() {
        let mut signal = ResizeSignal::new(true);
        assert!(!signal.observe(80, 24));
        assert!(!signal.observe(80, 24));
        assert!(signal.observe(100, 24));
        assert_eq!(signal.size(), Some((100, 24)));
    }

    #[test]
    fn test_loud_attach_signals() {
        let mut signal = ResizeSignal::new(false);
        assert!(signal.attach(80, 24));
        assert!(!signal.observe(80, 24));
    }

    #[test]
    fn test_inset_shift_signals_once_attached() {
        let mut signal = ResizeSignal::new(true);
        assert!(!signal.observe_insets(20, 0));
        signal.observe(80, 24);
        assert!(!signal.observe_insets(20, 0));
        assert!(signal.observe_insets(0, 0));
    }
}
