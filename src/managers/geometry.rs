// Slider Geometry
// Measures the highlight against the selected tab's rendered box

use std::collections::HashMap;
use std::time::Duration;

use crate::core::TabKey;

/// Duration of the slide between two measured positions
pub const TRANSITION_TIME: Duration = Duration::from_millis(300);

/// Rendered box of a realized tab label, in cells.
///
/// `offset_left` is relative to the bar's content origin (before any overflow
/// scroll is applied). `scroll_width` is the full label width, while
/// `client_width` is the part left visible after clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabBox {
    pub offset_left: u16,
    pub client_width: u16,
    pub scroll_width: u16,
}

/// Measured highlight position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderBox {
    pub left: u16,
    pub width: u16,
}

/// Source of rendered tab boxes, available once a paint pass has committed.
pub trait BoundingBoxProvider {
    /// Box of the tab keyed `key`, or None if it is not realized
    fn tab_box(&self, key: &TabKey) -> Option<TabBox>;
}

impl<P: BoundingBoxProvider + ?Sized> BoundingBoxProvider for &P {
    fn tab_box(&self, key: &TabKey) -> Option<TabBox> {
        (**self).tab_box(key)
    }
}

impl BoundingBoxProvider for HashMap<TabKey, TabBox> {
    fn tab_box(&self, key: &TabKey) -> Option<TabBox> {
        self.get(key).copied()
    }
}

/// Measure the slider for the selected tab's box.
///
/// Returns None when there is nothing to measure; callers keep their previous
/// box in that case rather than clearing it.
pub fn measure(selected: Option<&TabBox>) -> Option<SliderBox> {
    selected.map(|tab| SliderBox {
        left: tab.offset_left,
        width: tab.scroll_width,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Jump straight to the target
    None,
    /// Slide from the previous box over the given duration
    Animated(Duration),
}

/// Style of the slider wrapper derived from the last two measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderStyle {
    pub previous: Option<SliderBox>,
    pub current: Option<SliderBox>,
    pub transition: Transition,
}

impl SliderStyle {
    /// The first placement out of an unmeasured state never animates.
    pub fn derive(previous: Option<SliderBox>, current: Option<SliderBox>, duration: Duration) -> Self {
        let transition = match previous {
            None => Transition::None,
            Some(_) => Transition::Animated(duration),
        };
        Self {
            previous,
            current,
            transition,
        }
    }

    /// Position to draw `elapsed` after the last measurement
    pub fn frame_at(&self, elapsed: Duration) -> Option<SliderBox> {
        let to = self.current?;
        match (self.transition, self.previous) {
            (Transition::Animated(duration), Some(from)) if elapsed < duration => {
                let t = elapsed.as_secs_f32() / duration.as_secs_f32();
                let eased = 1.0 - (1.0 - t).powi(3);
                Some(SliderBox {
                    left: lerp(from.left, to.left, eased),
                    width: lerp(from.width, to.width, eased),
                })
            }
            _ => Some(to),
        }
    }

    /// Whether the slide is still in progress `elapsed` after the last measurement
    pub fn is_animating(&self, elapsed: Duration) -> bool {
        match (self.transition, self.previous, self.current) {
            (Transition::Animated(duration), Some(from), Some(to)) => from != to && elapsed < duration,
            _ => false,
        }
    }
}

fn lerp(from: u16, to: u16, t: f32) -> u16 {
    let value = from as f32 + (to as f32 - from as f32) * t;
    value.round().clamp(0.0, u16::MAX as f32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_uses_scroll_width_and_offset() {
        let tab = TabBox {
            offset_left: 40,
            client_width: 90,
            scroll_width: 120,
        };
        assert_eq!(measure(Some(&tab)), Some(SliderBox { left: 40, width: 120 }));
    }

    #[test]
    fn test_measure_without_selection() {
        assert_eq!(measure(None), None);
    }

    #[test]
    fn test_first_placement_does_not_animate() {
        let style = SliderStyle::derive(None, Some(SliderBox { left: 4, width: 8 }), TRANSITION_TIME);
        assert_eq!(style.transition, Transition::None);
        assert_eq!(style.frame_at(Duration::ZERO), Some(SliderBox { left: 4, width: 8 }));
        assert!(!style.is_animating(Duration::ZERO));
    }

    #[test]
    fn test_slide_interpolates_toward_target() {
        let from = SliderBox { left: 0, width: 10 };
        let to = SliderBox { left: 20, width: 6 };
        let style = SliderStyle::derive(Some(from), Some(to), TRANSITION_TIME);
        assert_eq!(style.transition, Transition::Animated(TRANSITION_TIME));

        assert_eq!(style.frame_at(Duration::ZERO), Some(from));
        let mid = style.frame_at(Duration::from_millis(150)).unwrap();
        assert!(mid.left > 0 && mid.left < 20);
        assert!(mid.width < 10 && mid.width > 6);
        assert_eq!(style.frame_at(TRANSITION_TIME), Some(to));
        assert!(style.is_animating(Duration::from_millis(150)));
        assert!(!style.is_animating(TRANSITION_TIME));
    }

    #[test]
    fn test_unmeasured_style_draws_nothing() {
        let style = SliderStyle::derive(None, None, TRANSITION_TIME);
        assert_eq!(style.frame_at(Duration::from_millis(10)), None);
    }

    #[test]
    fn test_map_provider() {
        let mut boxes = HashMap::new();
        boxes.insert(TabKey::Index(1), TabBox { offset_left: 7, client_width: 5, scroll_width: 5 });
        assert_eq!(boxes.tab_box(&TabKey::Index(1)).map(|b| b.offset_left), Some(7));
        assert!(boxes.tab_box(&TabKey::Index(0)).is_none());
    }
}
