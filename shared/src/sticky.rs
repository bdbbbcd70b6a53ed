use crate::date_format::DateFormatter;

/// Default distance, in pixels, used both as the visibility threshold and as
/// the probe offset below the viewport top.
pub const DEFAULT_STICKY_OFFSET: f64 = 100.0;

/// Vertical extent of one rendered date section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub date: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(date: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            date: date.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// What the page has to change after a scroll computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickyUpdate {
    /// New visibility, only when it flipped.
    pub visibility: Option<bool>,
    /// New label text, only when the current section changed.
    pub label: Option<String>,
}

impl StickyUpdate {
    pub fn is_noop(&self) -> bool {
        self.visibility.is_none() && self.label.is_none()
    }
}

/// Tracks which date section is under the sticky header.
#[derive(Debug, Clone)]
pub struct StickyDateTracker {
    offset: f64,
    formatter: DateFormatter,
    current: Option<String>,
    label: Option<String>,
    visible: bool,
}

impl StickyDateTracker {
    pub fn new(formatter: DateFormatter) -> Self {
        Self::with_offset(formatter, DEFAULT_STICKY_OFFSET)
    }

    pub fn with_offset(formatter: DateFormatter, offset: f64) -> Self {
        Self {
            offset,
            formatter,
            current: None,
            label: None,
            visible: false,
        }
    }

    pub fn current_date(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Recomputes state for a scroll offset.
    ///
    /// When no section contains the probe the previous section and label are
    /// kept.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> StickyUpdate {
        let mut update = StickyUpdate::default();

        let visible = scroll_y > self.offset;
        if visible != self.visible {
            self.visible = visible;
            update.visibility = Some(visible);
        }

        let probe = scroll_y + self.offset;
        if let Some(section) = sections.iter().find(|s| s.contains(probe)) {
            if self.current.as_deref() != Some(section.date.as_str()) {
                let label = self.formatter.label_for(&section.date);
                self.current = Some(section.date.clone());
                self.label = Some(label.clone());
                update.label = Some(label);
            }
        }

        update
    }
}

/// Single in-flight flag limiting scroll work to one computation per frame.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns `true` if the caller should schedule a frame.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn frame_done(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("2024-06-01", 200.0, 300.0),
            SectionBounds::new("2024-06-02", 500.0, 300.0),
        ]
    }

    #[fixture]
    fn tracker() -> StickyDateTracker {
        StickyDateTracker::new(DateFormatter::default())
    }

    #[rstest]
    fn test_top_boundary_selects_section(mut tracker: StickyDateTracker, sections: Vec<SectionBounds>) {
        // probe = 400 + 100 = 500, exactly the second section's top
        let update = tracker.on_scroll(400.0, &sections);
        assert_eq!(tracker.current_date(), Some("2024-06-02"));
        assert_eq!(update.label.as_deref(), Some("Sunday, June 2, 2024"));
        assert_eq!(update.visibility, Some(true));
    }

    #[rstest]
    fn test_scroll_to_zero_hides(mut tracker: StickyDateTracker, sections: Vec<SectionBounds>) {
        tracker.on_scroll(300.0, &sections);
        assert!(tracker.is_visible());

        let update = tracker.on_scroll(0.0, &sections);
        assert_eq!(update.visibility, Some(false));
        assert!(!tracker.is_visible());
    }

    #[rstest]
    fn test_threshold_is_exclusive(mut tracker: StickyDateTracker) {
        tracker.on_scroll(100.0, &[]);
        assert!(!tracker.is_visible());
        tracker.on_scroll(100.5, &[]);
        assert!(tracker.is_visible());
    }

    #[rstest]
    fn test_no_match_keeps_previous_label(mut tracker: StickyDateTracker) {
        let first = vec![SectionBounds::new("2024-06-01", 0.0, 150.0)];
        tracker.on_scroll(20.0, &first);
        assert_eq!(tracker.label(), Some("Saturday, June 1, 2024"));

        // probe = 250, outside every section
        let update = tracker.on_scroll(150.0, &first);
        assert_eq!(update.label, None);
        assert_eq!(tracker.current_date(), Some("2024-06-01"));
        assert_eq!(tracker.label(), Some("Saturday, June 1, 2024"));
    }

    #[rstest]
    fn test_same_section_is_noop(mut tracker: StickyDateTracker, sections: Vec<SectionBounds>) {
        tracker.on_scroll(150.0, &sections);
        let update = tracker.on_scroll(160.0, &sections);
        assert!(update.is_noop());
    }

    #[test]
    fn test_custom_offset() {
        let mut tracker = StickyDateTracker::with_offset(DateFormatter::default(), 0.0);
        let sections = vec![SectionBounds::new("2024-06-01", 10.0, 10.0)];
        tracker.on_scroll(10.0, &sections);
        assert_eq!(tracker.current_date(), Some("2024-06-01"));
    }

    #[test]
    fn test_frame_throttle_drops_until_done() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.try_schedule());
        assert!(!throttle.try_schedule());
        throttle.frame_done();
        assert!(throttle.try_schedule());
    }
}
