use serde::{Deserialize, Serialize};

/// Page sections the navigation bar links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    ShelterFinder,
    EarthquakeMonitor,
}

impl Section {
    /// Anchor id of the section.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::ShelterFinder => "shelter-finder",
            Section::EarthquakeMonitor => "earthquake-monitor",
        }
    }
}

/// A section's bounding box relative to the viewport (pixels, top < bottom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    /// True if the section spans the top edge of the viewport.
    #[inline] pub fn spans_viewport_top(&self) -> bool { self.top <= 0.0 && self.bottom > 0.0 }
}

/// The section the user is reading. The earthquake monitor wins when both
/// qualify; when neither does the current section is kept.
pub fn active_section(current: Section, shelter: SectionBounds, earthquake: SectionBounds) -> Section {
    if earthquake.spans_viewport_top() {
        Section::EarthquakeMonitor
    } else if shelter.spans_viewport_top() {
        Section::ShelterFinder
    } else {
        current
    }
}

/// Lets through at most one scroll computation per animation frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameThrottle {
    last_frame: Option<u64>,
}

impl FrameThrottle {
    /// Returns true the first time it is called for `frame`.
    pub fn request(&mut self, frame: u64) -> bool {
        if self.last_frame.is_some_and(|last| frame <= last) { return false }
        self.last_frame = Some(frame);
        true
    }
}

/// Navigation bar state.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NavState {
    active: Section,
    menu_open: bool,
    #[serde(skip)]
    throttle: FrameThrottle,
}

impl NavState {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn active(&self) -> Section { self.active }
    #[inline] pub fn menu_open(&self) -> bool { self.menu_open }

    /// Colors flip while the earthquake monitor is on screen.
    #[inline] pub fn is_earthquake_section(&self) -> bool { self.active == Section::EarthquakeMonitor }

    pub fn toggle_menu(&mut self) { self.menu_open = !self.menu_open }

    /// Handle a scroll event in `frame`. Extra events in the same frame are ignored.
    /// Returns true if the active section changed.
    pub fn on_scroll(&mut self, frame: u64, shelter: SectionBounds, earthquake: SectionBounds) -> bool {
        if !self.throttle.request(frame) { return false }
        let next = active_section(self.active, shelter, earthquake);
        let changed = next != self.active;
        self.active = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(top: f64, bottom: f64) -> SectionBounds { SectionBounds { top, bottom } }

    #[test]
    fn earthquake_section_takes_priority() {
        let shelter = bounds(-900.0, 10.0);
        let earthquake = bounds(0.0, 900.0);
        assert_eq!(active_section(Section::ShelterFinder, shelter, earthquake), Section::EarthquakeMonitor);
    }

    #[test]
    fn shelter_section_when_at_top() {
        let shelter = bounds(-100.0, 800.0);
        let earthquake = bounds(800.0, 1700.0);
        assert_eq!(active_section(Section::EarthquakeMonitor, shelter, earthquake), Section::ShelterFinder);
    }

    #[test]
    fn keeps_current_when_neither_spans_top() {
        let shelter = bounds(64.0, 900.0);
        let earthquake = bounds(900.0, 1800.0);
        assert_eq!(active_section(Section::EarthquakeMonitor, shelter, earthquake), Section::EarthquakeMonitor);
    }

    #[test]
    fn throttle_allows_one_call_per_frame() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request(1));
        assert!(!throttle.request(1));
        assert!(!throttle.request(0));
        assert!(throttle.request(2));
    }

    #[test]
    fn nav_state_tracks_scroll_and_menu() {
        let mut nav = NavState::new();
        assert_eq!(nav.active(), Section::ShelterFinder);

        assert!(nav.on_scroll(1, bounds(-900.0, 0.0), bounds(-1.0, 900.0)));
        assert!(nav.is_earthquake_section());

        // Same frame: ignored even though the shelter section is back on top.
        assert!(!nav.on_scroll(1, bounds(-10.0, 900.0), bounds(900.0, 1800.0)));
        assert!(nav.is_earthquake_section());

        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.toggle_menu();
        assert!(!nav.menu_open());
        assert_eq!(Section::EarthquakeMonitor.anchor(), "earthquake-monitor");
    }
}
