use super::sections::Section;

/// The browser's session history as seen by the tracker. Neither method may
/// scroll the page.
pub trait FragmentSink {
    /// Rewrites the fragment of the current entry in place.
    fn replace_fragment(&mut self, fragment: &str);
    /// Adds a new entry carrying `fragment`.
    fn push_fragment(&mut self, fragment: &str);
}

/// Tracks which section is "in view" from the visibility ratios reported by
/// the host's intersection observer.
///
/// A section becomes active when its ratio rises from below the threshold to
/// at or above it. Reports that stay on the same side of the threshold are
/// ignored, so a section is activated once per crossing. When several
/// sections cross in the same batch, the last report applied wins.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<Section>,
    threshold: f64,
    ratios: Vec<f64>,
    active: usize,
}

impl SectionTracker {
    /// # Panics
    ///
    /// Panics if `sections` is empty. Site configuration never yields an
    /// empty list.
    pub fn new(sections: Vec<Section>, threshold: f64) -> Self {
        assert!(!sections.is_empty(), "section tracker needs at least one section");
        let ratios = vec![0.0; sections.len()];
        Self {
            sections,
            threshold,
            ratios,
            active: 0,
        }
    }

    pub fn active(&self) -> &Section {
        &self.sections[self.active]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Records a visibility report. Returns the newly activated section when
    /// the report crossed the threshold and changed the active section.
    pub fn observe(&mut self, id: &str, ratio: f64) -> Option<&Section> {
        let Some(index) = self.sections.iter().position(|s| s.id == id) else {
            log::debug!("Ignoring visibility report for unknown section `{}`", id);
            return None;
        };

        let previous = std::mem::replace(&mut self.ratios[index], ratio);
        let crossed = previous < self.threshold && ratio >= self.threshold;
        if !crossed || index == self.active {
            return None;
        }

        self.active = index;
        log::debug!("Active section is now `{}`", self.sections[index].id);
        Some(&self.sections[index])
    }

    /// Like [`observe`](Self::observe), and rewrites the current history
    /// entry's fragment when the active section changed. Tracking never
    /// pushes entries, so back/forward skip over it.
    pub fn observe_and_sync<S: FragmentSink + ?Sized>(
        &mut self,
        id: &str,
        ratio: f64,
        sink: &mut S,
    ) -> Option<&Section> {
        let fragment = self.observe(id, ratio)?.fragment();
        sink.replace_fragment(&fragment);
        Some(self.active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A history stack: pushes append an entry, replacements rewrite the
    /// last one.
    struct FakeHistory {
        entries: Vec<String>,
        replacements: usize,
    }

    impl FakeHistory {
        fn new() -> Self {
            Self {
                entries: vec![String::new()],
                replacements: 0,
            }
        }

        fn fragment(&self) -> &str {
            self.entries.last().map(String::as_str).unwrap_or_default()
        }
    }

    impl FragmentSink for FakeHistory {
        fn replace_fragment(&mut self, fragment: &str) {
            if let Some(last) = self.entries.last_mut() {
                *last = fragment.to_string();
            }
            self.replacements += 1;
        }

        fn push_fragment(&mut self, fragment: &str) {
            self.entries.push(fragment.to_string());
        }
    }

    fn layout() -> Vec<Section> {
        ["home", "about", "ethos", "connect"]
            .into_iter()
            .enumerate()
            .map(|(i, id)| Section::new(id, id.to_uppercase(), i))
            .collect()
    }

    #[test]
    fn defaults_to_first_section() {
        let tracker = SectionTracker::new(layout(), 0.5);
        assert_eq!(tracker.active().id, "home");
    }

    #[test]
    fn activates_once_per_crossing() {
        let mut tracker = SectionTracker::new(layout(), 0.5);
        assert!(tracker.observe("about", 0.3).is_none());
        assert_eq!(tracker.observe("about", 0.6).map(|s| s.id.as_str()), Some("about"));
        assert!(tracker.observe("about", 0.7).is_none());
        assert!(tracker.observe("about", 0.9).is_none());
        assert_eq!(tracker.active().id, "about");
    }

    #[test]
    fn falling_below_threshold_does_not_activate() {
        let mut tracker = SectionTracker::new(layout(), 0.5);
        tracker.observe("about", 0.8);
        assert!(tracker.observe("home", 0.4).is_none());
        assert_eq!(tracker.active().id, "about");
    }

    #[test]
    fn recrossing_reactivates_section() {
        let mut tracker = SectionTracker::new(layout(), 0.5);
        tracker.observe("about", 0.6);
        tracker.observe("ethos", 0.6);
        tracker.observe("about", 0.2);
        assert_eq!(tracker.observe("about", 0.55).map(|s| s.id.as_str()), Some("about"));
    }

    #[test]
    fn last_report_in_batch_wins() {
        let mut tracker = SectionTracker::new(layout(), 0.5);
        tracker.observe("about", 0.6);
        tracker.observe("ethos", 0.6);
        assert_eq!(tracker.active().id, "ethos");
    }

    #[test]
    fn unknown_section_is_ignored() {
        let mut tracker = SectionTracker::new(layout(), 0.5);
        assert!(tracker.observe("careers", 1.0).is_none());
        assert_eq!(tracker.active().id, "home");
    }

    #[test]
    fn fragment_follows_active_section_without_new_entries() {
        let mut tracker = SectionTracker::new(layout(), 0.5);
        let mut history = FakeHistory::new();

        // leave home first so home -> about -> ethos are three real changes
        tracker.observe_and_sync("connect", 0.9, &mut history);
        tracker.observe_and_sync("home", 0.9, &mut history);
        tracker.observe_and_sync("about", 0.6, &mut history);
        tracker.observe_and_sync("ethos", 0.7, &mut history);

        assert_eq!(history.fragment(), "#ethos");
        assert_eq!(history.entries.len(), 1);
        assert_eq!(history.replacements, 4);
    }

    #[test]
    fn unchanged_active_section_leaves_fragment_alone() {
        let mut tracker = SectionTracker::new(layout(), 0.5);
        let mut history = FakeHistory::new();
        tracker.observe_and_sync("home", 1.0, &mut history);
        assert_eq!(history.replacements, 0);
        assert_eq!(history.fragment(), "");
    }
}
