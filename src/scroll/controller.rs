use super::easing::ease_in_out;
use super::sections::SectionPositions;
use crate::config::ScrollSettings;

/// One programmatic scroll from `start_offset` to `end_offset`. Times are in
/// milliseconds on the host's monotonic clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub start_offset: f64,
    pub end_offset: f64,
    pub start_time: f64,
    pub duration: f64,
}

impl ScrollAnimation {
    pub fn progress_at(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    pub fn offset_at(&self, now: f64) -> f64 {
        let progress = self.progress_at(now);
        if progress >= 1.0 {
            return self.end_offset;
        }
        self.start_offset + (self.end_offset - self.start_offset) * ease_in_out(progress)
    }
}

/// Identifies one scroll request. A ticket goes stale as soon as a newer
/// request starts or the controller is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Set the scroll offset and schedule another frame.
    Continue(f64),
    /// Set the final scroll offset; the animation is over.
    Finished(f64),
    /// The ticket was replaced or cancelled; leave the scroll offset alone.
    Superseded,
}

#[derive(Debug)]
pub struct ScrollController {
    duration: f64,
    header_offset: f64,
    generation: u64,
    in_flight: Option<(ScrollTicket, ScrollAnimation)>,
}

impl ScrollController {
    pub fn new(settings: &ScrollSettings) -> Self {
        Self {
            duration: settings.duration_ms,
            header_offset: settings.header_offset,
            generation: 0,
            in_flight: None,
        }
    }

    /// Where the page must scroll to so the section's top edge sits
    /// `header_offset` pixels below the top of the viewport.
    pub fn target_offset(&self, viewport_top: f64, current_offset: f64) -> f64 {
        viewport_top + current_offset - self.header_offset
    }

    /// Starts scrolling towards `id`, cancelling whatever was in flight.
    /// Returns `None` without side effects when the section is not mounted.
    pub fn start<P: SectionPositions + ?Sized>(
        &mut self,
        id: &str,
        positions: &P,
        current_offset: f64,
        now: f64,
    ) -> Option<ScrollTicket> {
        let Some(top) = positions.viewport_top(id) else {
            log::debug!("Scroll target `{}` is not mounted", id);
            return None;
        };

        let animation = ScrollAnimation {
            start_offset: current_offset,
            end_offset: self.target_offset(top, current_offset),
            start_time: now,
            duration: self.duration,
        };
        Some(self.arm(animation))
    }

    /// Installs `animation` as the only live animation.
    pub fn arm(&mut self, animation: ScrollAnimation) -> ScrollTicket {
        if self.in_flight.is_some() {
            log::debug!("Superseding in-flight scroll animation");
        }
        self.generation += 1;
        let ticket = ScrollTicket(self.generation);
        self.in_flight = Some((ticket, animation));
        ticket
    }

    /// Advances the animation owned by `ticket` to `now`.
    pub fn step(&mut self, ticket: ScrollTicket, now: f64) -> Step {
        let animation = match self.in_flight {
            Some((live, animation)) if live == ticket => animation,
            _ => return Step::Superseded,
        };

        let offset = animation.offset_at(now);
        if animation.progress_at(now) >= 1.0 {
            self.in_flight = None;
            Step::Finished(offset)
        } else {
            Step::Continue(offset)
        }
    }

    pub fn cancel(&mut self) {
        if self.in_flight.take().is_some() {
            self.generation += 1;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&ScrollAnimation> {
        self.in_flight.as_ref().map(|(_, animation)| animation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(header_offset: f64) -> ScrollSettings {
        ScrollSettings {
            header_offset,
            ..ScrollSettings::default()
        }
    }

    fn positions() -> HashMap<String, f64> {
        HashMap::from([("about".to_string(), 2000.0), ("connect".to_string(), 5000.0)])
    }

    #[test]
    fn animation_hits_both_endpoints() {
        let animation = ScrollAnimation {
            start_offset: 1000.0,
            end_offset: 3000.0,
            start_time: 50.0,
            duration: 220.0,
        };
        assert_eq!(animation.offset_at(50.0), 1000.0);
        assert_eq!(animation.offset_at(50.0 + 220.0), 3000.0);

        let midway = animation.offset_at(50.0 + 110.0);
        assert!(midway > 1000.0 && midway < 3000.0);
    }

    #[test]
    fn progress_is_clamped() {
        let animation = ScrollAnimation {
            start_offset: 0.0,
            end_offset: 100.0,
            start_time: 10.0,
            duration: 220.0,
        };
        assert_eq!(animation.progress_at(0.0), 0.0);
        assert_eq!(animation.progress_at(10_000.0), 1.0);
        assert_eq!(animation.offset_at(10_000.0), 100.0);
    }

    #[test]
    fn end_offset_accounts_for_header() {
        let mut controller = ScrollController::new(&settings(72.0));
        controller.start("about", &positions(), 1000.0, 0.0).unwrap();
        let animation = controller.current().unwrap();
        assert_eq!(animation.start_offset, 1000.0);
        assert_eq!(animation.end_offset, 2000.0 + 1000.0 - 72.0);
    }

    #[test]
    fn default_settings_put_section_at_viewport_top() {
        let mut controller = ScrollController::new(&ScrollSettings::default());
        let ticket = controller.start("about", &positions(), 1000.0, 0.0).unwrap();
        assert_eq!(controller.step(ticket, 220.0), Step::Finished(3000.0));
    }

    #[test]
    fn converges_from_1000_to_3000() {
        let mut controller = ScrollController::new(&settings(0.0));
        let ticket = controller.start("about", &positions(), 1000.0, 0.0).unwrap();

        assert_eq!(controller.step(ticket, 0.0), Step::Continue(1000.0));
        match controller.step(ticket, 110.0) {
            Step::Continue(offset) => assert!(offset > 1000.0 && offset < 3000.0),
            other => panic!("expected animation to continue, got {:?}", other),
        }
        assert_eq!(controller.step(ticket, 220.0), Step::Finished(3000.0));
        assert!(!controller.is_animating());
        assert_eq!(controller.step(ticket, 240.0), Step::Superseded);
    }

    #[test]
    fn unmounted_target_is_a_no_op() {
        let mut controller = ScrollController::new(&settings(72.0));
        assert!(controller.start("careers", &positions(), 0.0, 0.0).is_none());
        assert!(!controller.is_animating());
    }

    #[test]
    fn new_request_supersedes_in_flight_animation() {
        let mut controller = ScrollController::new(&settings(0.0));
        let first = controller.start("about", &positions(), 0.0, 0.0).unwrap();
        controller.step(first, 100.0);

        let second = controller.start("connect", &positions(), 900.0, 100.0).unwrap();
        assert_eq!(controller.step(first, 120.0), Step::Superseded);
        assert_eq!(controller.step(second, 100.0 + 220.0), Step::Finished(5900.0));
    }

    #[test]
    fn cancel_invalidates_ticket() {
        let mut controller = ScrollController::new(&settings(0.0));
        let ticket = controller.start("about", &positions(), 0.0, 0.0).unwrap();
        controller.cancel();
        assert_eq!(controller.step(ticket, 50.0), Step::Superseded);
        assert!(controller.current().is_none());
    }
}
