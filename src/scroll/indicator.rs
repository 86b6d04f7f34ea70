/// Scroll state sampled from the host on every scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Whether the "scroll down" affordance should be shown: hidden once the
/// bottom of the viewport is within `margin` pixels of the document end.
pub fn indicator_visible(metrics: ScrollMetrics, margin: f64) -> bool {
    metrics.scroll_offset + metrics.viewport_height <= metrics.document_height - margin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_offset: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_offset,
            viewport_height: 800.0,
            document_height: 5000.0,
        }
    }

    #[test]
    fn visible_at_top() {
        assert!(indicator_visible(at(0.0), 300.0));
    }

    #[test]
    fn hidden_near_bottom() {
        assert!(!indicator_visible(at(4300.0), 300.0));
    }

    #[test]
    fn boundary_is_inclusive() {
        assert!(indicator_visible(at(3900.0), 300.0));
        assert!(!indicator_visible(at(3900.5), 300.0));
    }

    #[test]
    fn short_document_never_shows_indicator() {
        let metrics = ScrollMetrics {
            scroll_offset: 0.0,
            viewport_height: 800.0,
            document_height: 900.0,
        };
        assert!(!indicator_visible(metrics, 300.0));
    }
}
