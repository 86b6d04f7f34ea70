use std::collections::HashMap;

/// A named content region of the page, in navigation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub label: String,
    pub order_index: usize,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>, order_index: usize) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            order_index,
        }
    }

    /// Fragment identifier for this section, including the leading `#`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Live lookup of where each rendered section currently sits.
///
/// Implementations must read layout fresh on every call; the engine never
/// caches a position across frames.
pub trait SectionPositions {
    /// Top edge of the section relative to the top of the viewport, or `None`
    /// when the section has not been mounted yet.
    fn viewport_top(&self, id: &str) -> Option<f64>;
}

impl SectionPositions for HashMap<String, f64> {
    fn viewport_top(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}
