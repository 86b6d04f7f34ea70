use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::Element;
use yew::NodeRef;

use super::error::{document, window, HostError};
use crate::scroll::indicator::ScrollMetrics;
use crate::scroll::sections::SectionPositions;
use crate::scroll::tracker::FragmentSink;

pub fn scroll_offset() -> Result<f64, HostError> {
    Ok(window()?.scroll_y()?)
}

pub fn scroll_to(offset: f64) -> Result<(), HostError> {
    window()?.scroll_to_with_x_and_y(0.0, offset);
    Ok(())
}

pub fn metrics() -> Result<ScrollMetrics, HostError> {
    let window = window()?;
    let viewport_height = window
        .inner_height()?
        .as_f64()
        .ok_or(HostError::Unavailable("viewport height"))?;
    let body = document()?
        .body()
        .ok_or(HostError::Unavailable("document body"))?;

    Ok(ScrollMetrics {
        scroll_offset: window.scroll_y()?,
        viewport_height,
        document_height: f64::from(body.scroll_height()),
    })
}

/// Section elements keyed by section id, read through `NodeRef`s so every
/// lookup sees the current layout.
#[derive(Clone, Default, PartialEq)]
pub struct SectionRefs {
    refs: HashMap<String, NodeRef>,
}

impl SectionRefs {
    pub fn new<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            refs: ids.into_iter().map(|id| (id.to_string(), NodeRef::default())).collect(),
        }
    }

    pub fn node_ref(&self, id: &str) -> NodeRef {
        self.refs.get(id).cloned().unwrap_or_default()
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.refs.get(id)?.cast::<Element>()
    }
}

impl SectionPositions for SectionRefs {
    fn viewport_top(&self, id: &str) -> Option<f64> {
        self.element(id).map(|el| el.get_bounding_client_rect().top())
    }
}

/// Session history through `replaceState`/`pushState`. Unlike assigning
/// `location.hash`, neither call scrolls.
pub struct BrowserHistory;

impl BrowserHistory {
    fn replace(fragment: &str) -> Result<(), HostError> {
        window()?
            .history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(fragment))?;
        Ok(())
    }

    fn push(fragment: &str) -> Result<(), HostError> {
        window()?
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(fragment))?;
        Ok(())
    }
}

impl FragmentSink for BrowserHistory {
    fn replace_fragment(&mut self, fragment: &str) {
        if let Err(e) = Self::replace(fragment) {
            log::warn!("Failed to replace URL fragment with {}: {}", fragment, e);
        }
    }

    fn push_fragment(&mut self, fragment: &str) {
        if let Err(e) = Self::push(fragment) {
            log::warn!("Failed to push URL fragment {}: {}", fragment, e);
        }
    }
}
