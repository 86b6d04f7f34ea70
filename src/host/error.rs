use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("{0} is unavailable")]
    Unavailable(&'static str),
    #[error("javascript error: {0}")]
    JsError(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        HostError::JsError(message)
    }
}

pub fn window() -> Result<web_sys::Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, HostError> {
    window()?.document().ok_or(HostError::NoDocument)
}
