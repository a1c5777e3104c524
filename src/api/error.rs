use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::domain::SettingsError;

/// Failures while wiring the effect into the page
#[derive(Debug, Error)]
pub enum GlueError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id {0:?}")]
    MissingElement(String),
    #[error("element {0:?} is not a <canvas>")]
    NotACanvas(String),
    #[error("2d context unavailable")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl From<JsValue> for GlueError {
    fn from(value: JsValue) -> Self {
        GlueError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<GlueError> for JsValue {
    fn from(err: GlueError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
