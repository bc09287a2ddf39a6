use wasm_bindgen::JsValue;

/// Failures talking to the browser through the JS bridge
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZoomError {
    #[error("browser call failed: {0}")]
    Bridge(String),
    #[error("unexpected value from browser: {0}")]
    Decode(String),
    #[error("no active tab in the current window")]
    NoActiveTab,
    #[error("no hostname in url: {0:?}")]
    NoHostname(String),
}

impl ZoomError {
    pub fn bridge(err: JsValue) -> ZoomError {
        ZoomError::Bridge(format!("{:?}", err))
    }
}

impl From<serde_wasm_bindgen::Error> for ZoomError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ZoomError::Decode(err.to_string())
    }
}
