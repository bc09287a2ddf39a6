//! Options passed to `start_popup` and `start_background`
//!
//! Both scripts must pass the same options so the popup saves where the watcher reads.

use crate::bridge::ExtensionApi;
use crate::storage::StorageArea;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtensionConfig {
    pub storage_area: StorageArea,
    pub log_level: LogLevel,
}

impl ExtensionConfig {
    /// `undefined` and `null` mean "all defaults"
    pub fn from_js(options: JsValue) -> Result<ExtensionConfig, serde_wasm_bindgen::Error> {
        if options.is_undefined() || options.is_null() {
            return Ok(ExtensionConfig::default());
        }
        serde_wasm_bindgen::from_value(options)
    }

    /// Browser access backed by the configured storage area
    pub fn extension_api(&self) -> ExtensionApi {
        ExtensionApi::new(self.storage_area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtensionConfig::default();

        assert_eq!(config.storage_area, StorageArea::Local);
        assert_eq!(config.log_level.to_level(), log::Level::Info);
    }

    #[test]
    fn test_partial_options() {
        let config: ExtensionConfig = serde_json::from_str(r#"{"storageArea": "sync"}"#).unwrap();

        assert_eq!(config.storage_area, StorageArea::Sync);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_full_options() {
        let config: ExtensionConfig =
            serde_json::from_str(r#"{"storageArea": "local", "logLevel": "debug"}"#).unwrap();

        assert_eq!(config.log_level.to_level(), log::Level::Debug);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let result = serde_json::from_str::<ExtensionConfig>(r#"{"logLevel": "verbose"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_popup_and_watcher_share_storage_area() {
        let config: ExtensionConfig = serde_json::from_str(r#"{"storageArea": "sync"}"#).unwrap();

        let popup = crate::ui::popup::AppProps { config: config.clone() };
        let watcher_api = crate::background::watcher_api(&config);

        assert_eq!(popup.extension_api().area(), StorageArea::Sync);
        assert_eq!(watcher_api.area(), popup.extension_api().area());
    }
}
