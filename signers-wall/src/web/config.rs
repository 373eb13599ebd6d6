use js_sys::{JSON, Reflect};
use log::{debug, error};
use wasm_bindgen::JsValue;

use crate::runtime::{GLOBAL_CONFIG_KEY, WallConfig};

/// Reads `window.wallOfSignersConfig`. Missing or malformed config falls
/// back to the defaults.
pub fn read_global_config() -> WallConfig {
    let Some(window) = web_sys::window() else {
        return WallConfig::default();
    };

    match Reflect::get(&window, &JsValue::from_str(GLOBAL_CONFIG_KEY)) {
        Ok(value) => config_from_js(&value),
        Err(err) => {
            error!("Failed to read window.{}: {:?}", GLOBAL_CONFIG_KEY, err);
            WallConfig::default()
        }
    }
}

pub fn config_from_js(value: &JsValue) -> WallConfig {
    if value.is_undefined() || value.is_null() {
        debug!("No wall config provided; using defaults");
        return WallConfig::default();
    }

    let json = match JSON::stringify(value) {
        Ok(json) => String::from(json),
        Err(err) => {
            error!("Wall config is not serializable: {:?}; using defaults", err);
            return WallConfig::default();
        }
    };

    WallConfig::from_json(&json).unwrap_or_else(|err| {
        error!("{}; using defaults", err);
        WallConfig::default()
    })
}
