use serde::{Deserialize, Serialize};

use super::playback::WallVariant;
use crate::motion::DEFAULT_SCROLL_STEP;
use crate::names::DEFAULT_REPEAT;
use log::warn;

/// Name of the global the embedding page sets before loading the widget.
pub const GLOBAL_CONFIG_KEY: &str = "wallOfSignersConfig";

pub const DEFAULT_TARGET_SELECTOR: &str = "#root";
pub const DEFAULT_CSV_URL: &str = "./signers.csv";
pub const DEFAULT_TITLE: &str = "Wall of Signers";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WallConfig {
    /// CSS selector of the mount point. Default `#root`.
    pub target_selector: String,

    /// Where the signer CSV is fetched from. Default `./signers.csv`.
    pub csv_url: String,

    /// `panel` (default) or `overlay`.
    pub variant: WallVariant,

    /// Heading and accessible label of the wall.
    pub title: String,

    /// Times the shuffled list repeats per half. Default 20, minimum 1.
    pub repeat: usize,

    /// Pixels advanced per frame. Default 0.25.
    pub scroll_step: f64,

    /// Optional link rendered under the wall, e.g. "Add your name".
    pub call_to_action: Option<CallToAction>,

    /// Mount as soon as the module loads. When false the page calls
    /// `mountWall` itself.
    pub auto_mount: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            target_selector: DEFAULT_TARGET_SELECTOR.to_string(),
            csv_url: DEFAULT_CSV_URL.to_string(),
            variant: WallVariant::default(),
            title: DEFAULT_TITLE.to_string(),
            repeat: DEFAULT_REPEAT,
            scroll_step: DEFAULT_SCROLL_STEP,
            call_to_action: None,
            auto_mount: true,
        }
    }
}

impl WallConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str::<Self>(json)
            .map(Self::normalized)
            .map_err(|err| format!("failed to parse wall config: {}", err))
    }

    /// Replaces unusable values with their defaults.
    pub fn normalized(mut self) -> Self {
        if self.target_selector.trim().is_empty() {
            warn!(
                "Empty targetSelector; falling back to '{}'",
                DEFAULT_TARGET_SELECTOR
            );
            self.target_selector = DEFAULT_TARGET_SELECTOR.to_string();
        }

        if self.csv_url.trim().is_empty() {
            warn!("Empty csvUrl; falling back to '{}'", DEFAULT_CSV_URL);
            self.csv_url = DEFAULT_CSV_URL.to_string();
        }

        if self.repeat == 0 {
            warn!("repeat must be at least 1; using 1");
            self.repeat = 1;
        }

        if !self.scroll_step.is_finite() || self.scroll_step <= 0.0 {
            warn!(
                "Invalid scrollStep {}; falling back to {}",
                self.scroll_step, DEFAULT_SCROLL_STEP
            );
            self.scroll_step = DEFAULT_SCROLL_STEP;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = WallConfig::from_json("{}").unwrap();
        assert_eq!(config, WallConfig::default());
        assert_eq!(config.target_selector, "#root");
        assert_eq!(config.csv_url, "./signers.csv");
        assert_eq!(config.repeat, 20);
        assert_eq!(config.scroll_step, 0.25);
        assert!(config.auto_mount);
    }

    #[test]
    fn reads_camel_case_options() {
        let config = WallConfig::from_json(
            r##"{
                "targetSelector": "#signers",
                "csvUrl": "/data/letter.csv",
                "variant": "overlay",
                "callToAction": { "label": "Sign", "href": "/sign" },
                "autoMount": false
            }"##,
        )
        .unwrap();

        assert_eq!(config.target_selector, "#signers");
        assert_eq!(config.csv_url, "/data/letter.csv");
        assert_eq!(config.variant, WallVariant::Overlay);
        assert_eq!(
            config.call_to_action,
            Some(CallToAction {
                label: "Sign".to_string(),
                href: "/sign".to_string(),
            })
        );
        assert!(!config.auto_mount);
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn unusable_values_are_normalized() {
        let config = WallConfig::from_json(
            r#"{ "targetSelector": " ", "repeat": 0, "scrollStep": -1 }"#,
        )
        .unwrap();

        assert_eq!(config.target_selector, DEFAULT_TARGET_SELECTOR);
        assert_eq!(config.repeat, 1);
        assert_eq!(config.scroll_step, DEFAULT_SCROLL_STEP);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = WallConfig::from_json(r#"{ "variant": "sidebar" }"#)
            .unwrap_err();
        assert!(err.contains("failed to parse wall config"));

        assert!(WallConfig::from_json("not json").is_err());
    }
}
