//! List Configuration
//!
//! Labels and presets. Defaults match the stock travel list; the UI may
//! override any field with a JSON object.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Heading, PDF title, share title and mail subject
    pub title: String,
    /// File name of the PDF export
    pub pdf_file_name: String,
    /// Quick-pick quantities offered before "Custom"
    pub quantity_presets: Vec<u32>,
    /// How long notices stay visible
    pub notice_timeout_ms: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            title: "My Travel List".to_string(),
            pdf_file_name: "travel-list.pdf".to_string(),
            quantity_presets: vec![1, 2, 3],
            notice_timeout_ms: 4000,
        }
    }
}

impl ListConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep their
    /// defaults; an empty or all-zero preset list is replaced by the default.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: ListConfig = serde_json::from_str(json)?;
        config.quantity_presets.retain(|n| *n > 0);
        if config.quantity_presets.is_empty() {
            tracing::warn!("no usable quantity presets configured, using defaults");
            config.quantity_presets = ListConfig::default().quantity_presets;
        }
        Ok(config)
    }
}
