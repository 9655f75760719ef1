use serde::{Deserialize, Serialize};

use crate::types::Background;

/// Generation parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaviconParams {
    /// Canvas padding fill behind non-square inputs
    pub background: Background,
    /// `theme_color` for the manifest, also the browserconfig tile color
    pub theme_color: String,
    /// `background_color` for the manifest
    pub background_color: String,
}

impl Default for FaviconParams {
    fn default() -> Self {
        Self {
            background: Background::Transparent,
            theme_color: "#050505".to_string(),
            background_color: "#050505".to_string(),
        }
    }
}
