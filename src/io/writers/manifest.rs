use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{APP_NAME, APP_SHORT_NAME};

/// `site.webmanifest` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub icons: Vec<ManifestIcon>,
    pub theme_color: String,
    pub background_color: String,
    pub display: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ManifestIcon {
    fn png(size: u32) -> Self {
        Self {
            src: format!("/android-chrome-{size}x{size}.png"),
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
        }
    }
}

impl WebManifest {
    /// The fixed manifest for this site, parameterized by the two colors.
    pub fn new(theme_color: &str, background_color: &str) -> Self {
        Self {
            name: APP_NAME.to_string(),
            short_name: APP_SHORT_NAME.to_string(),
            icons: vec![ManifestIcon::png(192), ManifestIcon::png(512)],
            theme_color: theme_color.to_string(),
            background_color: background_color.to_string(),
            display: "standalone".to_string(),
        }
    }
}

/// Write `site.webmanifest` into `out_dir`, overwriting any existing file.
pub fn write_manifest(out_dir: &Path, theme_color: &str, background_color: &str) -> Result<()> {
    let manifest = WebManifest::new(theme_color, background_color);
    let mut json = serde_json::to_string_pretty(&manifest)?;
    json.push('\n');
    fs::write(out_dir.join("site.webmanifest"), json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_fields_match_supplied_colors() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "#112233", "#445566").unwrap();

        let raw = fs::read_to_string(dir.path().join("site.webmanifest")).unwrap();
        let parsed: WebManifest = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.name, "Gaurav Vijay Jadhav");
        assert_eq!(parsed.short_name, "GVJ");
        assert_eq!(parsed.theme_color, "#112233");
        assert_eq!(parsed.background_color, "#445566");
        assert_eq!(parsed.display, "standalone");
    }

    #[test]
    fn manifest_declares_both_chrome_icons() {
        let manifest = WebManifest::new("#000000", "#000000");
        assert_eq!(manifest.icons.len(), 2);
        assert_eq!(manifest.icons[0].src, "/android-chrome-192x192.png");
        assert_eq!(manifest.icons[0].sizes, "192x192");
        assert_eq!(manifest.icons[0].mime_type, "image/png");
        assert_eq!(manifest.icons[1].src, "/android-chrome-512x512.png");
        assert_eq!(manifest.icons[1].sizes, "512x512");
    }

    #[test]
    fn serialized_icon_uses_type_key() {
        let json = serde_json::to_string(&ManifestIcon::png(192)).unwrap();
        assert!(json.contains("\"type\":\"image/png\""));
        assert!(!json.contains("mime_type"));
    }
}
