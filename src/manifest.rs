//! Web app manifest `icons` fragment
//!
//! Mirrors the icon member of the W3C Web App Manifest so the generated
//! `manifest-icons.json` can be pasted into the PWA's `manifest.json`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Name of the fragment written next to the icons.
pub const MANIFEST_FILENAME: &str = "manifest-icons.json";

/// Root of the fragment, holding only the `icons` array.
#[derive(Serialize, Debug, Clone, Default)]
pub struct ManifestFile {
    pub icons: Vec<ManifestIcon>,
}

/// One entry of the manifest `icons` array
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ManifestIcon {
    /// Path of the image relative to the site root (e.g., "icons/icon-72x72.png")
    pub src: String,

    /// Space separated pixel dimensions (e.g., "72x72")
    pub sizes: String,

    /// MIME type of the image
    #[serde(rename = "type")]
    pub mime_type: String,

    /// How the platform may use the icon (e.g., "any", "maskable")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl ManifestFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_icon(&mut self, icon: ManifestIcon) {
        self.icons.push(icon);
    }

    /// Serializes the fragment into `dir/manifest-icons.json`, replacing any previous one
    pub fn write_to_dir(&self, dir: &Path) -> Result<()> {
        let path = dir.join(MANIFEST_FILENAME);
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize manifest icons")?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

impl ManifestIcon {
    /// Square PNG icon living in `folder`, usable both as a plain and a maskable icon.
    ///
    /// The icon's artwork stays inside the central safe zone, which is what
    /// the `maskable` purpose requires.
    pub fn png(folder: &str, size: u32, filename: &str) -> Self {
        let src = if folder.is_empty() {
            filename.to_string()
        } else {
            format!("{}/{}", folder.trim_end_matches('/'), filename)
        };

        Self {
            src,
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
            purpose: Some("any maskable".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_png_icon_entry() {
        let icon = ManifestIcon::png("icons", 192, "icon-192x192.png");
        assert_eq!(icon.src, "icons/icon-192x192.png");
        assert_eq!(icon.sizes, "192x192");
        assert_eq!(icon.mime_type, "image/png");
        assert_eq!(icon.purpose.as_deref(), Some("any maskable"));
    }

    #[test]
    fn test_png_icon_without_folder() {
        let icon = ManifestIcon::png("", 72, "icon-72x72.png");
        assert_eq!(icon.src, "icon-72x72.png");

        let icon = ManifestIcon::png("static/", 72, "icon-72x72.png");
        assert_eq!(icon.src, "static/icon-72x72.png");
    }

    #[test]
    fn test_serialization_uses_manifest_keys() {
        let mut manifest = ManifestFile::new();
        manifest.add_icon(ManifestIcon::png("icons", 512, "icon-512x512.png"));
        manifest.add_icon(ManifestIcon {
            purpose: None,
            ..ManifestIcon::png("icons", 72, "icon-72x72.png")
        });

        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&json).expect("Generated JSON should be valid");

        let icons = parsed["icons"].as_array().unwrap();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0]["src"], "icons/icon-512x512.png");
        assert_eq!(icons[0]["sizes"], "512x512");
        assert_eq!(icons[0]["type"], "image/png");
        assert_eq!(icons[0]["purpose"], "any maskable");
        assert!(icons[1].get("purpose").is_none());
        assert!(icons[0].get("mime_type").is_none());
    }

    #[test]
    fn test_write_to_dir() {
        let temp_dir = TempDir::new().unwrap();

        let mut manifest = ManifestFile::new();
        manifest.add_icon(ManifestIcon::png("icons", 96, "icon-96x96.png"));
        manifest.write_to_dir(temp_dir.path()).unwrap();

        let path = temp_dir.path().join(MANIFEST_FILENAME);
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"src\": \"icons/icon-96x96.png\""));
        assert!(content.contains("\"type\": \"image/png\""));
    }
}
