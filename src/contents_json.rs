//! Contents.json data model for Xcode asset catalogs.
//!
//! Only the subset of Apple's asset catalog schema needed for app icon sets
//! and splashscreen image sets is modelled here.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Author recorded in every generated manifest.
pub const MANIFEST_AUTHOR: &str = "react-native-toolbox";

/// Root structure of a Contents.json file
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ContentsFile {
    /// One entry per image in the set
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// Individual image entry within an asset catalog
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// The image filename, relative to the set directory
    pub filename: String,

    /// The device type for the image (e.g., "iphone", "ios-marketing", "universal")
    pub idiom: String,

    /// The scale factor (e.g., "1x", "2x", "3x")
    pub scale: String,

    /// The size in points (e.g., "60x60"); app icons only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Versioning and authorship information for the asset catalog
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Info {
    pub author: String,
    pub version: u8,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            author: MANIFEST_AUTHOR.to_string(),
            version: 1,
        }
    }
}

impl ContentsFile {
    pub fn new(images: Vec<ImageEntry>) -> Self {
        Self {
            images,
            info: Info::default(),
        }
    }
}

impl ImageEntry {
    /// Creates an entry without a point size (splashscreens)
    pub fn new(filename: String, idiom: &str, scale: &str) -> Self {
        Self {
            filename,
            idiom: idiom.to_string(),
            scale: scale.to_string(),
            size: None,
        }
    }

    /// Creates an app icon entry, `base_size` points square at `scale`
    pub fn new_app_icon(filename: String, idiom: &str, base_size: u32, scale: u32) -> Self {
        Self {
            filename,
            idiom: idiom.to_string(),
            scale: format!("{scale}x"),
            size: Some(format!("{base_size}x{base_size}")),
        }
    }
}

/// Writes `Contents.json` into `dir`, creating the directory if needed.
pub fn write_contents_json(dir: &Path, images: Vec<ImageEntry>) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let contents = ContentsFile::new(images);
    let json = serde_json::to_string_pretty(&contents).context("Failed to serialize Contents.json")?;

    std::fs::write(dir.join("Contents.json"), json).context("Failed to write Contents.json file")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_contents_file_creation() {
        let contents = ContentsFile::new(Vec::new());
        assert_eq!(contents.info.author, "react-native-toolbox");
        assert_eq!(contents.info.version, 1);
        assert!(contents.images.is_empty());
    }

    #[test]
    fn test_app_icon_entry() {
        let icon = ImageEntry::new_app_icon("Icon-60@2x.png".to_string(), "iphone", 60, 2);

        assert_eq!(icon.filename, "Icon-60@2x.png");
        assert_eq!(icon.idiom, "iphone");
        assert_eq!(icon.scale, "2x");
        assert_eq!(icon.size.as_deref(), Some("60x60"));
    }

    #[test]
    fn test_single_entry_json_serialization() {
        let contents = ContentsFile::new(vec![ImageEntry::new_app_icon(
            "Icon-60@2x.png".to_string(),
            "iphone",
            60,
            2,
        )]);

        let json = serde_json::to_string_pretty(&contents).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&json).expect("Generated JSON should be valid");

        assert_eq!(parsed["images"].as_array().unwrap().len(), 1);
        let image = &parsed["images"][0];
        assert_eq!(image["filename"], "Icon-60@2x.png");
        assert_eq!(image["idiom"], "iphone");
        assert_eq!(image["scale"], "2x");
        assert_eq!(image["size"], "60x60");
        assert_eq!(parsed["info"]["author"], "react-native-toolbox");
        assert_eq!(parsed["info"]["version"], 1);
    }

    #[test]
    fn test_size_omitted_when_absent() {
        let entry = ImageEntry::new("splashscreen@2x.png".to_string(), "universal", "2x");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["scale"], "2x");
        assert!(json.get("size").is_none());
    }

    #[test]
    fn test_write_contents_json() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let set_dir = temp_dir.path().join("AppIcon.appiconset");

        let images = vec![
            ImageEntry::new_app_icon("Icon-Small@2x.png".to_string(), "iphone", 29, 2),
            ImageEntry::new_app_icon("iTunesArtwork.png".to_string(), "ios-marketing", 1024, 1),
        ];
        write_contents_json(&set_dir, images).unwrap();

        let file_content = std::fs::read_to_string(set_dir.join("Contents.json")).unwrap();
        assert!(file_content.contains("\"Icon-Small@2x.png\""));
        assert!(file_content.contains("\"ios-marketing\""));
        assert!(file_content.contains("\"version\": 1"));
    }
}
