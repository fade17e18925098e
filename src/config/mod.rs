//! Slicing configuration
//!
//! All thresholds and the output name list live in one [`SlicerConfig`]
//! value that is passed explicitly through the pipeline. Values come from
//! the built-in defaults, optionally overlaid by a TOML file and then by
//! command line flags.

pub mod names;

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use image::ImageFormat;
use log::info;

use crate::errors::{SliceError, SliceResult};

/// Default brightness threshold (sum of r, g and b)
pub const DEFAULT_BRIGHTNESS_THRESHOLD: u32 = 25;
/// Default minimum bounding box area, exclusive
pub const DEFAULT_MIN_AREA: u64 = 1000;
/// Default vertical center gap that starts a new row
pub const DEFAULT_ROW_GAP: f64 = 50.0;
/// Default per-channel threshold below which a pixel becomes transparent
pub const DEFAULT_TRANSPARENCY_THRESHOLD: u8 = 40;
/// Default prefix for objects beyond the end of the name list
pub const DEFAULT_FALLBACK_PREFIX: &str = "extra_";

/// Image format used for extracted objects
///
/// Only formats that keep an alpha channel are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    WebP,
    Tiff,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive)
    pub fn from_name(name: &str) -> SliceResult<Self> {
        match name.to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "webp" => Ok(OutputFormat::WebP),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            other => Err(SliceError::ConfigError(format!("Unsupported output format: {}", other))),
        }
    }

    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
            OutputFormat::Tiff => "tiff",
        }
    }

    /// Matching `image` crate format
    pub fn image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::WebP => ImageFormat::WebP,
            OutputFormat::Tiff => ImageFormat::Tiff,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Thresholds, names and output options for one slicing run
#[derive(Debug, Clone, PartialEq)]
pub struct SlicerConfig {
    /// A pixel is foreground when `r + g + b` exceeds this
    pub brightness_threshold: u32,
    /// Regions need a bounding box area strictly above this
    pub min_area: u64,
    /// Vertical center gap above which a new row starts
    pub row_gap: f64,
    /// Pixels with all of r, g, b below this become fully transparent
    pub transparency_threshold: u8,
    /// Names assigned to objects in reading order
    pub names: Vec<String>,
    /// Prefix for objects beyond the end of `names`
    pub fallback_prefix: String,
    /// Encoding for written objects
    pub output_format: OutputFormat,
    /// Log failed writes and carry on instead of stopping at the first one
    pub continue_on_write_error: bool,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        SlicerConfig {
            brightness_threshold: DEFAULT_BRIGHTNESS_THRESHOLD,
            min_area: DEFAULT_MIN_AREA,
            row_gap: DEFAULT_ROW_GAP,
            transparency_threshold: DEFAULT_TRANSPARENCY_THRESHOLD,
            names: names::default_names(),
            fallback_prefix: DEFAULT_FALLBACK_PREFIX.to_string(),
            output_format: OutputFormat::default(),
            continue_on_write_error: false,
        }
    }
}

impl SlicerConfig {
    /// Parse a configuration from a TOML string
    ///
    /// Keys that are absent keep their default values. Recognized layout:
    ///
    /// ```toml
    /// names = ["first", "second"]
    ///
    /// [thresholds]
    /// brightness = 25
    /// min_area = 1000
    /// row_gap = 50.0
    /// transparency = 40
    ///
    /// [output]
    /// fallback_prefix = "extra_"
    /// format = "png"
    /// continue_on_write_error = false
    /// ```
    pub fn from_toml_str(content: &str) -> SliceResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| SliceError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut config = SlicerConfig::default();

        if let Some(names) = names::names_from_value(&toml_value) {
            config.names = names?;
        }

        if let Some(table) = toml_value.get("thresholds").and_then(|v| v.as_table()) {
            if let Some(v) = table.get("brightness") {
                config.brightness_threshold = Self::integer_in_range(v, "brightness", 0, 765)? as u32;
            }
            if let Some(v) = table.get("min_area") {
                config.min_area = Self::integer_in_range(v, "min_area", 0, i64::MAX)? as u64;
            }
            if let Some(v) = table.get("row_gap") {
                config.row_gap = match (v.as_float(), v.as_integer()) {
                    (Some(f), _) => f,
                    (None, Some(i)) => i as f64,
                    _ => return Err(SliceError::ConfigError(format!("row_gap must be a number, got {}", v))),
                };
            }
            if let Some(v) = table.get("transparency") {
                config.transparency_threshold = Self::integer_in_range(v, "transparency", 0, 255)? as u8;
            }
        }

        if let Some(table) = toml_value.get("output").and_then(|v| v.as_table()) {
            if let Some(v) = table.get("fallback_prefix") {
                config.fallback_prefix = v.as_str()
                    .ok_or_else(|| SliceError::ConfigError("fallback_prefix must be a string".to_string()))?
                    .to_string();
            }
            if let Some(v) = table.get("format") {
                let name = v.as_str()
                    .ok_or_else(|| SliceError::ConfigError("format must be a string".to_string()))?;
                config.output_format = OutputFormat::from_name(name)?;
            }
            if let Some(v) = table.get("continue_on_write_error") {
                config.continue_on_write_error = v.as_bool()
                    .ok_or_else(|| SliceError::ConfigError("continue_on_write_error must be a boolean".to_string()))?;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SliceResult<Self> {
        let path = path.as_ref();
        info!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| SliceError::ConfigError(format!("Cannot read {}: {}", path.display(), e)))?;

        Self::from_toml_str(&content)
    }

    /// Check value ranges and name validity
    pub fn validate(&self) -> SliceResult<()> {
        if !self.row_gap.is_finite() || self.row_gap < 0.0 {
            return Err(SliceError::ConfigError(format!("row_gap must be a non-negative number, got {}", self.row_gap)));
        }
        if self.brightness_threshold > 765 {
            return Err(SliceError::ConfigError(format!(
                "brightness threshold {} can never be exceeded (max 765)", self.brightness_threshold)));
        }
        for name in &self.names {
            names::validate_name(name)?;
        }
        // The prefix alone is not a full name, so check it with an index appended
        names::validate_name(&format!("{}0", self.fallback_prefix))?;
        self.check_unique_names()?;
        Ok(())
    }

    /// Every object must land in its own file
    ///
    /// Rejects repeated names, and names that equal a fallback name some
    /// later object would receive (`<prefix><index>` with an index at or
    /// past the end of the list).
    fn check_unique_names(&self) -> SliceResult<()> {
        let mut seen = HashSet::new();
        for name in &self.names {
            if !seen.insert(name.as_str()) {
                return Err(SliceError::ConfigError(format!("Duplicate output name '{}'", name)));
            }

            let fallback_index = name.strip_prefix(self.fallback_prefix.as_str())
                .and_then(|rest| rest.parse::<usize>().ok());
            if let Some(index) = fallback_index {
                let clashes = index >= self.names.len()
                    && format!("{}{}", self.fallback_prefix, index) == *name;
                if clashes {
                    return Err(SliceError::ConfigError(format!(
                        "Output name '{}' clashes with the fallback name of object #{}", name, index)));
                }
            }
        }
        Ok(())
    }

    fn integer_in_range(value: &toml::Value, key: &str, min: i64, max: i64) -> SliceResult<i64> {
        match value.as_integer() {
            Some(i) if i >= min && i <= max => Ok(i),
            Some(i) => Err(SliceError::ConfigError(format!("{} must be in {}..={}, got {}", key, min, max, i))),
            None => Err(SliceError::ConfigError(format!("{} must be an integer, got {}", key, value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SlicerConfig::default();
        assert_eq!(config.brightness_threshold, 25);
        assert_eq!(config.min_area, 1000);
        assert_eq!(config.row_gap, 50.0);
        assert_eq!(config.transparency_threshold, 40);
        assert_eq!(config.names.len(), 10);
        assert_eq!(config.fallback_prefix, "extra_");
        assert_eq!(config.output_format, OutputFormat::Png);
        assert!(!config.continue_on_write_error);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SlicerConfig::from_toml_str(
            "names = [\"a\", \"b\"]\n[thresholds]\nrow_gap = 80\n",
        ).unwrap();
        assert_eq!(config.names, vec!["a", "b"]);
        assert_eq!(config.row_gap, 80.0);
        assert_eq!(config.min_area, 1000);
        assert_eq!(config.output_format, OutputFormat::Png);
    }

    #[test]
    fn test_full_toml() {
        let content = r#"
names = ["x"]

[thresholds]
brightness = 60
min_area = 500
row_gap = 12.5
transparency = 10

[output]
fallback_prefix = "sprite-"
format = "WebP"
continue_on_write_error = true
"#;
        let config = SlicerConfig::from_toml_str(content).unwrap();
        assert_eq!(config.brightness_threshold, 60);
        assert_eq!(config.min_area, 500);
        assert_eq!(config.row_gap, 12.5);
        assert_eq!(config.transparency_threshold, 10);
        assert_eq!(config.fallback_prefix, "sprite-");
        assert_eq!(config.output_format, OutputFormat::WebP);
        assert!(config.continue_on_write_error);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(SlicerConfig::from_toml_str("[thresholds]\ntransparency = 300\n").is_err());
        assert!(SlicerConfig::from_toml_str("[thresholds]\nrow_gap = -1.0\n").is_err());
        assert!(SlicerConfig::from_toml_str("[output]\nformat = \"jpeg\"\n").is_err());
        assert!(SlicerConfig::from_toml_str("[output]\nfallback_prefix = \"../\"\n").is_err());
        assert!(SlicerConfig::from_toml_str("names = [\"a/b\"]\n").is_err());
        assert!(SlicerConfig::from_toml_str("not toml at all [").is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let config = SlicerConfig {
            names: vec!["ship".to_string(), "car".to_string(), "ship".to_string()],
            ..SlicerConfig::default()
        };
        assert!(matches!(config.validate(), Err(SliceError::ConfigError(_))));
        assert!(SlicerConfig::from_toml_str("names = [\"a\", \"a\"]\n").is_err());
    }

    #[test]
    fn test_names_clashing_with_fallback_rejected() {
        let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        // Object #2 would be written as extra_2 as well
        let config = SlicerConfig { names: names(&["a", "extra_2"]), ..SlicerConfig::default() };
        assert!(config.validate().is_err());

        // Index inside the list never becomes a fallback name
        let config = SlicerConfig { names: names(&["extra_0", "b"]), ..SlicerConfig::default() };
        assert!(config.validate().is_ok());

        // Different spelling of the index does not collide
        let config = SlicerConfig { names: names(&["a", "extra_02"]), ..SlicerConfig::default() };
        assert!(config.validate().is_ok());

        // Clash depends on the configured prefix
        let config = SlicerConfig {
            names: names(&["a", "extra_2"]),
            fallback_prefix: "more_".to_string(),
            ..SlicerConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::from_name("PNG").unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_name("tif").unwrap(), OutputFormat::Tiff);
        assert_eq!(OutputFormat::Tiff.extension(), "tiff");
        assert!(OutputFormat::from_name("gif").is_err());
    }
}
