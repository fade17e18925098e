//! Naming and persisting extracted objects
//!
//! Objects are named from the configured list in reading order; objects
//! past the end of the list get the fallback prefix plus their index.
//! Each object is written to `<output_dir>/<name>.<ext>`.

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::config::SlicerConfig;
use crate::errors::{SliceError, SliceResult};
use crate::utils::progress::ProgressTracker;
use super::object_extractor::ExtractedObject;

/// Summary of an export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Files written, in reading order
    pub written: Vec<PathBuf>,
    /// Names of objects that could not be written
    pub failed: Vec<String>,
}

impl ExportReport {
    /// True when every object was written
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Name for the object at position `index`
///
/// # Arguments
/// * `index` - Zero-based position in reading order
/// * `names` - Ordered name list
/// * `fallback_prefix` - Prefix used once the list runs out
pub fn object_name(index: usize, names: &[String], fallback_prefix: &str) -> String {
    names.get(index)
        .cloned()
        .unwrap_or_else(|| format!("{}{}", fallback_prefix, index))
}

/// Create the output directory and any missing parents
pub fn ensure_output_dir(output_dir: &Path) -> SliceResult<()> {
    if output_dir.is_dir() {
        return Ok(());
    }
    info!("Creating output directory {}", output_dir.display());
    fs::create_dir_all(output_dir)
        .map_err(|e| SliceError::DirectoryError(output_dir.to_path_buf(), e))
}

/// Write a single object to `<output_dir>/<name>.<ext>`
pub fn write_object(object: &ExtractedObject, name: &str, output_dir: &Path, config: &SlicerConfig) -> SliceResult<PathBuf> {
    let path = output_dir.join(format!("{}.{}", name, config.output_format.extension()));

    object.image
        .save_with_format(&path, config.output_format.image_format())
        .map_err(|e| SliceError::WriteError(format!("Failed to save {}: {}", path.display(), e)))?;

    Ok(path)
}

/// Name and write every object in order
///
/// The output directory must already exist. With
/// `continue_on_write_error` unset the first failed write is returned as
/// an error. With it set, failures are logged and the remaining objects are
/// still written; if any failed the run ends with a `WriteError` naming
/// them.
pub fn export_objects(objects: &[ExtractedObject], output_dir: &Path, config: &SlicerConfig) -> SliceResult<ExportReport> {
    let mut report = ExportReport::default();
    let progress = ProgressTracker::new(objects.len() as u64, "Saving objects");

    for object in objects {
        let name = object_name(object.index, &config.names, &config.fallback_prefix);
        progress.set_message(&name);

        match write_object(object, &name, output_dir, config) {
            Ok(path) => {
                info!("Saved {} (row {}, {})", path.display(), object.row, object.bbox);
                report.written.push(path);
            }
            Err(e) if config.continue_on_write_error => {
                error!("{}", e);
                report.failed.push(name);
            }
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        }
        progress.increment(1);
    }
    progress.finish();

    if !report.is_complete() {
        return Err(SliceError::WriteError(format!(
            "{} of {} objects could not be written: {}",
            report.failed.len(), objects.len(), report.failed.join(", "))));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_name_from_list_then_fallback() {
        let names = vec!["first".to_string(), "second".to_string()];
        assert_eq!(object_name(0, &names, "extra_"), "first");
        assert_eq!(object_name(1, &names, "extra_"), "second");
        assert_eq!(object_name(2, &names, "extra_"), "extra_2");
        assert_eq!(object_name(11, &[], "sprite-"), "sprite-11");
    }

    fn tiny_object(index: usize) -> ExtractedObject {
        ExtractedObject {
            index,
            row: 0,
            bbox: crate::coordinate::PixelBox::new(0, 2, 0, 2),
            image: image::RgbaImage::from_pixel(2, 2, image::Rgba([200, 10, 10, 255])),
        }
    }

    #[test]
    fn test_keep_going_names_every_failed_object() {
        let dir = std::env::temp_dir().join(format!("spriteslicer-export-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("a.png")).unwrap();
        fs::create_dir_all(dir.join("c.png")).unwrap();

        let config = SlicerConfig {
            names: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            continue_on_write_error: true,
            ..SlicerConfig::default()
        };
        let objects: Vec<ExtractedObject> = (0..3).map(tiny_object).collect();

        match export_objects(&objects, &dir, &config) {
            Err(SliceError::WriteError(msg)) => {
                assert!(msg.starts_with("2 of 3 objects"));
                assert!(msg.ends_with("a, c"));
            }
            other => panic!("expected a write error, got {:?}", other),
        }
        assert!(dir.join("b.png").is_file());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_report_completeness() {
        let mut report = ExportReport::default();
        assert!(report.is_complete());
        report.failed.push("x".to_string());
        assert!(!report.is_complete());
    }
}
