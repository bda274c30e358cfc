//! Conversion request model supplied by drivers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::format::OutputFormat;

/// A single-file conversion request.
///
/// Drivers (CLI or GUI front ends) validate that `input` exists and that
/// `output_dir` is writable before submitting the request; the core only
/// creates the output directory if it is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Path to the source CAD file.
    pub input: PathBuf,
    /// Requested output format.
    pub target: OutputFormat,
    /// Directory receiving the output file; created if absent.
    pub output_dir: PathBuf,
    /// Attempt to sew disjoint surfaces after loading (IGES inputs only).
    #[serde(default)]
    pub sew: bool,
    /// Whether this request is part of a batch run. Controls same-format
    /// handling: copy-and-skip in batch mode, message in file mode.
    #[serde(default)]
    pub batch_mode: bool,
    /// Mesh deviation tolerance; required iff `target` is STL.
    #[serde(default)]
    pub stl_deflection: Option<f64>,
}

impl ConversionRequest {
    /// Create a request with defaults for the optional knobs.
    pub fn new(
        input: impl Into<PathBuf>,
        target: OutputFormat,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            target,
            output_dir: output_dir.into(),
            sew: false,
            batch_mode: false,
            stl_deflection: None,
        }
    }

    /// The source file name; `"unknown_file"` when the path has none.
    pub fn file_name(&self) -> String {
        file_name_str(&self.input)
    }

    /// The source file stem; `"unknown_file"` when the path has none.
    pub fn file_stem(&self) -> String {
        self.input
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown_file".to_string())
    }
}

/// Extract a file name as String; returns `"unknown_file"` for empty paths.
pub fn file_name_str(path: &Path) -> String {
    path.file_name()
        .and_then(|f| f.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown_file".to_string())
}
