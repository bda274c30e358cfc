//! Canonical input and output format tags.
//!
//! Input formats are derived from file extensions; output formats from
//! driver-supplied tags. Same-format detection always compares the
//! normalized tags, never extension variants (`.stp` and `.step` are the
//! same format).

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Supported boundary-representation input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// STEP (Standard for the Exchange of Product Data), `.step`/`.stp`
    Step,
    /// IGES (Initial Graphics Exchange Specification), `.iges`/`.igs`
    Iges,
    /// Native B-rep serialization, `.brep`
    Brep,
}

impl InputFormat {
    /// All file extensions accepted as conversion input.
    pub const SUPPORTED_EXTENSIONS: &'static [&'static str] =
        &["step", "stp", "iges", "igs", "brep"];

    /// Determine the input format from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "step" | "stp" => Some(Self::Step),
            "iges" | "igs" => Some(Self::Iges),
            "brep" => Some(Self::Brep),
            _ => None,
        }
    }

    /// Resolve the input format from a file path.
    ///
    /// Pure function of the path's extension, lower-cased before comparison.
    /// Unknown or missing extensions are an error, never a default.
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        Self::from_extension(&ext).ok_or(ConvertError::UnsupportedInput { extension: ext })
    }

    /// The normalized lower-case tag (`step`, `iges`, `brep`).
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Iges => "iges",
            Self::Brep => "brep",
        }
    }

    /// The upper-case name used in messages and output file naming.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Step => "STEP",
            Self::Iges => "IGES",
            Self::Brep => "BREP",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Supported output formats.
///
/// STL is output-only: tessellated meshes cannot be loaded back as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// STEP exchange format
    Step,
    /// IGES exchange format
    Iges,
    /// Native B-rep serialization
    Brep,
    /// Tessellated mesh (stereolithography)
    Stl,
}

impl OutputFormat {
    /// Parse a driver-supplied output format tag (case-insensitive).
    pub fn from_tag(tag: &str) -> Result<Self, ConvertError> {
        match tag.to_ascii_lowercase().as_str() {
            "step" => Ok(Self::Step),
            "iges" => Ok(Self::Iges),
            "brep" => Ok(Self::Brep),
            "stl" => Ok(Self::Stl),
            _ => Err(ConvertError::UnsupportedOutput {
                format: tag.to_string(),
            }),
        }
    }

    /// The file extension written for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Iges => "iges",
            Self::Brep => "brep",
            Self::Stl => "stl",
        }
    }

    /// The upper-case name used in messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Step => "STEP",
            Self::Iges => "IGES",
            Self::Brep => "BREP",
            Self::Stl => "STL",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl From<InputFormat> for OutputFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Step => Self::Step,
            InputFormat::Iges => Self::Iges,
            InputFormat::Brep => Self::Brep,
        }
    }
}
