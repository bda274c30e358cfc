//! Tagged outcome of a conversion request.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The result of a request that did not fail.
///
/// Exactly one variant is produced per non-failing request; a failing
/// request produces only a [`crate::error::ConvertError`]. The tagged enum
/// forces every caller to handle all three cases exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ConversionOutcome {
    /// Batch-mode same-format short-circuit: the input was copied verbatim
    /// under its original name.
    Skipped {
        /// Path of the copied file.
        output: PathBuf,
    },
    /// File-mode same-format short-circuit: nothing was written.
    Message {
        /// Human-readable explanation of why no conversion happened.
        text: String,
    },
    /// A converted file was written.
    Success {
        /// Path of the newly written file.
        output: PathBuf,
    },
}

impl ConversionOutcome {
    /// Whether a new converted file was written.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Whether the request was short-circuited (skip or message).
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. } | Self::Message { .. })
    }

    /// Path of the file this outcome produced, if any was written.
    pub fn output_path(&self) -> Option<&Path> {
        match self {
            Self::Skipped { output } | Self::Success { output } => Some(output),
            Self::Message { .. } => None,
        }
    }
}
