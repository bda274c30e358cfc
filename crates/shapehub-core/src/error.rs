//! Unified error types for the conversion core.
//!
//! Every fallible pipeline operation returns [`ConvertError`]. Kernel
//! implementations report their own failures through the opaque
//! [`KernelError`], which the pipeline wraps with format and path context
//! before propagation through the ? operator.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::format::{InputFormat, OutputFormat};

/// Opaque failure reported by a geometry kernel implementation.
///
/// The core does not interpret kernel failures beyond read/write
/// classification; the kernel's message is surfaced verbatim.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct KernelError {
    /// Human-readable description from the kernel.
    pub message: String,
}

impl KernelError {
    /// Create a new kernel error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Unified error type for all conversion operations.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file extension is not a supported CAD exchange format.
    #[error("Unsupported file format: .{extension}")]
    UnsupportedInput {
        /// The offending extension, lower-cased, without the leading dot.
        extension: String,
    },

    /// The requested output format tag is not recognized.
    #[error("Unsupported output format: {format}")]
    UnsupportedOutput {
        /// The tag as supplied by the driver.
        format: String,
    },

    /// STL output was requested without a deflection value.
    #[error("STL output requires a deflection value")]
    MissingDeflection,

    /// STL deflection is not a positive finite number.
    #[error("STL deflection must be a positive number, got {value}")]
    InvalidDeflection {
        /// The rejected value.
        value: f64,
    },

    /// The kernel failed to read a shape from the input file.
    #[error("Failed to read {format} geometry from {}: {source}", .path.display())]
    GeometryRead {
        /// Format the file was read as.
        format: InputFormat,
        /// Path of the unreadable file.
        path: PathBuf,
        /// The kernel's failure report.
        #[source]
        source: KernelError,
    },

    /// The kernel failed to write a shape to the output file.
    ///
    /// Presence of a partially written file is undefined; atomicity matches
    /// the underlying kernel's own failure behavior.
    #[error("Failed to write {format} output to {}: {source}", .path.display())]
    GeometryWrite {
        /// Format the shape was written as.
        format: OutputFormat,
        /// Intended output path.
        path: PathBuf,
        /// The kernel's failure report.
        #[source]
        source: KernelError,
    },

    /// Filesystem error from directory creation or the same-format copy.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
