//! Convenience result type alias for ShapeHub.

use crate::error::ConvertError;

/// A specialized `Result` type for conversion operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, ConvertError>` explicitly.
pub type ConvertResult<T> = Result<T, ConvertError>;
