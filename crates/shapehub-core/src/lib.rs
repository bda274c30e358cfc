//! # shapehub-core
//!
//! Core crate for ShapeHub. Contains the geometry-kernel capability trait,
//! conversion request/outcome models, format tags, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other ShapeHub crates.

pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{ConvertError, KernelError};
pub use result::ConvertResult;
pub use traits::kernel::GeometryKernel;
pub use types::format::{InputFormat, OutputFormat};
pub use types::outcome::ConversionOutcome;
pub use types::request::ConversionRequest;
