//! Domain types: format tags, conversion requests, and outcomes.

pub mod format;
pub mod outcome;
pub mod request;

pub use format::{InputFormat, OutputFormat};
pub use outcome::ConversionOutcome;
pub use request::ConversionRequest;
