//! # shapehub-converter
//!
//! Exchange-format conversion pipeline for CAD geometry. Resolves the input
//! format from the file extension, loads the file into a single compound
//! shape through a [`shapehub_core::GeometryKernel`], optionally sews IGES
//! surfaces, and exports to STEP, IGES, BREP, or tessellated STL.
//!
//! Requests whose input and output formats coincide short-circuit without
//! touching the kernel: batch runs copy the file verbatim, single-file runs
//! get a message explaining that no conversion is needed.

pub mod batch;
pub mod config;
pub mod converter;
pub mod exporter;
pub mod loader;

#[cfg(test)]
pub(crate) mod test_kernel;

pub use batch::{BatchEntry, BatchReport, BatchRunner, BatchSummary, collect_supported_files};
pub use config::ConverterConfig;
pub use converter::Converter;
pub use exporter::ShapeExporter;
pub use loader::GeometryLoader;
