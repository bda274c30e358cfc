//! Shape export: writes a unified shape to a target format.

use std::path::Path;

use tracing::debug;

use shapehub_core::error::{ConvertError, KernelError};
use shapehub_core::traits::kernel::GeometryKernel;
use shapehub_core::types::format::OutputFormat;

/// Writes shapes to the target exchange or mesh format via the kernel.
pub struct ShapeExporter<'a, K> {
    kernel: &'a K,
}

impl<'a, K: GeometryKernel> ShapeExporter<'a, K> {
    /// Create an exporter borrowing the kernel for one conversion.
    pub fn new(kernel: &'a K) -> Self {
        Self { kernel }
    }

    /// Write `shape` as `format` at `output_path`.
    ///
    /// STL output tessellates the shape first; `stl_deflection` must then be
    /// a positive finite number, validated before any kernel call. Exactly
    /// one file is written; on kernel write failure the presence of a
    /// partially written file is undefined.
    pub fn export(
        &self,
        shape: &K::Shape,
        format: OutputFormat,
        output_path: &Path,
        stl_deflection: Option<f64>,
    ) -> Result<(), ConvertError> {
        match format {
            OutputFormat::Step => self
                .kernel
                .write_step(shape, output_path)
                .map_err(|e| write_error(format, output_path, e)),
            OutputFormat::Iges => self
                .kernel
                .write_iges(shape, output_path)
                .map_err(|e| write_error(format, output_path, e)),
            OutputFormat::Brep => self
                .kernel
                .write_brep(shape, output_path)
                .map_err(|e| write_error(format, output_path, e)),
            OutputFormat::Stl => {
                let deflection = validate_stl_deflection(stl_deflection)?;
                let mesh = self
                    .kernel
                    .tessellate(shape, deflection)
                    .map_err(|e| write_error(format, output_path, e))?;
                debug!(
                    path = %output_path.display(),
                    deflection,
                    "Tessellated shape for STL output"
                );
                self.kernel
                    .write_stl(&mesh, output_path)
                    .map_err(|e| write_error(format, output_path, e))
            }
        }
    }
}

/// Validate an STL deflection value: required, finite, strictly positive.
pub fn validate_stl_deflection(value: Option<f64>) -> Result<f64, ConvertError> {
    let v = value.ok_or(ConvertError::MissingDeflection)?;
    if !v.is_finite() || v <= 0.0 {
        return Err(ConvertError::InvalidDeflection { value: v });
    }
    Ok(v)
}

fn write_error(format: OutputFormat, path: &Path, source: KernelError) -> ConvertError {
    ConvertError::GeometryWrite {
        format,
        path: path.to_path_buf(),
        source,
    }
}
