//! Geometry loading: reads a file of known format into one unified shape.

use std::path::Path;

use tracing::debug;

use shapehub_core::error::{ConvertError, KernelError};
use shapehub_core::traits::kernel::GeometryKernel;
use shapehub_core::types::format::InputFormat;

/// Loads CAD files into a single compound shape via the kernel.
///
/// Borrows the kernel for the duration of one conversion; the returned
/// shape is owned by the caller and is never cached across calls.
pub struct GeometryLoader<'a, K> {
    kernel: &'a K,
    /// Sewing distance tolerance applied to IGES inputs.
    sew_tolerance: f64,
}

impl<'a, K: GeometryKernel> GeometryLoader<'a, K> {
    /// Create a loader with the given sewing tolerance.
    pub fn new(kernel: &'a K, sew_tolerance: f64) -> Self {
        Self {
            kernel,
            sew_tolerance,
        }
    }

    /// Read `path` as `format` and merge all root shapes into one compound.
    ///
    /// Sewing is applied only to IGES inputs; for STEP and BREP the flag has
    /// no effect. This asymmetry is intentional, preserved from the original
    /// pipeline design, not a general repair step.
    pub fn load(
        &self,
        path: &Path,
        format: InputFormat,
        sew: bool,
    ) -> Result<K::Shape, ConvertError> {
        match format {
            InputFormat::Step => {
                let roots = self
                    .kernel
                    .read_step(path)
                    .map_err(|e| read_error(format, path, e))?;
                debug!(
                    path = %path.display(),
                    roots = roots.len(),
                    "Merged STEP roots into compound"
                );
                Ok(self.kernel.make_compound(roots))
            }
            InputFormat::Iges => {
                let roots = self
                    .kernel
                    .read_iges(path)
                    .map_err(|e| read_error(format, path, e))?;
                debug!(
                    path = %path.display(),
                    roots = roots.len(),
                    "Merged IGES roots into compound"
                );
                let shape = self.kernel.make_compound(roots);
                if sew {
                    debug!(tolerance = self.sew_tolerance, "Sewing IGES surfaces");
                    Ok(self.kernel.sew(shape, self.sew_tolerance))
                } else {
                    Ok(shape)
                }
            }
            // BREP already stores a single entity; no root iteration
            InputFormat::Brep => self
                .kernel
                .read_brep(path)
                .map_err(|e| read_error(format, path, e)),
        }
    }
}

fn read_error(format: InputFormat, path: &Path, source: KernelError) -> ConvertError {
    ConvertError::GeometryRead {
        format,
        path: path.to_path_buf(),
        source,
    }
}
