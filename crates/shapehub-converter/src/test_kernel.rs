//! In-memory text-format kernel used by the pipeline tests.
//!
//! Files are plain text: each non-empty line of an exchange file is one
//! root shape, and written outputs carry a recognizable per-format header
//! so tests can assert on what was produced. A file containing `corrupt`
//! simulates a kernel read failure.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;

use shapehub_core::error::KernelError;
use shapehub_core::traits::kernel::GeometryKernel;

/// A shape is just its root count plus a sewn marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextShape {
    pub roots: usize,
    pub sewn: bool,
}

/// A mesh records how it was tessellated.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TextMesh {
    pub triangles: usize,
    pub deflection: f64,
}

/// Test double for [`GeometryKernel`] backed by plain text files.
#[derive(Debug, Default)]
pub(crate) struct TextKernel {
    /// Tolerances passed to `sew`, in call order.
    pub sew_calls: RefCell<Vec<f64>>,
    /// Deflections passed to `tessellate`, in call order.
    pub tessellate_calls: RefCell<Vec<f64>>,
    /// When set, every write call fails.
    pub fail_writes: Cell<bool>,
}

impl TextKernel {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_roots(&self, path: &Path) -> Result<Vec<TextShape>, KernelError> {
        let contents = fs::read_to_string(path).map_err(|e| KernelError::new(e.to_string()))?;
        if contents.contains("corrupt") {
            return Err(KernelError::new("no transferable roots"));
        }
        Ok(contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|_| TextShape {
                roots: 1,
                sewn: false,
            })
            .collect())
    }

    fn write_text(&self, path: &Path, contents: String) -> Result<(), KernelError> {
        if self.fail_writes.get() {
            return Err(KernelError::new("writer reported failure"));
        }
        fs::write(path, contents).map_err(|e| KernelError::new(e.to_string()))
    }
}

impl GeometryKernel for TextKernel {
    type Shape = TextShape;
    type Mesh = TextMesh;

    fn read_step(&self, path: &Path) -> Result<Vec<TextShape>, KernelError> {
        self.read_roots(path)
    }

    fn read_iges(&self, path: &Path) -> Result<Vec<TextShape>, KernelError> {
        self.read_roots(path)
    }

    fn read_brep(&self, path: &Path) -> Result<TextShape, KernelError> {
        // A BREP file stores one entity regardless of line count
        let roots = self.read_roots(path)?;
        Ok(TextShape {
            roots: roots.len().max(1),
            sewn: false,
        })
    }

    fn make_compound(&self, shapes: Vec<TextShape>) -> TextShape {
        TextShape {
            roots: shapes.iter().map(|s| s.roots).sum(),
            sewn: false,
        }
    }

    fn sew(&self, shape: TextShape, tolerance: f64) -> TextShape {
        self.sew_calls.borrow_mut().push(tolerance);
        TextShape {
            sewn: true,
            ..shape
        }
    }

    fn write_step(&self, shape: &TextShape, path: &Path) -> Result<(), KernelError> {
        self.write_text(path, format!("STEP compound roots={}\n", shape.roots))
    }

    fn write_iges(&self, shape: &TextShape, path: &Path) -> Result<(), KernelError> {
        self.write_text(
            path,
            format!("IGES compound roots={} sewn={}\n", shape.roots, shape.sewn),
        )
    }

    fn write_brep(&self, shape: &TextShape, path: &Path) -> Result<(), KernelError> {
        self.write_text(path, format!("BREP compound roots={}\n", shape.roots))
    }

    fn tessellate(&self, shape: &TextShape, deflection: f64) -> Result<TextMesh, KernelError> {
        self.tessellate_calls.borrow_mut().push(deflection);
        Ok(TextMesh {
            triangles: shape.roots * 2,
            deflection,
        })
    }

    fn write_stl(&self, mesh: &TextMesh, path: &Path) -> Result<(), KernelError> {
        self.write_text(
            path,
            format!(
                "solid mesh triangles={} deflection={}\nendsolid mesh\n",
                mesh.triangles, mesh.deflection
            ),
        )
    }
}
