//! Geometry kernel capability trait.

use std::path::Path;

use crate::error::KernelError;

/// Capability contract the conversion pipeline requires from a geometry
/// kernel.
///
/// Implementations wrap a B-rep kernel (OpenCASCADE bindings, a pure-Rust
/// kernel, a test stub). The [`GeometryKernel`] trait is defined here in
/// `shapehub-core` and implemented by kernel adapter crates.
///
/// Every method is a self-contained kernel session: any reader or writer
/// state is acquired and released within the call. Implementations must not
/// share reader, writer, or shape state across calls, so a driver may run
/// conversions in parallel with one kernel instance per worker.
pub trait GeometryKernel {
    /// Opaque boundary-representation entity.
    type Shape;
    /// Triangulated mesh produced by tessellation.
    type Mesh;

    /// Read a STEP file and return all transferable root shapes.
    fn read_step(&self, path: &Path) -> Result<Vec<Self::Shape>, KernelError>;

    /// Read an IGES file and return all transferable root shapes.
    fn read_iges(&self, path: &Path) -> Result<Vec<Self::Shape>, KernelError>;

    /// Read a BREP file, which stores a single entity.
    fn read_brep(&self, path: &Path) -> Result<Self::Shape, KernelError>;

    /// Aggregate root shapes into one compound.
    fn make_compound(&self, shapes: Vec<Self::Shape>) -> Self::Shape;

    /// Sew disjoint adjacent surfaces together within the given distance
    /// tolerance, returning the sewn shape.
    fn sew(&self, shape: Self::Shape, tolerance: f64) -> Self::Shape;

    /// Write a shape as STEP.
    fn write_step(&self, shape: &Self::Shape, path: &Path) -> Result<(), KernelError>;

    /// Write a shape as IGES.
    fn write_iges(&self, shape: &Self::Shape, path: &Path) -> Result<(), KernelError>;

    /// Serialize a shape in the kernel's native BREP form.
    fn write_brep(&self, shape: &Self::Shape, path: &Path) -> Result<(), KernelError>;

    /// Triangulate a shape with the given maximum surface deviation.
    fn tessellate(&self, shape: &Self::Shape, deflection: f64) -> Result<Self::Mesh, KernelError>;

    /// Write a tessellated mesh as STL.
    fn write_stl(&self, mesh: &Self::Mesh, path: &Path) -> Result<(), KernelError>;
}
