//! Capability traits implemented outside the core.

pub mod kernel;

pub use kernel::GeometryKernel;
