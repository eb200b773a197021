//! Asset management
//!
//! CPU-side mesh data and the process-level named mesh cache. The cache is
//! populated during initialization and only read afterwards, so it needs no
//! locking in the engine's single-threaded frame model.

pub mod library;
pub mod mesh;

pub use library::MeshLibrary;
pub use mesh::Mesh;
