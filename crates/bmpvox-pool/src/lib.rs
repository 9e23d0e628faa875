//! Grid-hashed, reference-counted vertex pool.
//!
//! Corner points that quantize to the same grid cell share one handle. Handles
//! are recycled (most recently freed first) once every reference to a cell has
//! been released, so storage only grows when the live vertex count does.
#![forbid(unsafe_code)]

pub mod diag;
pub mod key;
pub mod pool;
pub mod vertex;

pub use diag::{DiagnosticSink, LogSink, PoolWarning, RecordingSink};
pub use key::{CellKey, PoolConfig};
pub use pool::{Handle, PoolEntry, RefCount, VertexPool};
pub use vertex::{PooledVertex, SimpleVertex};
