//! Content-addressed object store
//!
//! Objects are stored as loose files keyed by their SHA-1 hash and
//! compressed with zlib.

mod codec;
mod repository;

pub use codec::{compress, decompress};
pub use repository::Repository;
