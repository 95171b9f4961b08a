//! Core data model types for objstore

mod hash;
mod object;

pub use hash::{validate_hex, ObjectHash, HEX_LEN};
pub use object::{parse_header, Object, ObjectHeader, ObjectKind};
