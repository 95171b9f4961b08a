//! Git-like object operations: hash-object, cat-file

mod cat_file;
mod hash_object;

pub use cat_file::{cat_file, CatMode};
pub use hash_object::{hash_bytes, hash_object};
