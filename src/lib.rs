//! # objstore
//!
//! A minimal content-addressed object store using the git loose-object
//! format.
//!
//! Content is wrapped in a canonical form (`"<kind> <len>\0<content>"`),
//! hashed with SHA-1 and stored zlib-compressed at
//! `.store/objects/<first 2 hex>/<remaining 38 hex>`.
//!
//! ## Core Concepts
//!
//! - **Objects**: typed byte payloads; only blobs are created today
//! - **Repository**: a handle over a `.store` directory
//! - **Operations**: `hash_object` (compute, optionally persist) and
//!   `cat_file` (inspect by hash)
//!
//! ## Example
//!
//! ```no_run
//! use objstore::{cat_file, hash_object, CatMode, Repository};
//!
//! let repo = Repository::init(".")?;
//! let hash = hash_object(Some(&repo), "README.md", true)?;
//! let _content = cat_file(&repo, CatMode::PrintContent, &hash.to_hex())?;
//! # Ok::<(), objstore::Error>(())
//! ```

pub mod config;
pub mod model;
pub mod ops;
pub mod store;

mod error;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use model::{parse_header, Object, ObjectHash, ObjectHeader, ObjectKind};
pub use ops::{cat_file, hash_bytes, hash_object, CatMode};
pub use store::Repository;

/// Name of the metadata directory under a repository root
pub const STORE_DIR: &str = ".store";

/// Object directory, relative to the metadata directory
pub const OBJECTS_DIR: &str = "objects";

/// Symbolic pointer to the current branch
pub const HEAD_FILE: &str = "HEAD";

/// Branch pointer directory
pub const REFS_HEADS_DIR: &str = "refs/heads";

/// Tag pointer directory
pub const REFS_TAGS_DIR: &str = "refs/tags";
