//! Compute an object hash, optionally persisting the object

use crate::model::{Object, ObjectHash};
use crate::store::Repository;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Hash the file at `path` as a blob.
///
/// With `write` set the blob is also stored in `repo`; without it no
/// repository is needed.
pub fn hash_object(
    repo: Option<&Repository>,
    path: impl AsRef<Path>,
    write: bool,
) -> Result<ObjectHash> {
    let path = path.as_ref();
    let content = std::fs::read(path)
        .map_err(|e| Error::io_context(format!("could not read {}", path.display()), e))?;
    hash_bytes(repo, content, write)
}

/// Hash in-memory content as a blob, storing it when `write` is set
pub fn hash_bytes(repo: Option<&Repository>, content: Vec<u8>, write: bool) -> Result<ObjectHash> {
    let blob = Object::blob(content);
    let data = blob.encode();
    let hash = ObjectHash::digest(&data);

    if write {
        let repo = repo.ok_or_else(|| {
            Error::NotARepository(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
        })?;
        repo.write_object(&hash.to_hex(), &data)?;
    }

    debug!(%hash, size = blob.size(), write, "hashed blob");
    Ok(hash)
}
