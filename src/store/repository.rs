//! On-disk loose object repository
//!
//! Layout, relative to the repository root:
//! ```text
//! .store/
//!   HEAD                     "ref: refs/heads/main\n"
//!   config.json              optional StoreConfig
//!   objects/<hh>/<38 hex>    zlib-compressed canonical object, read-only
//!   refs/heads/
//!   refs/tags/
//! ```

use crate::config::StoreConfig;
use crate::model::{validate_hex, Object, ObjectHash};
use crate::store::codec;
use crate::{Error, Result, HEAD_FILE, OBJECTS_DIR, REFS_HEADS_DIR, REFS_TAGS_DIR, STORE_DIR};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Handle over a store rooted at a filesystem path
#[derive(Clone, Debug)]
pub struct Repository {
    /// Directory containing `.store`
    root: PathBuf,
    /// The `.store` directory itself
    meta_dir: PathBuf,
    config: StoreConfig,
}

impl Repository {
    /// Create a new store under `root` with the default config
    pub fn init(root: impl AsRef<Path>) -> Result<Self> {
        Self::init_with_config(root, StoreConfig::default())
    }

    /// Create a new store under `root`
    ///
    /// Fails with `AlreadyExists` if `root/.store` is already present; nothing
    /// inside an existing store is touched in that case.
    pub fn init_with_config(root: impl AsRef<Path>, config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let root = root.as_ref().to_path_buf();
        let meta_dir = root.join(STORE_DIR);

        if meta_dir.exists() {
            return Err(Error::AlreadyExists(root));
        }

        fs::create_dir_all(&root)
            .map_err(|e| Error::io_context(format!("create {}", root.display()), e))?;
        match fs::create_dir(&meta_dir) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(Error::AlreadyExists(root))
            }
            Err(e) => {
                return Err(Error::io_context(
                    format!("create {}", meta_dir.display()),
                    e,
                ))
            }
        }

        for dir in [OBJECTS_DIR, REFS_HEADS_DIR, REFS_TAGS_DIR] {
            let path = meta_dir.join(dir);
            fs::create_dir_all(&path)
                .map_err(|e| Error::io_context(format!("create {}", path.display()), e))?;
        }
        fs::write(meta_dir.join(HEAD_FILE), config.head_contents())
            .map_err(|e| Error::io_context("write HEAD", e))?;
        config.save(&meta_dir)?;

        info!(root = %root.display(), branch = %config.default_branch, "initialized store");

        Ok(Repository {
            root,
            meta_dir,
            config,
        })
    }

    /// Open the store rooted exactly at `root`
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let meta_dir = root.join(STORE_DIR);
        if !meta_dir.is_dir() {
            return Err(Error::NotARepository(root));
        }
        let config = StoreConfig::load(&meta_dir)?;
        Ok(Repository {
            root,
            meta_dir,
            config,
        })
    }

    /// Find the nearest directory at or above `start` that contains a store.
    ///
    /// Returns the repository root, not the `.store` directory. A relative
    /// `start` is resolved against the current directory first.
    pub fn discover(start: impl AsRef<Path>) -> Result<PathBuf> {
        let start = std::path::absolute(start.as_ref())
            .map_err(|e| Error::io_context("resolve start directory", e))?;
        for dir in start.ancestors() {
            debug!(dir = %dir.display(), "looking for store");
            if dir.join(STORE_DIR).is_dir() {
                return Ok(dir.to_path_buf());
            }
        }
        Err(Error::StoreNotFound(start))
    }

    /// Discover a store from the current working directory
    pub fn locate() -> Result<PathBuf> {
        let cwd = std::env::current_dir()
            .map_err(|e| Error::io_context("get current directory", e))?;
        Self::discover(cwd)
    }

    /// Discover and open the store enclosing `start`
    pub fn open_enclosing(start: impl AsRef<Path>) -> Result<Self> {
        Self::open(Self::discover(start)?)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn meta_dir(&self) -> &Path {
        &self.meta_dir
    }

    pub fn objects_dir(&self) -> PathBuf {
        self.meta_dir.join(OBJECTS_DIR)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Path of the loose object file for `hash`
    pub fn object_path(&self, hash: &str) -> Result<PathBuf> {
        validate_hex(hash)?;
        Ok(self.objects_dir().join(&hash[..2]).join(&hash[2..]))
    }

    /// Compress and store canonical bytes under `hash`.
    ///
    /// An object that is already present is left as is.
    pub fn write_object(&self, hash: &str, data: &[u8]) -> Result<()> {
        let path = self.object_path(hash)?;
        if path.is_file() {
            debug!(%hash, "object already stored");
            return Ok(());
        }

        let compressed = codec::compress(data, self.config.compression_level)
            .map_err(|e| Error::io_context("compress object", e))?;

        // `path` always has the prefix directory as parent
        let dir = path.parent().unwrap_or(self.meta_dir.as_path());
        fs::create_dir_all(dir)
            .map_err(|e| Error::io_context(format!("create {}", dir.display()), e))?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| Error::io_context("create temporary object file", e))?;
        tmp.write_all(&compressed)
            .map_err(|e| Error::io_context("write object file", e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| Error::io_context("sync object file", e))?;

        let mut perms = tmp
            .as_file()
            .metadata()
            .map_err(|e| Error::io_context("stat object file", e))?
            .permissions();
        perms.set_readonly(true);
        tmp.as_file()
            .set_permissions(perms)
            .map_err(|e| Error::io_context("mark object read-only", e))?;

        tmp.persist(&path).map_err(|e| {
            Error::io_context(format!("move object into {}", path.display()), e.error)
        })?;

        debug!(%hash, raw = data.len(), compressed = compressed.len(), "wrote object");
        Ok(())
    }

    /// Read and decompress the canonical bytes stored under `hash`
    pub fn read_object(&self, hash: &str) -> Result<Vec<u8>> {
        let path = self.object_path(hash)?;
        let compressed = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::ObjectNotFound(hash.to_string()))
            }
            Err(e) => {
                return Err(Error::io_context(
                    format!("read {}", path.display()),
                    e,
                ))
            }
        };

        let data = codec::decompress(&compressed).map_err(|e| Error::CorruptObject {
            hash: hash.to_string(),
            reason: e.to_string(),
        })?;
        debug!(%hash, size = data.len(), "read object");
        Ok(data)
    }

    /// Whether an object file exists for `hash`; invalid hashes never exist
    pub fn object_exists(&self, hash: &str) -> bool {
        self.object_path(hash)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    /// Check that `hash` is well formed and present
    pub fn validate_object(&self, hash: &str) -> Result<()> {
        if self.object_path(hash)?.is_file() {
            Ok(())
        } else {
            Err(Error::ObjectNotFound(hash.to_string()))
        }
    }

    /// Encode, hash and store an object, returns its hash
    pub fn put(&self, object: &Object) -> Result<ObjectHash> {
        let data = object.encode();
        let hash = ObjectHash::digest(&data);
        self.write_object(&hash.to_hex(), &data)?;
        Ok(hash)
    }

    /// Load and decode the object stored under `hash`
    pub fn get(&self, hash: &ObjectHash) -> Result<Object> {
        Object::decode(&self.read_object(&hash.to_hex())?)
    }
}
