//! Inspect stored objects

use crate::model::{parse_header, ObjectKind};
use crate::store::Repository;
use crate::{Error, Result};
use std::str::FromStr;

/// What to print for an object
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatMode {
    /// Raw content, blobs only
    PrintContent,
    /// Kind tag
    PrintType,
    /// Declared size in bytes
    PrintSize,
}

impl FromStr for CatMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "-p" | "print-content" => Ok(CatMode::PrintContent),
            "-t" | "print-type" => Ok(CatMode::PrintType),
            "-s" | "print-size" => Ok(CatMode::PrintSize),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

/// Render the object stored under `hash` according to `mode`.
///
/// Type and size are returned without a trailing newline.
pub fn cat_file(repo: &Repository, mode: CatMode, hash: &str) -> Result<Vec<u8>> {
    let data = repo.read_object(hash)?;
    let header = parse_header(&data)?;

    match mode {
        CatMode::PrintContent => {
            if header.kind != ObjectKind::Blob.as_str() {
                return Err(Error::UnsupportedType(header.kind.to_string()));
            }
            Ok(header.content.to_vec())
        }
        CatMode::PrintType => Ok(header.kind.as_bytes().to_vec()),
        CatMode::PrintSize => Ok(header.size.to_string().into_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Object;
    use crate::ops::hash_bytes;
    use tempfile::tempdir;

    fn repo_with_hello() -> (tempfile::TempDir, Repository, String) {
        let dir = tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let hash = hash_bytes(Some(&repo), b"hello\n".to_vec(), true).unwrap();
        (dir, repo, hash.to_hex())
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("-p".parse::<CatMode>().unwrap(), CatMode::PrintContent);
        assert_eq!("print-type".parse::<CatMode>().unwrap(), CatMode::PrintType);
        assert_eq!("-s".parse::<CatMode>().unwrap(), CatMode::PrintSize);
        assert!(matches!(
            "-x".parse::<CatMode>(),
            Err(Error::UnknownMode(_))
        ));
    }

    #[test]
    fn test_print_modes() {
        let (_dir, repo, hash) = repo_with_hello();
        assert_eq!(cat_file(&repo, CatMode::PrintType, &hash).unwrap(), b"blob");
        assert_eq!(cat_file(&repo, CatMode::PrintSize, &hash).unwrap(), b"6");
        assert_eq!(
            cat_file(&repo, CatMode::PrintContent, &hash).unwrap(),
            b"hello\n"
        );
    }

    #[test]
    fn test_print_content_rejects_non_blob() {
        let (_dir, repo, _) = repo_with_hello();
        let tree = repo
            .put(&Object::new(ObjectKind::Tree, b"not a blob".to_vec()))
            .unwrap()
            .to_hex();

        assert!(matches!(
            cat_file(&repo, CatMode::PrintContent, &tree),
            Err(Error::UnsupportedType(kind)) if kind == "tree"
        ));
        assert_eq!(cat_file(&repo, CatMode::PrintType, &tree).unwrap(), b"tree");
        assert_eq!(cat_file(&repo, CatMode::PrintSize, &tree).unwrap(), b"10");
    }

    #[test]
    fn test_malformed_stored_object() {
        let (_dir, repo, _) = repo_with_hello();
        let hash = "1".repeat(40);
        repo.write_object(&hash, b"blob 6 hello\n").unwrap();

        assert!(matches!(
            cat_file(&repo, CatMode::PrintType, &hash),
            Err(Error::MalformedObject(_))
        ));
    }

    #[test]
    fn test_missing_and_invalid_hash() {
        let (_dir, repo, _) = repo_with_hello();
        assert!(matches!(
            cat_file(&repo, CatMode::PrintType, &"f".repeat(40)),
            Err(Error::ObjectNotFound(_))
        ));
        assert!(matches!(
            cat_file(&repo, CatMode::PrintType, "ce01"),
            Err(Error::InvalidHash(_))
        ));
    }
}
