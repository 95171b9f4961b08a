//! Object kinds and the canonical object encoding
//!
//! Every object is hashed and stored in its canonical form:
//!
//! ```text
//! <kind> <decimal length>\0<content>
//! ```

use crate::model::ObjectHash;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Type tag of a stored object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Opaque file content
    Blob,
    /// Directory listing
    Tree,
    /// Snapshot with parents and message
    Commit,
    /// Annotated tag
    Tag,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Blob => "blob",
            ObjectKind::Tree => "tree",
            ObjectKind::Commit => "commit",
            ObjectKind::Tag => "tag",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "blob" => Ok(ObjectKind::Blob),
            "tree" => Ok(ObjectKind::Tree),
            "commit" => Ok(ObjectKind::Commit),
            "tag" => Ok(ObjectKind::Tag),
            other => Err(Error::MalformedObject(format!(
                "unknown object kind: {:?}",
                other
            ))),
        }
    }
}

/// Parsed view over an object's canonical bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectHeader<'a> {
    /// Kind tag as written in the header
    pub kind: &'a str,
    /// Declared content length
    pub size: usize,
    /// Bytes after the NUL separator
    pub content: &'a [u8],
}

/// Split canonical bytes into kind, declared size and content.
///
/// The declared size must match the number of bytes after the NUL.
pub fn parse_header(data: &[u8]) -> Result<ObjectHeader<'_>> {
    let nul = data
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| Error::MalformedObject("missing NUL after header".into()))?;

    let header = std::str::from_utf8(&data[..nul])
        .map_err(|_| Error::MalformedObject("header is not valid UTF-8".into()))?;

    let mut parts = header.split(' ');
    let (kind, size) = match (parts.next(), parts.next(), parts.next()) {
        (Some(kind), Some(size), None) if !kind.is_empty() => (kind, size),
        _ => {
            return Err(Error::MalformedObject(format!(
                "invalid object header: {:?}",
                header
            )))
        }
    };

    if size.is_empty() || !size.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedObject(format!(
            "invalid object size: {:?}",
            size
        )));
    }
    let size: usize = size
        .parse()
        .map_err(|_| Error::MalformedObject(format!("object size out of range: {}", size)))?;

    let content = &data[nul + 1..];
    if content.len() != size {
        return Err(Error::MalformedObject(format!(
            "declared size {} but found {} bytes",
            size,
            content.len()
        )));
    }

    Ok(ObjectHeader {
        kind,
        size,
        content,
    })
}

/// A typed object value, constructed per operation and never cached
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Object {
    pub kind: ObjectKind,
    pub content: Vec<u8>,
}

impl Object {
    pub fn new(kind: ObjectKind, content: Vec<u8>) -> Self {
        Object { kind, content }
    }

    /// Wrap file content as a blob
    pub fn blob(content: Vec<u8>) -> Self {
        Object::new(ObjectKind::Blob, content)
    }

    /// Serialize into the canonical form
    pub fn encode(&self) -> Vec<u8> {
        let header = format!("{} {}\0", self.kind, self.content.len());
        let mut out = Vec::with_capacity(header.len() + self.content.len());
        out.extend_from_slice(header.as_bytes());
        out.extend_from_slice(&self.content);
        out
    }

    /// Compute the content hash of the canonical form
    pub fn hash(&self) -> ObjectHash {
        ObjectHash::digest(&self.encode())
    }

    /// Parse canonical bytes back into an object
    pub fn decode(data: &[u8]) -> Result<Self> {
        let header = parse_header(data)?;
        let kind = header.kind.parse()?;
        Ok(Object::new(kind, header.content.to_vec()))
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}
