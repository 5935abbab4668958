//! Errors produced while decoding library items, and the path used to locate them.

use std::fmt;

use thiserror::Error;

/// One step of a [`CodingPath`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodingKey {
    Key(String),
    Index(usize),
}

/// The location of the value being decoded, relative to the document root.
///
/// Displayed JSONPath-style, e.g. `$.data[2]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodingPath(Vec<CodingKey>);

impl CodingPath {
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy of this path extended by the object key `key`.
    #[must_use]
    pub fn push_key(&self, key: impl Into<String>) -> Self {
        let mut keys = self.0.clone();
        keys.push(CodingKey::Key(key.into()));
        Self(keys)
    }

    /// Returns a copy of this path extended by the array index `index`.
    #[must_use]
    pub fn push_index(&self, index: usize) -> Self {
        let mut keys = self.0.clone();
        keys.push(CodingKey::Index(index));
        Self(keys)
    }

    #[must_use]
    pub fn keys(&self) -> &[CodingKey] {
        &self.0
    }
}

impl fmt::Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for key in &self.0 {
            match key {
                CodingKey::Key(key) => write!(f, ".{key}")?,
                CodingKey::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Errors that can occur while decoding a [`crate::UserMusicItem`] or a collection of them.
#[derive(Error, Debug)]
pub enum DecodingError {
    /// A required key was absent, or did not hold a value of the expected kind.
    #[error("No value associated with key \"{key}\" at {path}.")]
    KeyNotFound { key: &'static str, path: CodingPath },
    /// The value at `path` could not be decoded as `target`.
    #[error("Type mismatch for {target} at {path}: {description}")]
    TypeMismatch {
        target: &'static str,
        description: String,
        path: CodingPath,
    },
    /// The discriminator was recognized, but the record itself failed to decode.
    #[error("Failed to decode {kind} at {path}: {source}")]
    Payload {
        kind: &'static str,
        path: CodingPath,
        #[source]
        source: serde_json::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodingError {
    /// The path at which decoding failed, if known.
    #[must_use]
    pub const fn path(&self) -> Option<&CodingPath> {
        match self {
            Self::KeyNotFound { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::Payload { path, .. } => Some(path),
            Self::Json(_) => None,
        }
    }
}
