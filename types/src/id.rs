use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// The opaque identifier of a catalog or library resource.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MusicItemId(Arc<str>);

impl MusicItemId {
    #[must_use]
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MusicItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MusicItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MusicItemId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl From<String> for MusicItemId {
    fn from(id: String) -> Self {
        Self(id.into())
    }
}

impl PartialEq<str> for MusicItemId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for MusicItemId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Something that lives in the catalog or a user's library and can be identified.
pub trait MusicItem {
    fn id(&self) -> &MusicItemId;
}
