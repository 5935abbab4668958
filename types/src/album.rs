#![allow(clippy::module_name_repetitions)]
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    common::{Artwork, PlayParameters},
    id::{MusicItem, MusicItemId},
};

/// An album, either from the catalog (`albums`) or from the user's library (`library-albums`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Album {
    /// The unique identifier for this [`Album`].
    pub id: MusicItemId,
    /// Relative location of the resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AlbumAttributes>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumAttributes {
    /// Title of the [`Album`].
    pub name: Arc<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_count: Option<u32>,
    /// Release date, as given by the catalog (`YYYY-MM-DD`, or just `YYYY`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<Arc<str>>,
    /// When the [`Album`] was added to the library.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genre_names: Vec<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<Artwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_params: Option<PlayParameters>,
}

impl Album {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attributes.as_ref().map(|a| &*a.name)
    }
}

impl MusicItem for Album {
    fn id(&self) -> &MusicItemId {
        &self.id
    }
}
