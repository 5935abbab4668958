#![allow(clippy::module_name_repetitions)]
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    common::{Artwork, PlayParameters},
    id::{MusicItem, MusicItemId},
};

/// A playlist, either from the catalog (`playlists`) or from the user's library (`library-playlists`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Playlist {
    /// The unique identifier for this [`Playlist`].
    pub id: MusicItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<PlaylistAttributes>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistAttributes {
    /// The [`Playlist`]'s name.
    pub name: Arc<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curator_name: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<Arc<str>>,
    /// Whether the user can edit the [`Playlist`]. Only present on library playlists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<Artwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_params: Option<PlayParameters>,
}

/// Editorial notes, in a long and a short form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Description {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<Arc<str>>,
}

impl Playlist {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attributes.as_ref().map(|a| &*a.name)
    }
}

impl MusicItem for Playlist {
    fn id(&self) -> &MusicItemId {
        &self.id
    }
}
