#![allow(clippy::module_name_repetitions)]
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    common::{Artwork, PlayParameters},
    id::{MusicItem, MusicItemId},
};

/// A radio station.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Station {
    /// The unique identifier for this [`Station`].
    pub id: MusicItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<StationAttributes>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationAttributes {
    pub name: Arc<str>,
    /// Whether the [`Station`] is a live broadcast.
    #[serde(default)]
    pub is_live: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_provider_name: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<Artwork>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_params: Option<PlayParameters>,
}

impl Station {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attributes.as_ref().map(|a| &*a.name)
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.attributes.as_ref().is_some_and(|a| a.is_live)
    }
}

impl MusicItem for Station {
    fn id(&self) -> &MusicItemId {
        &self.id
    }
}
