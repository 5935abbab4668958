//! Attribute types shared by albums, playlists, and stations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Artwork for a resource.
///
/// The `url` is a template containing `{w}` and `{h}` placeholders for the requested dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub url: Arc<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Average background color, as a hex string without the leading `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<Arc<str>>,
}

impl Artwork {
    /// Build the url of the artwork at the given size.
    #[must_use]
    pub fn url_for(&self, width: u32, height: u32) -> String {
        self.url
            .replace("{w}", &width.to_string())
            .replace("{h}", &height.to_string())
    }
}

/// The parameters needed to hand a resource to a player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayParameters {
    pub id: Arc<str>,
    pub kind: Arc<str>,
    #[serde(default)]
    pub is_library: bool,
}
