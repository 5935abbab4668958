//! A user's library item, which is either an album, a playlist, or a station.

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;
use strum::{Display, EnumIter, IntoStaticStr};

use crate::{
    album::Album,
    common::{Artwork, PlayParameters},
    errors::{CodingPath, DecodingError},
    id::{MusicItem, MusicItemId},
    playlist::Playlist,
    station::Station,
};

/// The key holding the resource type of a payload.
pub const TYPE_KEY: &str = "type";

/// A generic music item that contains either an album, a playlist, or a station.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UserMusicItem {
    Album(Album),
    Playlist(Playlist),
    Station(Station),
}

/// Which variant a [`UserMusicItem`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum UserMusicItemKind {
    Album,
    Playlist,
    Station,
}

impl UserMusicItemKind {
    /// Map the value of a payload's `type` key to the variant it decodes into.
    ///
    /// Catalog and library resource types map to the same variant.
    #[must_use]
    pub fn from_discriminator(discriminator: &str) -> Option<Self> {
        match discriminator {
            "albums" | "library-albums" => Some(Self::Album),
            "playlists" | "library-playlists" => Some(Self::Playlist),
            "stations" => Some(Self::Station),
            _ => None,
        }
    }
}

impl UserMusicItem {
    /// Decode a single item from its payload.
    ///
    /// Reads the `type` key of `payload` and decodes the whole payload as the record it names.
    /// `path` is the location of `payload` in the enclosing document, and is only used for error reporting.
    ///
    /// # Errors
    ///
    /// - [`DecodingError::KeyNotFound`] if `type` is missing or is not a string.
    /// - [`DecodingError::TypeMismatch`] if `type` is not one of the known resource types.
    /// - [`DecodingError::Payload`] if the record itself fails to decode.
    pub fn decode(payload: &Value, path: &CodingPath) -> Result<Self, DecodingError> {
        let discriminator = payload
            .get(TYPE_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| DecodingError::KeyNotFound {
                key: TYPE_KEY,
                path: path.clone(),
            })?;

        let kind = UserMusicItemKind::from_discriminator(discriminator).ok_or_else(|| {
            DecodingError::TypeMismatch {
                target: "UserMusicItem",
                description: format!(
                    "Unexpected type \"{discriminator}\" encountered for UserMusicItem."
                ),
                path: path.clone(),
            }
        })?;

        let decoded = match kind {
            UserMusicItemKind::Album => Album::deserialize(payload).map(Self::Album),
            UserMusicItemKind::Playlist => Playlist::deserialize(payload).map(Self::Playlist),
            UserMusicItemKind::Station => Station::deserialize(payload).map(Self::Station),
        };

        decoded.map_err(|source| DecodingError::Payload {
            kind: kind.into(),
            path: path.clone(),
            source,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> UserMusicItemKind {
        match self {
            Self::Album(_) => UserMusicItemKind::Album,
            Self::Playlist(_) => UserMusicItemKind::Playlist,
            Self::Station(_) => UserMusicItemKind::Station,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Album(album) => album.name(),
            Self::Playlist(playlist) => playlist.name(),
            Self::Station(station) => station.name(),
        }
    }

    #[must_use]
    pub fn artwork(&self) -> Option<&Artwork> {
        match self {
            Self::Album(album) => album.attributes.as_ref()?.artwork.as_ref(),
            Self::Playlist(playlist) => playlist.attributes.as_ref()?.artwork.as_ref(),
            Self::Station(station) => station.attributes.as_ref()?.artwork.as_ref(),
        }
    }

    #[must_use]
    pub fn play_parameters(&self) -> Option<&PlayParameters> {
        match self {
            Self::Album(album) => album.attributes.as_ref()?.play_params.as_ref(),
            Self::Playlist(playlist) => playlist.attributes.as_ref()?.play_params.as_ref(),
            Self::Station(station) => station.attributes.as_ref()?.play_params.as_ref(),
        }
    }

    #[must_use]
    pub const fn as_album(&self) -> Option<&Album> {
        match self {
            Self::Album(album) => Some(album),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_playlist(&self) -> Option<&Playlist> {
        match self {
            Self::Playlist(playlist) => Some(playlist),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_station(&self) -> Option<&Station> {
        match self {
            Self::Station(station) => Some(station),
            _ => None,
        }
    }
}

impl MusicItem for UserMusicItem {
    fn id(&self) -> &MusicItemId {
        match self {
            Self::Album(album) => album.id(),
            Self::Playlist(playlist) => playlist.id(),
            Self::Station(station) => station.id(),
        }
    }
}

impl From<Album> for UserMusicItem {
    fn from(album: Album) -> Self {
        Self::Album(album)
    }
}

impl From<Playlist> for UserMusicItem {
    fn from(playlist: Playlist) -> Self {
        Self::Playlist(playlist)
    }
}

impl From<Station> for UserMusicItem {
    fn from(station: Station) -> Self {
        Self::Station(station)
    }
}

impl<'de> Deserialize<'de> for UserMusicItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let payload = Value::deserialize(deserializer)?;
        Self::decode(&payload, &CodingPath::root()).map_err(serde::de::Error::custom)
    }
}

/// Encoding a [`UserMusicItem`] writes no fields: the output is an empty map.
///
/// This means the output can not be decoded back into a [`UserMusicItem`], as it has no `type`.
/// Serialize the wrapped record instead when its content is needed.
impl Serialize for UserMusicItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_map(Some(0))?.end()
    }
}
