//! Types for the items of a user's music library, and the logic to decode them from catalog responses.
//!
//! The central type is [`UserMusicItem`], which holds exactly one of an [`Album`], a [`Playlist`],
//! or a [`Station`], chosen by the `type` key of the payload it was decoded from.

pub mod album;
pub mod collection;
pub mod common;
pub mod errors;
pub mod id;
pub mod item;
pub mod playlist;
pub mod station;

pub use album::Album;
pub use collection::{MusicItemCollection, UserMusicItems};
pub use errors::{CodingPath, DecodingError};
pub use id::{MusicItem, MusicItemId};
pub use item::{UserMusicItem, UserMusicItemKind};
pub use playlist::Playlist;
pub use station::Station;
