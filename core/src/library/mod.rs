//! Loading of library responses from disk.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use log::{debug, info};
use musadora_types::{MusicItem, UserMusicItem, UserMusicItemKind, UserMusicItems};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::errors::LibraryError;

/// Read a library response document from `reader` and decode its items.
///
/// # Errors
///
/// Returns an error if the reader fails, if the input is not JSON, or if any item fails to decode.
#[instrument(skip(reader))]
pub fn read_library_items<R: Read>(reader: R) -> Result<UserMusicItems, LibraryError> {
    let document: Value = serde_json::from_reader(reader)?;
    let items = UserMusicItems::decode(&document)?;
    debug!(
        "Decoded {} library items (next batch: {})",
        items.len(),
        items.next_href().unwrap_or("none")
    );
    Ok(items)
}

/// Load the library response stored at `path`.
///
/// # Errors
///
/// Returns an error if the file can not be opened, or if [`read_library_items`] fails.
#[instrument]
pub fn load_library_items(path: &Path) -> Result<UserMusicItems, LibraryError> {
    info!("Loading library items from {}", path.display());
    let file = File::open(path)?;
    read_library_items(BufReader::new(file))
}

/// Find the first item with the given id.
#[must_use]
pub fn find_item<'a>(items: &'a UserMusicItems, id: &str) -> Option<&'a UserMusicItem> {
    items.iter().find(|item| item.id() == id)
}

/// A brief representation of a batch of library items
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LibrarySummary {
    pub albums: usize,
    pub playlists: usize,
    pub stations: usize,
    /// Whether the response pointed at another batch of items.
    pub has_next_batch: bool,
}

impl LibrarySummary {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.albums + self.playlists + self.stations
    }
}

impl From<&UserMusicItems> for LibrarySummary {
    fn from(items: &UserMusicItems) -> Self {
        items.iter().fold(
            Self {
                has_next_batch: items.has_next_batch(),
                ..Self::default()
            },
            |mut summary, item| {
                match item.kind() {
                    UserMusicItemKind::Album => summary.albums += 1,
                    UserMusicItemKind::Playlist => summary.playlists += 1,
                    UserMusicItemKind::Station => summary.stations += 1,
                }
                summary
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use musadora_types::DecodingError;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    const RESPONSE: &str = r#"{
        "next": "/v1/me/library/recently-added?offset=4",
        "data": [
            {"id": "l.1", "type": "library-albums", "attributes": {"name": "Currents"}},
            {"id": "p.2", "type": "library-playlists", "attributes": {"name": "Road Trip"}},
            {"id": "ra.3", "type": "stations", "attributes": {"name": "Apple Music 1", "isLive": true}},
            {"id": "1440", "type": "albums", "attributes": {"name": "Lonerism"}}
        ]
    }"#;

    #[fixture]
    fn response_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, RESPONSE.as_bytes()).unwrap();
        file
    }

    #[rstest]
    fn test_load_library_items(response_file: tempfile::NamedTempFile) {
        let items = load_library_items(response_file.path()).unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(items[2].kind(), UserMusicItemKind::Station);
        assert_eq!(
            LibrarySummary::from(&items),
            LibrarySummary {
                albums: 2,
                playlists: 1,
                stations: 1,
                has_next_batch: true,
            }
        );
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = load_library_items(&temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(LibraryError::IO(_))));
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::truncated(r#"{"data": ["#)]
    fn test_read_invalid_json(#[case] input: &str) {
        let result = read_library_items(input.as_bytes());
        assert!(matches!(
            result,
            Err(LibraryError::Decoding(DecodingError::Json(_)))
        ));
    }

    #[test]
    fn test_read_unknown_item_fails_whole_batch() {
        let input = r#"{"data": [
            {"id": "l.1", "type": "library-albums"},
            {"id": "i.2", "type": "library-songs"}
        ]}"#;
        let result = read_library_items(input.as_bytes());
        assert!(matches!(
            result,
            Err(LibraryError::Decoding(DecodingError::TypeMismatch { .. }))
        ));
    }

    #[rstest]
    #[case("p.2", Some(UserMusicItemKind::Playlist))]
    #[case("1440", Some(UserMusicItemKind::Album))]
    #[case("nope", None)]
    fn test_find_item(#[case] id: &str, #[case] expected: Option<UserMusicItemKind>) {
        let items = read_library_items(RESPONSE.as_bytes()).unwrap();
        assert_eq!(find_item(&items, id).map(UserMusicItem::kind), expected);
    }

    #[test]
    fn test_summary_total() {
        let items = read_library_items(RESPONSE.as_bytes()).unwrap();
        assert_eq!(LibrarySummary::from(&items).total(), 4);
        assert_eq!(LibrarySummary::default().total(), 0);
    }
}
