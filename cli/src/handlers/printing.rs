//! Handles displaying the output of various commands in a human and machine readable format.

use std::fmt::Write;

use musadora_core::library::LibrarySummary;
use musadora_types::{MusicItem, UserMusicItem};

/// Artwork is printed at this size.
const ARTWORK_SIZE: u32 = 600;

pub fn item_list(prefix: &str, items: &[UserMusicItem]) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(output, "{prefix} ({}):", items.len())?;

    for (i, item) in items.iter().enumerate() {
        writeln!(
            output,
            "\t{}: {} \"{}\" (id: {}),",
            i,
            item.kind(),
            item.name().unwrap_or("<unnamed>"),
            item.id()
        )?;
    }

    Ok(output)
}

pub fn item_detail(item: &UserMusicItem) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(output, "{}: {{", item.kind())?;
    writeln!(output, "\tId: {},", item.id())?;
    if let Some(name) = item.name() {
        writeln!(output, "\tName: {name},")?;
    }
    let href = match item {
        UserMusicItem::Album(album) => album.href.as_deref(),
        UserMusicItem::Playlist(playlist) => playlist.href.as_deref(),
        UserMusicItem::Station(station) => station.href.as_deref(),
    };
    if let Some(href) = href {
        writeln!(output, "\tHref: {href},")?;
    }
    if let Some(artwork) = item.artwork() {
        writeln!(
            output,
            "\tArtwork: {},",
            artwork.url_for(ARTWORK_SIZE, ARTWORK_SIZE)
        )?;
    }
    if let Some(play_params) = item.play_parameters() {
        writeln!(output, "\tIn Library: {},", play_params.is_library)?;
    }
    if let Some(station) = item.as_station() {
        writeln!(output, "\tLive: {},", station.is_live())?;
    }
    writeln!(output, "}}")?;

    Ok(output)
}

pub fn summary(summary: &LibrarySummary) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(output, "LibrarySummary:")?;
    writeln!(output, "\talbums: {}", summary.albums)?;
    writeln!(output, "\tplaylists: {}", summary.playlists)?;
    writeln!(output, "\tstations: {}", summary.stations)?;
    writeln!(output, "\ttotal: {}", summary.total())?;
    writeln!(output, "\thas next batch: {}", summary.has_next_batch)?;

    Ok(output)
}

/// The record wrapped by `item`, as JSON.
///
/// A [`UserMusicItem`] itself encodes to an empty object, so the record is serialized instead.
pub fn record_json(item: &UserMusicItem) -> Result<serde_json::Value, serde_json::Error> {
    match item {
        UserMusicItem::Album(album) => serde_json::to_value(album),
        UserMusicItem::Playlist(playlist) => serde_json::to_value(playlist),
        UserMusicItem::Station(station) => serde_json::to_value(station),
    }
}

pub fn records_json(items: &[UserMusicItem]) -> Result<String, serde_json::Error> {
    let records = items
        .iter()
        .map(record_json)
        .collect::<Result<Vec<_>, _>>()?;
    serde_json::to_string_pretty(&records)
}
