use std::path::PathBuf;

use clap::Parser;
use musadora_core::config::{CliSettings, OutputFormat};
use pretty_assertions::assert_str_eq;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use crate::handlers::{Command, CommandHandler};

const RESPONSE: &str = r#"{
    "next": "/v1/me/library/recently-added?offset=3",
    "data": [
        {
            "id": "l.1",
            "type": "library-albums",
            "href": "/v1/me/library/albums/l.1",
            "attributes": {
                "name": "Currents",
                "artistName": "Tame Impala",
                "artwork": {"url": "https://example.com/{w}x{h}bb.jpg"},
                "playParams": {"id": "l.1", "kind": "album", "isLibrary": true}
            }
        },
        {"id": "p.2", "type": "library-playlists", "attributes": {"name": "Road Trip"}},
        {"id": "ra.3", "type": "stations", "attributes": {"name": "Apple Music 1", "isLive": true}}
    ]
}"#;

/// A temp dir holding `library.json`.
#[fixture]
fn library() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(&path, RESPONSE).unwrap();
    (dir, path)
}

fn settings(format: OutputFormat) -> CliSettings {
    CliSettings {
        format,
        ..CliSettings::default()
    }
}

fn run(command: &Command, settings: &CliSettings) -> (anyhow::Result<()>, String, String) {
    let mut stdout = String::new();
    let mut stderr = String::new();
    let result = command.handle(settings, &mut stdout, &mut stderr);
    (result, stdout, stderr)
}

#[test]
fn test_cli_args_parse() {
    let args = vec!["musadora", "--format", "json", "--log-level", "debug"];
    let flags = crate::Flags::try_parse_from(args);
    assert!(flags.is_ok());
    let flags = flags.unwrap();
    assert_eq!(flags.format, Some(OutputFormat::Json));
    assert_eq!(flags.log_level, Some(log::LevelFilter::Debug));
    assert!(flags.config.is_none());
    assert!(flags.subcommand.is_none());
}

#[test]
fn test_cli_args_parse_get() {
    let args = vec!["musadora", "get", "p.2", "library.json"];
    let flags = crate::Flags::try_parse_from(args).unwrap();
    assert!(matches!(
        flags.subcommand,
        Some(Command::Get { ref id, path: Some(ref path) }) if id == "p.2" && path == &PathBuf::from("library.json")
    ));
}

#[test]
fn test_cli_args_reject_unknown_format() {
    let args = vec!["musadora", "--format", "xml"];
    assert!(crate::Flags::try_parse_from(args).is_err());
}

#[rstest]
fn test_list(library: (TempDir, PathBuf)) {
    let (_dir, path) = library;
    let command = Command::List { path: Some(path) };

    let (result, stdout, stderr) = run(&command, &settings(OutputFormat::Plain));

    assert!(result.is_ok());
    assert_str_eq!(
        stdout,
        "Items (3):\n\
         \t0: album \"Currents\" (id: l.1),\n\
         \t1: playlist \"Road Trip\" (id: p.2),\n\
         \t2: station \"Apple Music 1\" (id: ra.3),\n"
    );
    assert_str_eq!(
        stderr,
        "More items are available at: /v1/me/library/recently-added?offset=3\n"
    );
}

#[rstest]
fn test_list_json_prints_records(library: (TempDir, PathBuf)) {
    let (_dir, path) = library;
    let command = Command::List { path: Some(path) };

    let (result, stdout, _) = run(&command, &settings(OutputFormat::Json));

    assert!(result.is_ok());
    let records: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let ids: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["l.1", "p.2", "ra.3"]);
    assert_eq!(records[0]["attributes"]["artistName"], "Tame Impala");
}

#[rstest]
fn test_summary(library: (TempDir, PathBuf)) {
    let (_dir, path) = library;
    let command = Command::Summary { path: Some(path) };

    let (result, stdout, _) = run(&command, &settings(OutputFormat::Plain));

    assert!(result.is_ok());
    assert_str_eq!(
        stdout,
        "LibrarySummary:\n\
         \talbums: 1\n\
         \tplaylists: 1\n\
         \tstations: 1\n\
         \ttotal: 3\n\
         \thas next batch: true\n"
    );
}

#[rstest]
fn test_get(library: (TempDir, PathBuf)) {
    let (_dir, path) = library;
    let command = Command::Get {
        id: "l.1".into(),
        path: Some(path),
    };

    let (result, stdout, stderr) = run(&command, &settings(OutputFormat::Plain));

    assert!(result.is_ok());
    assert_str_eq!(
        stdout,
        "album: {\n\
         \tId: l.1,\n\
         \tName: Currents,\n\
         \tHref: /v1/me/library/albums/l.1,\n\
         \tArtwork: https://example.com/600x600bb.jpg,\n\
         \tIn Library: true,\n\
         }\n"
    );
    assert!(stderr.is_empty());
}

#[rstest]
fn test_get_missing_item(library: (TempDir, PathBuf)) {
    let (_dir, path) = library;
    let command = Command::Get {
        id: "nope".into(),
        path: Some(path),
    };

    let (result, stdout, stderr) = run(&command, &settings(OutputFormat::Plain));

    assert!(result.is_ok());
    assert!(stdout.is_empty());
    assert_str_eq!(stderr, "No item with id \"nope\"\n");
}

#[rstest]
fn test_library_from_settings(library: (TempDir, PathBuf)) {
    let (_dir, path) = library;
    let settings = CliSettings {
        library: Some(path),
        ..CliSettings::default()
    };

    let (result, stdout, _) = run(&Command::Summary { path: None }, &settings);

    assert!(result.is_ok());
    assert!(stdout.contains("total: 3"));
}

#[test]
fn test_no_library_given() {
    let (result, stdout, _) = run(&Command::List { path: None }, &CliSettings::default());

    assert!(result.is_err());
    assert!(stdout.is_empty());
}

#[test]
fn test_unknown_item_type_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    std::fs::write(
        &path,
        r#"{"data": [{"id": "i.1", "type": "library-songs"}]}"#,
    )
    .unwrap();

    let (result, _, _) = run(&Command::List { path: Some(path) }, &CliSettings::default());

    let error = result.unwrap_err();
    assert!(error.to_string().contains("library-songs"), "{error}");
}
