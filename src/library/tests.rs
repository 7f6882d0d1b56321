use super::parse::parse_stem;
use super::*;
use crate::tags::{DurationReader, NoTags};
use std::cell::Cell;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn parse_stem_splits_artist_and_title() {
    assert_eq!(parse_stem("Artist - Title"), ("Artist".into(), "Title".into()));
    assert_eq!(parse_stem("  Artist   -   Title  "), ("Artist".into(), "Title".into()));
}

#[test]
fn parse_stem_blank_artist_is_unknown() {
    assert_eq!(parse_stem(" - Title"), (UNKNOWN_ARTIST.into(), "Title".into()));
}

#[test]
fn parse_stem_blank_title_keeps_untrimmed_stem() {
    assert_eq!(parse_stem("Artist - "), ("Artist".into(), "Artist - ".into()));
    assert_eq!(parse_stem("Artist -  "), ("Artist".into(), "Artist -  ".into()));
}

#[test]
fn parse_stem_without_separator_trims_title() {
    assert_eq!(parse_stem("OnlyTitle"), (UNKNOWN_ARTIST.into(), "OnlyTitle".into()));
    assert_eq!(parse_stem("  Spaced  "), (UNKNOWN_ARTIST.into(), "Spaced".into()));
    // Hyphen without surrounding spaces is not a separator.
    assert_eq!(parse_stem("Jay-Z"), (UNKNOWN_ARTIST.into(), "Jay-Z".into()));
}

#[test]
fn parse_stem_splits_on_first_separator_only() {
    assert_eq!(parse_stem("A - B - C"), ("A".into(), "B - C".into()));
}

#[test]
fn scan_assigns_sequential_ids_in_filename_order() {
    let dir = tempdir().unwrap();
    for name in ["c.opus", "a.mp3", "B.m4a", "track.txt", "d.WAV", "e.ogg"] {
        fs::write(dir.path().join(name), b"not real audio").unwrap();
    }

    let tracks = scan(dir.path(), &NoTags).unwrap();

    let names: Vec<&str> = tracks.iter().map(|t| t.filename.as_str()).collect();
    // Ordinal order: uppercase sorts before lowercase.
    assert_eq!(names, vec!["B.m4a", "a.mp3", "c.opus", "d.WAV", "e.ogg"]);
    let ids: Vec<u32> = tracks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn scan_derives_metadata_from_filenames() {
    let dir = tempdir().unwrap();
    for name in [
        "Artist - Title.mp3",
        " - Nameless.mp3",
        "OnlyTitle.wav",
        "A - B - C.ogg",
    ] {
        fs::write(dir.path().join(name), b"x").unwrap();
    }

    let tracks = scan(dir.path(), &NoTags).unwrap();
    let by_file = |f: &str| tracks.iter().find(|t| t.filename == f).unwrap().clone();

    let t = by_file("Artist - Title.mp3");
    assert_eq!((t.artist.as_str(), t.title.as_str()), ("Artist", "Title"));

    let t = by_file(" - Nameless.mp3");
    assert_eq!((t.artist.as_str(), t.title.as_str()), ("Unknown", "Nameless"));

    let t = by_file("OnlyTitle.wav");
    assert_eq!((t.artist.as_str(), t.title.as_str()), ("Unknown", "OnlyTitle"));

    let t = by_file("A - B - C.ogg");
    assert_eq!((t.artist.as_str(), t.title.as_str()), ("A", "B - C"));
    assert!(tracks.iter().all(|t| t.duration.is_none()));
}

#[test]
fn scan_keeps_hidden_audio_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden.mp3"), b"x").unwrap();
    fs::write(dir.path().join("visible.mp3"), b"x").unwrap();

    let tracks = scan(dir.path(), &NoTags).unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].filename, ".hidden.mp3");
    assert_eq!(tracks[0].title, ".hidden");
}

/// Fails on every other call, like a reader hitting corrupt files.
struct FlakyReader {
    calls: Cell<u32>,
}

impl DurationReader for FlakyReader {
    fn read_duration(&self, _path: &Path) -> Option<f64> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        (n % 2 == 0).then_some(60.0)
    }

    fn name(&self) -> &'static str {
        "flaky"
    }
}

#[test]
fn scan_continues_after_reader_failures() {
    let dir = tempdir().unwrap();
    for name in ["1.mp3", "2.mp3", "3.mp3"] {
        fs::write(dir.path().join(name), b"x").unwrap();
    }
    let reader = FlakyReader { calls: Cell::new(0) };

    let tracks = scan(dir.path(), &reader).unwrap();

    let durations: Vec<Option<f64>> = tracks.iter().map(|t| t.duration).collect();
    assert_eq!(durations, vec![Some(60.0), None, Some(60.0)]);
    assert_eq!(reader.calls.get(), 3);
}

#[test]
fn scan_of_empty_directory_is_empty() {
    let dir = tempdir().unwrap();
    assert!(scan(dir.path(), &NoTags).unwrap().is_empty());
}
