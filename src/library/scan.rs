use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::tags::DurationReader;

use super::model::{AUDIO_EXTENSIONS, Track};
use super::parse::parse_stem;

pub(super) fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            AUDIO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

pub(super) fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Scan the top level of `dir` for audio files and build track records.
///
/// The directory is created (with parents) when missing. Entries are visited
/// in file name order and ids are assigned 1..=N in that order. Durations come
/// from `reader`; a reader that fails leaves the duration empty.
///
/// Errors only when `dir` cannot be created or listed.
pub fn scan(dir: &Path, reader: &dyn DurationReader) -> io::Result<Vec<Track>> {
    fs::create_dir_all(dir)?;

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut tracks: Vec<Track> = Vec::new();
    let mut next_id: u32 = 1;

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            // The root itself could not be read; nothing sensible to write.
            Err(e) if e.depth() == 0 => return Err(io::Error::from(e)),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() {
            debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }
        if !is_audio_file(path) {
            debug!(path = %path.display(), hidden = is_hidden(path), "skipping non-audio file");
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let filename = entry.file_name().to_string_lossy().into_owned();
        let (artist, title) = parse_stem(&stem);
        let duration = reader.read_duration(path);

        debug!(id = next_id, %filename, %artist, %title, ?duration, "track");

        tracks.push(Track {
            id: next_id,
            title,
            artist,
            filename,
            duration,
        });
        next_id += 1;
    }

    Ok(tracks)
}
