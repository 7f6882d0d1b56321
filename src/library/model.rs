use serde::{Deserialize, Serialize};

/// Artist recorded when none can be derived from the file name.
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Separator between artist and title in a file stem.
pub const SEPARATOR: &str = " - ";

/// Extensions accepted as audio (compared case-insensitively, without dot).
pub const AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "m4a", "opus", "ogg", "wav"];

/// One entry of `songs.json`.
///
/// Field order matches what the playback front end reads; `duration` is always
/// serialized, as `null` when it could not be determined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// 1-based position in the scan.
    pub id: u32,
    pub title: String,
    pub artist: String,
    /// Base name on disk, extension included.
    pub filename: String,
    /// Length in seconds.
    pub duration: Option<f64>,
}
