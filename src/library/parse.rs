use super::model::{SEPARATOR, UNKNOWN_ARTIST};

/// Split a file stem into `(artist, title)`.
///
/// `"Artist - Title"` splits on the first separator only, so `"A - B - C"`
/// yields artist `A` and title `B - C`. A blank artist falls back to
/// [`UNKNOWN_ARTIST`]; a blank title falls back to the untrimmed stem.
/// Stems without a separator become the trimmed title.
pub fn parse_stem(stem: &str) -> (String, String) {
    match stem.split_once(SEPARATOR) {
        Some((artist, title)) => {
            let artist = match artist.trim() {
                "" => UNKNOWN_ARTIST,
                a => a,
            };
            let title = match title.trim() {
                "" => stem,
                t => t,
            };
            (artist.to_string(), title.to_string())
        }
        None => (UNKNOWN_ARTIST.to_string(), stem.trim().to_string()),
    }
}
