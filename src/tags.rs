//! Best-effort duration lookup from embedded audio metadata.
//!
//! The reader is picked once at startup by [`select`]. Builds without the
//! `tags` feature, or runs with `tags.read_durations = false`, get [`NoTags`]
//! and every duration comes out empty.

use std::path::Path;

use tracing::debug;

use crate::config::TagSettings;

/// Reads a track length in seconds. Never fails loudly: any problem is `None`.
pub trait DurationReader {
    fn read_duration(&self, path: &Path) -> Option<f64>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

/// Reader used when metadata lookup is unavailable or disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTags;

impl DurationReader for NoTags {
    fn read_duration(&self, _path: &Path) -> Option<f64> {
        None
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

#[cfg(feature = "tags")]
pub use self::lofty_reader::LoftyReader;

#[cfg(feature = "tags")]
mod lofty_reader {
    use std::path::Path;

    use lofty::prelude::*;
    use tracing::debug;

    use super::{DurationReader, positive_seconds};

    /// Duration from the stream properties lofty reports.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LoftyReader;

    impl DurationReader for LoftyReader {
        fn read_duration(&self, path: &Path) -> Option<f64> {
            match lofty::read_from_path(path) {
                Ok(tagged) => positive_seconds(tagged.properties().duration().as_secs_f64()),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "no duration");
                    None
                }
            }
        }

        fn name(&self) -> &'static str {
            "lofty"
        }
    }
}

/// Keep only finite, strictly positive lengths.
#[cfg_attr(not(feature = "tags"), allow(dead_code))]
fn positive_seconds(secs: f64) -> Option<f64> {
    (secs.is_finite() && secs > 0.0).then_some(secs)
}

/// Choose the reader for this run.
pub fn select(settings: &TagSettings) -> Box<dyn DurationReader> {
    let reader: Box<dyn DurationReader> = if !settings.read_durations {
        Box::new(NoTags)
    } else {
        available()
    };
    debug!(reader = reader.name(), "duration reader selected");
    reader
}

#[cfg(feature = "tags")]
fn available() -> Box<dyn DurationReader> {
    Box::new(LoftyReader)
}

#[cfg(not(feature = "tags"))]
fn available() -> Box<dyn DurationReader> {
    Box::new(NoTags)
}
