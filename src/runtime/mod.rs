use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Settings;
use crate::library::{Track, scan};
use crate::{manifest, tags};

mod logging;
mod settings;

pub fn run() -> Result<()> {
    logging::init();
    let settings = settings::load_settings();
    let cwd = env::current_dir().context("cannot determine working directory")?;
    generate(&settings, &cwd)?;
    Ok(())
}

/// One full scan-and-write cycle rooted at `cwd`. Returns the tracks written.
pub fn generate(settings: &Settings, cwd: &Path) -> Result<Vec<Track>> {
    let (songs_dir, output) = settings.paths.resolve(cwd);
    let reader = tags::select(&settings.tags);

    let tracks = scan(&songs_dir, reader.as_ref())
        .with_context(|| format!("failed to scan {}", songs_dir.display()))?;
    manifest::write(&output, &tracks)?;

    let with_duration = tracks.iter().filter(|t| t.duration.is_some()).count();
    info!(
        tracks = tracks.len(),
        with_duration,
        reader = reader.name(),
        output = %output.display(),
        "manifest written"
    );
    Ok(tracks)
}
