//! `songs.json` output.
//!
//! The manifest is a pretty-printed JSON array (two-space indent, UTF-8 kept
//! literal). An empty library still produces `[]`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::library::Track;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to write manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Render the manifest exactly as [`write`] puts it on disk.
pub fn to_string(tracks: &[Track]) -> Result<String, ManifestError> {
    Ok(serde_json::to_string_pretty(tracks)?)
}

/// Overwrite `path` with the manifest for `tracks`.
pub fn write(path: &Path, tracks: &[Track]) -> Result<(), ManifestError> {
    let io_err = |source: std::io::Error| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, tracks)?;
    out.flush().map_err(io_err)?;
    Ok(())
}
