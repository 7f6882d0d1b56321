use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/playlist-gen/config.toml` or `~/.config/playlist-gen/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PLAYLIST_GEN__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub paths: PathSettings,
    pub tags: TagSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Base for relative `songs_dir` / `output`. Defaults to the working directory.
    pub root: Option<PathBuf>,
    /// Folder scanned for audio files. Created when missing.
    pub songs_dir: PathBuf,
    /// Manifest file, overwritten on every run.
    pub output: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            root: None,
            songs_dir: Path::new("public").join("songs"),
            output: PathBuf::from("songs.json"),
        }
    }
}

impl PathSettings {
    /// Resolve `songs_dir` and `output` against `root`, or `cwd` when no root is set.
    pub fn resolve(&self, cwd: &Path) -> (PathBuf, PathBuf) {
        let root = match &self.root {
            Some(r) if r.is_absolute() => r.clone(),
            Some(r) => cwd.join(r),
            None => cwd.to_path_buf(),
        };
        // `join` keeps absolute paths untouched.
        (root.join(&self.songs_dir), root.join(&self.output))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TagSettings {
    /// Read track durations from audio metadata. When false every duration is null.
    pub read_durations: bool,
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            read_durations: true,
        }
    }
}
