//! Build `songs.json` from the audio files in `public/songs`.

mod config;
mod library;
mod manifest;
mod runtime;
mod tags;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
