//! Configuration loader and schema types.
//!
//! Everything here is optional: with no file and no environment overrides the
//! tool scans `public/songs` and writes `songs.json` under the working directory.

mod load;
mod schema;

pub use schema::*;
