//! Audio library: the track record written to the manifest and the
//! directory scan that produces it.

mod model;
mod parse;
mod scan;

pub use model::*;
pub use scan::scan;

#[cfg(test)]
mod tests;
