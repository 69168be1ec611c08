//! Playback controller: the single process-wide playback slot and the
//! play/pause toggle that drives the shared audio handle.

mod slot;

pub use slot::*;

#[cfg(test)]
mod tests;
