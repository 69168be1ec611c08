//! Audio module: the single shared output handle used for previews.
//!
//! `AudioPlayer` owns a dedicated thread that holds the rodio output stream
//! and at most one sink. The UI thread talks to it through `AudioCmd` and
//! hears back through `AudioEvent`.

mod player;
mod source;
mod thread;
mod types;

pub use player::*;
pub use types::*;

#[cfg(test)]
pub mod fake;

#[cfg(test)]
mod tests;
