//! Audio-related small types: commands, events, load tokens and the
//! `AudioOutput` seam used by the playback controller.

use std::fmt;

use crate::catalog::MediaRef;

/// Identifies one `load` on the audio handle.
///
/// End-of-media events carry the token of the source that finished, so events
/// for a source that was already replaced can be told apart and ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct LoadToken(pub u64);

impl LoadToken {
    pub fn next(self) -> Self {
        LoadToken(self.0.wrapping_add(1))
    }
}

impl fmt::Display for LoadToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The operations the playback controller needs from an audio handle.
pub trait AudioOutput {
    /// Replace the current source. Whatever was playing stops; the new source
    /// is positioned at its start and left paused.
    fn load(&mut self, media: &MediaRef) -> LoadToken;
    /// Start or resume the current source.
    fn play(&mut self);
    /// Pause the current source, keeping its position.
    fn pause(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCmd {
    /// Stop the current sink and prepare `media` as the new paused source.
    Load { token: LoadToken, media: MediaRef },
    /// Start or resume the current sink.
    Play,
    /// Pause the current sink.
    Pause,
    /// Quit the audio thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Notifications sent from the audio thread back to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioEvent {
    /// The source loaded under this token played to its natural end.
    Ended(LoadToken),
    /// The source for this token could not be opened, fetched or decoded.
    Failed { token: LoadToken, reason: String },
    /// No audio output is available for this session.
    Unavailable(String),
}
