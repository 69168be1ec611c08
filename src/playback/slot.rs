use tracing::debug;

use crate::audio::{AudioOutput, LoadToken};
use crate::catalog::{Track, TrackId};
use crate::error::PlayerError;

/// Which track, if any, is loaded on the audio handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackSlot {
    #[default]
    Idle,
    Loaded { track: TrackId, playing: bool },
}

impl PlaybackSlot {
    pub fn track(self) -> Option<TrackId> {
        match self {
            PlaybackSlot::Idle => None,
            PlaybackSlot::Loaded { track, .. } => Some(track),
        }
    }

    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackSlot::Loaded { playing: true, .. })
    }
}

/// What a toggle did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackChange {
    /// A new source was loaded and started from the beginning.
    Started,
    Paused,
    Resumed,
}

/// Owns the playback slot and the one audio handle it drives.
pub struct Player<A: AudioOutput> {
    audio: A,
    slot: PlaybackSlot,
    /// Token of the load backing the current slot.
    token: Option<LoadToken>,
}

impl<A: AudioOutput> Player<A> {
    pub fn new(audio: A) -> Self {
        Self {
            audio,
            slot: PlaybackSlot::Idle,
            token: None,
        }
    }

    pub fn slot(&self) -> PlaybackSlot {
        self.slot
    }

    /// True if `id` is loaded and currently playing.
    pub fn is_playing(&self, id: TrackId) -> bool {
        self.slot == PlaybackSlot::Loaded {
            track: id,
            playing: true,
        }
    }

    #[cfg(test)]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Pause, resume, or switch to `track`.
    ///
    /// Switching always reloads the source, which stops whatever played
    /// before; the previous track is never left playing.
    pub fn toggle_play_pause(&mut self, track: &Track) -> Result<PlaybackChange, PlayerError> {
        let change = match self.slot {
            PlaybackSlot::Loaded {
                track: current,
                playing: true,
            } if current == track.id => {
                self.audio.pause();
                self.slot = PlaybackSlot::Loaded {
                    track: current,
                    playing: false,
                };
                PlaybackChange::Paused
            }
            PlaybackSlot::Loaded {
                track: current,
                playing: false,
            } if current == track.id => {
                self.audio.play();
                self.slot = PlaybackSlot::Loaded {
                    track: current,
                    playing: true,
                };
                PlaybackChange::Resumed
            }
            _ => {
                let media = track.media.as_ref().ok_or(PlayerError::NoPreview(track.id))?;
                let token = self.audio.load(media);
                self.audio.play();
                self.token = Some(token);
                self.slot = PlaybackSlot::Loaded {
                    track: track.id,
                    playing: true,
                };
                PlaybackChange::Started
            }
        };
        debug!(track = %track.id, ?change, "toggle play/pause");
        Ok(change)
    }

    /// Natural end of the source loaded under `token`. Returns true if the
    /// slot was cleared; stale tokens are ignored.
    pub fn on_playback_ended(&mut self, token: LoadToken) -> bool {
        if self.token != Some(token) {
            debug!(%token, "ignoring end of replaced source");
            return false;
        }
        self.token = None;
        self.slot = PlaybackSlot::Idle;
        true
    }

    /// The source loaded under `token` could not be played.
    pub fn on_playback_failed(&mut self, token: LoadToken) -> bool {
        self.on_playback_ended(token)
    }
}
