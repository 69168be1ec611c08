//! Recording `AudioOutput` used by controller tests.

use crate::catalog::MediaRef;

use super::types::{AudioOutput, LoadToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Load(MediaRef, LoadToken),
    Play,
    Pause,
}

#[derive(Debug, Default)]
pub struct FakeAudio {
    pub calls: Vec<Call>,
    last: LoadToken,
}

impl FakeAudio {
    pub fn last_token(&self) -> LoadToken {
        self.last
    }
}

impl AudioOutput for FakeAudio {
    fn load(&mut self, media: &MediaRef) -> LoadToken {
        self.last = self.last.next();
        self.calls.push(Call::Load(media.clone(), self.last));
        self.last
    }

    fn play(&mut self) {
        self.calls.push(Call::Play);
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }
}
