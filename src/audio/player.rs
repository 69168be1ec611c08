use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::catalog::MediaRef;
use crate::config::AudioSettings;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, AudioEvent, AudioOutput, LoadToken};

/// Extra time the audio thread gets to exit after its fade-out.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// Handle to the audio thread.
///
/// Acquired once per session. Dropping it fades out whatever is playing, stops
/// the thread and waits for it, so the output is released on every exit path.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    join: Option<JoinHandle<()>>,
    last_token: LoadToken,
    quit_fade_out: Duration,
}

impl AudioPlayer {
    /// Spawn the audio thread. The returned receiver yields `AudioEvent`s.
    pub fn new(settings: AudioSettings) -> (Self, Receiver<AudioEvent>) {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<AudioEvent>();
        let quit_fade_out = Duration::from_millis(settings.quit_fade_out_ms);

        let join = spawn_audio_thread(rx, event_tx, settings);

        let player = Self {
            tx,
            join: Some(join),
            last_token: LoadToken::default(),
            quit_fade_out,
        };
        (player, event_rx)
    }

    fn send(&self, cmd: AudioCmd) {
        if let Err(e) = self.tx.send(cmd) {
            warn!("audio thread is gone: {e}");
        }
    }

    /// Fade out, stop the thread and wait a bounded time for it. Safe to call
    /// more than once.
    pub fn shutdown(&mut self) {
        let Some(join) = self.join.take() else {
            return;
        };
        self.send(AudioCmd::Quit {
            fade_out_ms: self.quit_fade_out.as_millis() as u64,
        });
        let deadline = Instant::now() + self.quit_fade_out + SHUTDOWN_GRACE;
        while !join.is_finished() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }
        if !join.is_finished() {
            // Mid-fetch; the thread exits on its own once it reads Quit.
            warn!("audio thread still busy at shutdown, detaching");
            return;
        }
        if join.join().is_err() {
            warn!("audio thread panicked");
        }
        debug!("audio output released");
    }
}

impl AudioOutput for AudioPlayer {
    fn load(&mut self, media: &MediaRef) -> LoadToken {
        self.last_token = self.last_token.next();
        self.send(AudioCmd::Load {
            token: self.last_token,
            media: media.clone(),
        });
        self.last_token
    }

    fn play(&mut self) {
        self.send(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
