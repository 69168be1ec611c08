use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info, warn};

use crate::config::AudioSettings;
use crate::error::AudioError;

use super::source::create_sink;
use super::types::{AudioCmd, AudioEvent, LoadToken};

/// How often the thread checks whether the playing sink has drained.
const END_POLL: Duration = Duration::from_millis(200);

/// The one loaded source, if any.
struct Loaded {
    token: LoadToken,
    sink: Sink,
    paused: bool,
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<AudioEvent>,
    settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = if settings.enabled {
            match open_stream() {
                Ok(s) => Some(s),
                Err(e) => {
                    warn!("{e}");
                    let _ = events.send(AudioEvent::Unavailable(e.to_string()));
                    None
                }
            }
        } else {
            info!("audio output disabled by configuration");
            None
        };

        match stream {
            Some(stream) => run(&stream, &rx, &events, &settings),
            None => drain_without_output(&rx, &events, settings.enabled),
        }
        debug!("audio thread finished");
    })
}

fn open_stream() -> Result<OutputStream, AudioError> {
    let mut stream = OutputStreamBuilder::open_default_stream()
        .map_err(|e| AudioError::Device(e.to_string()))?;
    // rodio logs to stderr when OutputStream is dropped, which would scribble
    // over the TUI.
    stream.log_on_drop(false);
    Ok(stream)
}

fn run(
    stream: &OutputStream,
    rx: &Receiver<AudioCmd>,
    events: &Sender<AudioEvent>,
    settings: &AudioSettings,
) {
    let fetch_timeout = Duration::from_secs(settings.fetch_timeout_secs);
    let mut current: Option<Loaded> = None;

    loop {
        match rx.recv_timeout(END_POLL) {
            Ok(cmd) => {
                for cmd in coalesce(cmd, rx) {
                    let quit = apply(
                        cmd,
                        &mut current,
                        stream,
                        events,
                        settings.volume,
                        fetch_timeout,
                    );
                    if quit {
                        return;
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                let finished = current
                    .as_ref()
                    .is_some_and(|l| !l.paused && l.sink.empty());
                if finished {
                    if let Some(loaded) = current.take() {
                        debug!(token = %loaded.token, "source ended");
                        let _ = events.send(AudioEvent::Ended(loaded.token));
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Fold the commands already queued behind `first` into the ones still worth
/// running. A `Load` or `Quit` supersedes everything queued before it, so a
/// stale remote load is never fetched.
pub(super) fn coalesce(first: AudioCmd, rx: &Receiver<AudioCmd>) -> Vec<AudioCmd> {
    let mut pending = vec![first];
    while !matches!(pending.last(), Some(AudioCmd::Quit { .. })) {
        let Ok(cmd) = rx.try_recv() else {
            break;
        };
        if matches!(cmd, AudioCmd::Load { .. } | AudioCmd::Quit { .. }) {
            for stale in pending.drain(..) {
                if let AudioCmd::Load { token, .. } = stale {
                    debug!(%token, "load superseded before it started");
                }
            }
        }
        pending.push(cmd);
    }
    pending
}

/// Run one command against the current sink. Returns `true` on `Quit`.
fn apply(
    cmd: AudioCmd,
    current: &mut Option<Loaded>,
    stream: &OutputStream,
    events: &Sender<AudioEvent>,
    volume: f32,
    fetch_timeout: Duration,
) -> bool {
    match cmd {
        AudioCmd::Load { token, media } => {
            if let Some(old) = current.take() {
                old.sink.stop();
            }
            match create_sink(stream, &media, volume, fetch_timeout) {
                Ok(sink) => {
                    debug!(%token, %media, "source loaded");
                    *current = Some(Loaded {
                        token,
                        sink,
                        paused: true,
                    });
                }
                Err(e) => {
                    warn!(%token, %media, "failed to load preview: {e}");
                    let _ = events.send(AudioEvent::Failed {
                        token,
                        reason: e.to_string(),
                    });
                }
            }
        }
        AudioCmd::Play => {
            if let Some(loaded) = current.as_mut() {
                loaded.sink.play();
                loaded.paused = false;
            }
        }
        AudioCmd::Pause => {
            if let Some(loaded) = current.as_mut() {
                loaded.sink.pause();
                loaded.paused = true;
            }
        }
        AudioCmd::Quit { fade_out_ms } => {
            if let Some(loaded) = current.take() {
                if !loaded.paused {
                    fade_out_sink(&loaded.sink, fade_out_ms);
                }
                loaded.sink.stop();
            }
            return true;
        }
    }
    false
}

/// Without an output device every load fails; everything else is ignored.
pub(super) fn drain_without_output(
    rx: &Receiver<AudioCmd>,
    events: &Sender<AudioEvent>,
    enabled: bool,
) {
    let reason = if enabled {
        "аудиоустройство недоступно"
    } else {
        "звук отключён в настройках"
    };
    while let Ok(cmd) = rx.recv() {
        match cmd {
            AudioCmd::Load { token, .. } => {
                let _ = events.send(AudioEvent::Failed {
                    token,
                    reason: reason.to_string(),
                });
            }
            AudioCmd::Quit { .. } => break,
            AudioCmd::Play | AudioCmd::Pause => {}
        }
    }
}

fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    let start = sink.volume();
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(start * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
