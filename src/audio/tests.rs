use super::source::open_file;
use super::thread::{coalesce, drain_without_output};
use super::*;
use crate::catalog::MediaRef;
use crate::error::AudioError;
use std::path::Path;
use std::sync::mpsc;

fn media() -> MediaRef {
    MediaRef::parse("/tmp/encore-test/a.mp3").unwrap()
}

#[test]
fn load_tokens_increase() {
    let t = LoadToken::default();
    assert_eq!(t.next(), LoadToken(1));
    assert_eq!(t.next().next(), LoadToken(2));
    assert_eq!(LoadToken(u64::MAX).next(), LoadToken(0));
}

#[test]
fn without_output_every_load_fails_with_its_token() {
    let (tx, rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();

    tx.send(AudioCmd::Load {
        token: LoadToken(1),
        media: media(),
    })
    .unwrap();
    tx.send(AudioCmd::Play).unwrap();
    tx.send(AudioCmd::Load {
        token: LoadToken(2),
        media: media(),
    })
    .unwrap();
    tx.send(AudioCmd::Quit { fade_out_ms: 0 }).unwrap();

    drain_without_output(&rx, &event_tx, false);

    let events: Vec<AudioEvent> = event_rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            AudioEvent::Failed {
                token: LoadToken(1),
                reason: "звук отключён в настройках".into(),
            },
            AudioEvent::Failed {
                token: LoadToken(2),
                reason: "звук отключён в настройках".into(),
            },
        ]
    );
}

fn load(n: u64) -> AudioCmd {
    AudioCmd::Load {
        token: LoadToken(n),
        media: media(),
    }
}

#[test]
fn queued_loads_collapse_to_the_newest() {
    let (tx, rx) = mpsc::channel();
    for cmd in [AudioCmd::Play, load(2), AudioCmd::Play, load(3), load(4), AudioCmd::Play] {
        tx.send(cmd).unwrap();
    }

    let batch = coalesce(load(1), &rx);
    assert_eq!(batch, vec![load(4), AudioCmd::Play]);
    assert!(rx.try_recv().is_err());
}

#[test]
fn quit_skips_pending_loads_and_leaves_the_rest_queued() {
    let (tx, rx) = mpsc::channel();
    tx.send(AudioCmd::Play).unwrap();
    tx.send(load(2)).unwrap();
    tx.send(AudioCmd::Quit { fade_out_ms: 0 }).unwrap();
    tx.send(load(3)).unwrap();

    let batch = coalesce(load(1), &rx);
    assert_eq!(batch, vec![AudioCmd::Quit { fade_out_ms: 0 }]);
    // Nothing past Quit is consumed.
    assert_eq!(rx.try_recv().unwrap(), load(3));
}

#[test]
fn play_and_pause_without_a_new_load_are_kept_in_order() {
    let (tx, rx) = mpsc::channel();
    tx.send(AudioCmd::Pause).unwrap();
    tx.send(AudioCmd::Play).unwrap();

    let batch = coalesce(AudioCmd::Play, &rx);
    assert_eq!(batch, vec![AudioCmd::Play, AudioCmd::Pause, AudioCmd::Play]);
}

#[test]
fn drain_stops_when_sender_is_dropped() {
    let (tx, rx) = mpsc::channel::<AudioCmd>();
    let (event_tx, event_rx) = mpsc::channel();
    drop(tx);

    drain_without_output(&rx, &event_tx, true);
    assert!(event_rx.try_recv().is_err());
}

#[test]
fn disabled_player_reports_failed_loads_and_shuts_down() {
    let settings = crate::config::AudioSettings {
        enabled: false,
        ..Default::default()
    };
    let (mut player, events) = AudioPlayer::new(settings);

    let token = player.load(&media());
    player.play();
    player.shutdown();

    match events.recv().unwrap() {
        AudioEvent::Failed { token: t, .. } => assert_eq!(t, token),
        other => panic!("unexpected event: {other:?}"),
    }
    // Second shutdown (and the one in Drop) is a no-op.
    player.shutdown();
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.mp3");
    match open_file(Path::new(&path)) {
        Err(AudioError::Open { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected open error, got {:?}", other.map(|_| ())),
    }
}
