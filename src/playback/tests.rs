use super::*;
use crate::audio::LoadToken;
use crate::audio::fake::{Call, FakeAudio};
use crate::catalog::{Category, MediaRef, Track, TrackId};
use crate::error::PlayerError;

fn track(id: u32) -> Track {
    Track {
        id: TrackId(id),
        title: format!("Track {id}"),
        category: Category::Choral,
        duration: "3:00".into(),
        price: 100,
        description: String::new(),
        media: MediaRef::parse(&format!("/tmp/previews/{id}.mp3")),
    }
}

fn loaded(id: u32, playing: bool) -> PlaybackSlot {
    PlaybackSlot::Loaded {
        track: TrackId(id),
        playing,
    }
}

#[test]
fn toggle_scenario_walks_the_state_machine() {
    let a = track(1);
    let b = track(2);
    let mut player = Player::new(FakeAudio::default());
    assert_eq!(player.slot(), PlaybackSlot::Idle);

    assert_eq!(player.toggle_play_pause(&a), Ok(PlaybackChange::Started));
    assert_eq!(player.slot(), loaded(1, true));
    assert!(player.is_playing(TrackId(1)));

    assert_eq!(player.toggle_play_pause(&a), Ok(PlaybackChange::Paused));
    assert_eq!(player.slot(), loaded(1, false));
    assert!(!player.is_playing(TrackId(1)));

    assert_eq!(player.toggle_play_pause(&b), Ok(PlaybackChange::Started));
    assert_eq!(player.slot(), loaded(2, true));
    assert!(!player.is_playing(TrackId(1)));

    let token = player.audio().last_token();
    assert!(player.on_playback_ended(token));
    assert_eq!(player.slot(), PlaybackSlot::Idle);
}

#[test]
fn resume_does_not_reload_source() {
    let a = track(1);
    let mut player = Player::new(FakeAudio::default());

    player.toggle_play_pause(&a).unwrap();
    player.toggle_play_pause(&a).unwrap();
    assert_eq!(player.toggle_play_pause(&a), Ok(PlaybackChange::Resumed));
    assert_eq!(player.slot(), loaded(1, true));

    let media = a.media.clone().unwrap();
    assert_eq!(
        player.audio().calls,
        vec![
            Call::Load(media, LoadToken(1)),
            Call::Play,
            Call::Pause,
            Call::Play,
        ]
    );
}

#[test]
fn switching_tracks_loads_new_source_once() {
    let mut player = Player::new(FakeAudio::default());
    player.toggle_play_pause(&track(1)).unwrap();
    player.toggle_play_pause(&track(1)).unwrap();
    player.toggle_play_pause(&track(2)).unwrap();

    let loads: Vec<&Call> = player
        .audio()
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Load(..)))
        .collect();
    assert_eq!(loads.len(), 2);
    assert_eq!(player.audio().calls.last(), Some(&Call::Play));
}

#[test]
fn stale_end_events_are_ignored() {
    let mut player = Player::new(FakeAudio::default());
    player.toggle_play_pause(&track(1)).unwrap();
    let first = player.audio().last_token();
    player.toggle_play_pause(&track(2)).unwrap();

    assert!(!player.on_playback_ended(first));
    assert_eq!(player.slot(), loaded(2, true));
}

#[test]
fn end_while_idle_is_ignored() {
    let mut player = Player::new(FakeAudio::default());
    assert!(!player.on_playback_ended(LoadToken(7)));
    assert_eq!(player.slot(), PlaybackSlot::Idle);
}

#[test]
fn replaying_after_natural_end_restarts() {
    let a = track(1);
    let mut player = Player::new(FakeAudio::default());
    player.toggle_play_pause(&a).unwrap();
    let token = player.audio().last_token();
    player.on_playback_ended(token);

    assert_eq!(player.toggle_play_pause(&a), Ok(PlaybackChange::Started));
    assert_eq!(player.slot(), loaded(1, true));
}

#[test]
fn failed_load_clears_slot() {
    let mut player = Player::new(FakeAudio::default());
    player.toggle_play_pause(&track(3)).unwrap();
    let token = player.audio().last_token();

    assert!(player.on_playback_failed(token));
    assert_eq!(player.slot(), PlaybackSlot::Idle);
}

#[test]
fn track_without_media_is_declined_and_slot_unchanged() {
    let mut silent = track(4);
    silent.media = None;
    let mut player = Player::new(FakeAudio::default());
    player.toggle_play_pause(&track(1)).unwrap();

    assert_eq!(
        player.toggle_play_pause(&silent),
        Err(PlayerError::NoPreview(TrackId(4)))
    );
    assert_eq!(player.slot(), loaded(1, true));
}
