//! Error types shared by the cart, player and audio subsystems.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::TrackId;

/// Cart errors. Declined adds are expected and surfaced as notices.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The track is already in the cart; a track can only be bought once.
    #[error("track {0} is already in the cart")]
    AlreadyInCart(TrackId),
}

/// Errors returned by the playback controller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    /// The track has no playable media reference.
    #[error("track {0} has no preview")]
    NoPreview(TrackId),
}

/// Errors raised inside the audio thread while preparing a source.
#[derive(Debug, Error)]
pub enum AudioError {
    /// No output device could be opened.
    #[error("нет аудиоустройства: {0}")]
    Device(String),

    /// Local media file could not be opened.
    #[error("не удалось открыть {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes could not be decoded as audio.
    #[error("не удалось декодировать звук: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    /// Remote media could not be fetched.
    #[error("не удалось загрузить превью: {0}")]
    Fetch(#[from] reqwest::Error),
}
