//! Utilities for creating `rodio` sinks from `MediaRef` values.
//!
//! Local files are decoded straight from disk. Remote previews are fetched
//! into memory first so the decoder can seek.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink};
use tracing::debug;

use crate::catalog::MediaRef;
use crate::error::AudioError;

/// Create a paused `Sink` for `media`, positioned at its start.
pub(super) fn create_sink(
    stream: &OutputStream,
    media: &MediaRef,
    volume: f32,
    fetch_timeout: Duration,
) -> Result<Sink, AudioError> {
    let sink = Sink::connect_new(stream.mixer());
    sink.pause();
    sink.set_volume(volume);

    match media {
        MediaRef::File(path) => {
            let file = open_file(path)?;
            sink.append(Decoder::new(file)?);
        }
        MediaRef::Url(url) => {
            let bytes = fetch(url.as_str(), fetch_timeout)?;
            sink.append(Decoder::new(Cursor::new(bytes))?);
        }
    }

    Ok(sink)
}

pub(super) fn open_file(path: &std::path::Path) -> Result<BufReader<File>, AudioError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })
}

fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>, AudioError> {
    debug!(%url, "fetching preview");
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let bytes = client.get(url).send()?.error_for_status()?.bytes()?;
    debug!(%url, len = bytes.len(), "preview fetched");
    Ok(bytes.to_vec())
}
