mod app;
mod audio;
mod cart;
mod catalog;
mod config;
mod error;
mod notice;
mod playback;
mod runtime;
mod ui;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
