use std::sync::mpsc::Receiver;
use std::time::Duration;

use tracing::{info, warn};

use crate::app::App;
use crate::audio::{AudioEvent, AudioPlayer};
use crate::cart::CartController;
use crate::catalog::{Catalog, sample_tracks};
use crate::config::Settings;
use crate::notice::Toasts;

mod event_loop;
mod logging;
mod settings;
mod terminal;

pub fn run() -> anyhow::Result<()> {
    let settings::StartupSettings { settings, fallback } = settings::load_settings();
    if let Some(path) = logging::init(&settings.log) {
        info!(log = %path.display(), "encore starting");
    }
    if let Some(reason) = fallback {
        warn!("{reason}, running with default settings");
    }

    let (mut app, events) = build_app(&settings);

    let (mut terminal, mut guard) = terminal::setup()?;
    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &events);
    guard.restore();

    // Dropping the app releases the audio handle and joins the audio thread.
    drop(app);
    info!("encore stopped");

    run_result
}

fn build_app(settings: &Settings) -> (App<AudioPlayer>, Receiver<AudioEvent>) {
    let mut catalog = Catalog::new(sample_tracks());
    catalog.set_category_filter(settings.catalog.default_category.into());
    info!(tracks = catalog.tracks().len(), filter = ?catalog.filter(), "catalog ready");

    let (audio, events) = AudioPlayer::new(settings.audio.clone());
    let cart = CartController::new(settings.cart.quiet_noops);
    let notices = Toasts::new(
        Duration::from_millis(settings.ui.notice_ttl_ms),
        settings.ui.max_notices,
    );

    (App::new(catalog, audio, cart, notices), events)
}
