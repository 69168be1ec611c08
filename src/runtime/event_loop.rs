use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

use crate::app::{App, CartPanelAction, View};
use crate::audio::{AudioEvent, AudioOutput};
use crate::catalog::CategoryFilter;
use crate::config;
use crate::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main terminal event loop: expires notices, applies audio events, draws and
/// dispatches keys. Returns `Ok(())` when the user quits.
pub fn run<A: AudioOutput>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<A>,
    events: &Receiver<AudioEvent>,
) -> anyhow::Result<()> {
    let mut audio_thread_gone = false;
    loop {
        app.notices.expire(Instant::now());

        if !audio_thread_gone {
            audio_thread_gone = drain_audio_events(app, events);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app) {
                    debug!("quit requested");
                    return Ok(());
                }
            }
        }
    }
}

/// Apply every pending audio event. Returns `true` once the audio thread has
/// hung up.
fn drain_audio_events<A: AudioOutput>(app: &mut App<A>, events: &Receiver<AudioEvent>) -> bool {
    loop {
        match events.try_recv() {
            Ok(ev) => app.handle_audio_event(ev),
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                warn!("audio thread disconnected");
                return true;
            }
        }
    }
}

/// Dispatch one key press according to the current view. Returns `true` when
/// the app should exit.
pub(crate) fn handle_key_event<A: AudioOutput>(key: KeyEvent, app: &mut App<A>) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    if key.code == KeyCode::Char('q') {
        return true;
    }

    match app.view {
        View::Catalog => handle_catalog_key(key, app),
        View::Cart => handle_cart_key(key, app),
        View::About => match key.code {
            KeyCode::Esc | KeyCode::Char('i') => app.close_overlay(),
            _ => {}
        },
    }
    false
}

fn handle_catalog_key<A: AudioOutput>(key: KeyEvent, app: &mut App<A>) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.catalog.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.catalog.select_prev(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => app.catalog.next_filter(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => app.catalog.prev_filter(),
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            if let Some(filter) = CategoryFilter::TABS.get(idx) {
                app.set_category_filter(*filter);
            }
        }
        KeyCode::Enter | KeyCode::Char('b') => app.buy_selected(),
        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_selected(),
        KeyCode::Char('c') => app.open_cart(),
        KeyCode::Char('i') => app.toggle_about(),
        _ => {}
    }
}

fn handle_cart_key<A: AudioOutput>(key: KeyEvent, app: &mut App<A>) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.cart_cursor_next(),
        KeyCode::Char('k') | KeyCode::Up => app.cart_cursor_prev(),
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.cart_item_at_cursor() {
                app.apply_cart_action(CartPanelAction::Remove(id));
            }
        }
        KeyCode::Char('C') => app.apply_cart_action(CartPanelAction::Clear),
        KeyCode::Esc | KeyCode::Char('c') => app.close_overlay(),
        _ => {}
    }
}
