//! Application model: `App` owns all session state.
//!
//! The catalog, the playback controller, the cart and the notice queue live
//! here. Presentation code only sees snapshots such as `CartPanelProps`.

use tracing::{debug, warn};

use crate::audio::{AudioEvent, AudioOutput};
use crate::cart::{CartController, CartItem};
use crate::catalog::{Catalog, CategoryFilter, Track, TrackId};
use crate::error::PlayerError;
use crate::notice::{Notice, NoticeSink, Toasts};
use crate::playback::{PlaybackSlot, Player};

/// Which screen has the keyboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Catalog,
    /// The cart slide-over is open on top of the catalog.
    Cart,
    /// Blog posts and contact channels.
    About,
}

/// The two things the cart panel can ask for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CartPanelAction {
    Remove(TrackId),
    Clear,
}

/// Immutable view of the cart handed to the panel.
pub struct CartPanelProps<'a> {
    pub items: &'a [CartItem],
    pub total: u64,
    pub cursor: usize,
}

/// The main application model.
pub struct App<A: AudioOutput> {
    pub catalog: Catalog,
    pub player: Player<A>,
    pub cart: CartController,
    pub notices: Toasts,
    pub view: View,
    cart_cursor: usize,
}

impl<A: AudioOutput> App<A> {
    pub fn new(catalog: Catalog, audio: A, cart: CartController, notices: Toasts) -> Self {
        Self {
            catalog,
            player: Player::new(audio),
            cart,
            notices,
            view: View::Catalog,
            cart_cursor: 0,
        }
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        debug!(?filter, "category filter");
        self.catalog.set_category_filter(filter);
    }

    /// Add the track under the cursor to the cart.
    pub fn buy_selected(&mut self) {
        let Some(id) = self.catalog.selected_id() else {
            return;
        };
        self.buy(id);
    }

    /// Add track `id` to the cart, posting the outcome as a notice.
    pub fn buy(&mut self, id: TrackId) {
        let Some(track) = self.catalog.track(id) else {
            return;
        };
        // Declined adds were already reported to the user.
        let _ = self.cart.add_to_cart(track, &mut self.notices);
    }

    /// Play or pause the track under the cursor.
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.catalog.selected_id() else {
            return;
        };
        self.toggle_play_pause(id);
    }

    pub fn toggle_play_pause(&mut self, id: TrackId) {
        let Some(track) = self.catalog.track(id) else {
            return;
        };
        if let Err(PlayerError::NoPreview(_)) = self.player.toggle_play_pause(track) {
            self.notices.notify(Notice::destructive(
                "Превью недоступно",
                format!("Для \"{}\" нет аудиофрагмента", track.title),
            ));
        }
    }

    /// Apply a notification from the audio thread.
    pub fn handle_audio_event(&mut self, event: AudioEvent) {
        match event {
            AudioEvent::Ended(token) => {
                self.player.on_playback_ended(token);
            }
            AudioEvent::Failed { token, reason } => {
                if self.player.on_playback_failed(token) {
                    warn!(%token, "preview failed: {reason}");
                    self.notices
                        .notify(Notice::destructive("Не удалось воспроизвести", reason));
                }
            }
            AudioEvent::Unavailable(reason) => {
                warn!("audio unavailable: {reason}");
                self.notices.notify(Notice::destructive(
                    "Звук недоступен",
                    "Аудиоустройство не найдено",
                ));
            }
        }
    }

    pub fn slot(&self) -> PlaybackSlot {
        self.player.slot()
    }

    /// The track currently loaded on the audio handle, if any.
    pub fn now_playing(&self) -> Option<&Track> {
        self.player.slot().track().and_then(|id| self.catalog.track(id))
    }

    pub fn open_cart(&mut self) {
        self.view = View::Cart;
        self.clamp_cart_cursor();
    }

    pub fn toggle_about(&mut self) {
        self.view = if self.view == View::About {
            View::Catalog
        } else {
            View::About
        };
    }

    pub fn close_overlay(&mut self) {
        self.view = View::Catalog;
    }

    pub fn cart_cursor_next(&mut self) {
        let n = self.cart.item_count();
        if n > 0 {
            self.cart_cursor = (self.cart_cursor + 1) % n;
        }
    }

    pub fn cart_cursor_prev(&mut self) {
        let n = self.cart.item_count();
        if n > 0 {
            self.cart_cursor = (self.cart_cursor + n - 1) % n;
        }
    }

    /// The id of the cart item under the panel cursor.
    pub fn cart_item_at_cursor(&self) -> Option<TrackId> {
        self.cart.items().get(self.cart_cursor).map(|i| i.id)
    }

    pub fn cart_snapshot(&self) -> CartPanelProps<'_> {
        CartPanelProps {
            items: self.cart.items(),
            total: self.cart.total_price(),
            cursor: self.cart_cursor,
        }
    }

    pub fn apply_cart_action(&mut self, action: CartPanelAction) {
        match action {
            CartPanelAction::Remove(id) => {
                self.cart.remove_from_cart(id, &mut self.notices);
            }
            CartPanelAction::Clear => {
                self.cart.clear_cart(&mut self.notices);
            }
        }
        self.clamp_cart_cursor();
    }

    fn clamp_cart_cursor(&mut self) {
        let n = self.cart.item_count();
        if self.cart_cursor >= n {
            self.cart_cursor = n.saturating_sub(1);
        }
    }
}
