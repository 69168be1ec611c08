use tracing::debug;

use crate::catalog::{Track, TrackId};
use crate::error::CartError;
use crate::notice::{Notice, NoticeSink};

use super::model::{Cart, CartItem};

/// Cart operations that report their outcome as notices.
pub struct CartController {
    cart: Cart,
    /// Suppress notices for removals of absent ids and clears of an empty cart.
    quiet_noops: bool,
}

impl CartController {
    pub fn new(quiet_noops: bool) -> Self {
        Self {
            cart: Cart::new(),
            quiet_noops,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn total_price(&self) -> u64 {
        self.cart.total_price()
    }

    pub fn item_count(&self) -> usize {
        self.cart.item_count()
    }

    /// Add `track`. A duplicate leaves the cart untouched and posts a
    /// destructive notice.
    pub fn add_to_cart(
        &mut self,
        track: &Track,
        sink: &mut impl NoticeSink,
    ) -> Result<(), CartError> {
        match self.cart.add(track) {
            Ok(item) => {
                let id = item.id;
                debug!(id = %id, count = self.cart.item_count(), "added to cart");
                sink.notify(Notice::new(
                    "Добавлено в корзину",
                    format!("\"{}\" добавлена в корзину", track.title),
                ));
                Ok(())
            }
            Err(e) => {
                debug!("declined add: {e}");
                sink.notify(Notice::destructive(
                    "Уже в корзине",
                    "Эта композиция уже добавлена в корзину",
                ));
                Err(e)
            }
        }
    }

    /// Remove the item with `id`. Returns the removed item, if any.
    pub fn remove_from_cart(
        &mut self,
        id: TrackId,
        sink: &mut impl NoticeSink,
    ) -> Option<CartItem> {
        let removed = self.cart.remove(id);
        debug!(id = %id, removed = removed.is_some(), "remove from cart");
        if removed.is_some() || !self.quiet_noops {
            sink.notify(Notice::new("Удалено", "Композиция удалена из корзины"));
        }
        removed
    }

    /// Empty the cart unconditionally. Returns how many items were removed.
    pub fn clear_cart(&mut self, sink: &mut impl NoticeSink) -> usize {
        let n = self.cart.clear();
        debug!(removed = n, "cart cleared");
        if n > 0 || !self.quiet_noops {
            sink.notify(Notice::new(
                "Корзина очищена",
                "Все композиции удалены из корзины",
            ));
        }
        n
    }
}
