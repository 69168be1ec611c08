use crate::catalog::{Track, TrackId};
use crate::error::CartError;

/// A cart-scoped projection of a `Track`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartItem {
    pub id: TrackId,
    pub title: String,
    pub price: u32,
    /// Display label of the track's category, not the raw code.
    pub category: &'static str,
}

impl From<&Track> for CartItem {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id,
            title: track.title.clone(),
            price: track.price,
            category: track.category.label(),
        }
    }
}

/// Ordered line items. Ids are unique; insertion order is kept.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// Append `track` unless it is already in the cart.
    pub fn add(&mut self, track: &Track) -> Result<&CartItem, CartError> {
        if self.contains(track.id) {
            return Err(CartError::AlreadyInCart(track.id));
        }
        self.items.push(CartItem::from(track));
        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Remove the item with `id`, returning it if it was present.
    pub fn remove(&mut self, id: TrackId) -> Option<CartItem> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Empty the cart. Returns how many items were removed.
    pub fn clear(&mut self) -> usize {
        let n = self.items.len();
        self.items.clear();
        n
    }

    /// Sum of all item prices, recomputed on every call.
    pub fn total_price(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.price)).sum()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
