//! Application module: exposes the top-level controller used by the TUI and
//! runtime.
//!
//! The `App` model lives in `app::model` and holds the catalog, the playback
//! slot, the cart and the notices.

mod model;

pub use model::*;
