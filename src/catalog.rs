//! Catalog module: the static track list, category filter and cursor.
//!
//! Tracks are built once at startup from compiled-in sample data in
//! `catalog::data` and never change during a session.

mod data;
mod model;

pub use data::*;
pub use model::*;
