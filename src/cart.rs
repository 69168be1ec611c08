//! Cart module: the session's line items and the controller that reports
//! cart changes as notices.
//!
//! Nothing here is persisted; the cart lives as long as the process.

mod controller;
mod model;

pub use controller::*;
pub use model::*;

#[cfg(test)]
mod tests;
