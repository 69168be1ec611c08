//! User-visible notices ("toasts").
//!
//! Controllers report outcomes through a `NoticeSink`; the runtime renders
//! whatever is still live in `Toasts`.

mod model;

pub use model::*;
