//! Frontend services shared by the pages.

pub mod context;
pub mod messages;
pub mod toasts;

pub use context::{AppContext, use_app};
pub use toasts::{ToastLevel, Toasts, use_toasts};
