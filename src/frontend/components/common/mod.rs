//! Common reusable components.

pub mod card;
pub mod header;
pub mod loader;
pub mod logo;

pub use card::Card;
pub use header::Header;
pub use loader::Loader;
pub use logo::Logo;
