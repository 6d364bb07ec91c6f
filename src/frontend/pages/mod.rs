//! Routed pages.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod index;
pub mod not_found;

pub use admin::Admin;
pub use auth::Auth;
pub use dashboard::Dashboard;
pub use index::Index;
pub use not_found::NotFound;
