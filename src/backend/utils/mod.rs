//! Utility modules for the application backend.
//!
//! Configuration, path management, routing and embedded styles.

/// Application configuration and environment overrides.
pub mod config;
/// Embedded stylesheets.
pub mod css;
/// Path utilities for the application directory.
pub mod paths;
/// Application routing system.
pub mod route;
