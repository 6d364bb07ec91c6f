//! UI components and layouts.

pub mod common;
pub mod toaster;

pub use toaster::Toaster;
