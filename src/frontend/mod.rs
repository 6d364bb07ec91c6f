//! Frontend of the application: pages, components and UI services.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
