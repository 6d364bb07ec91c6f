//! Backend of the application.

pub mod services;
pub mod supabase;
pub mod utils;
