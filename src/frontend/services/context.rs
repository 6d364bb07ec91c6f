//! Application-wide handles shared through the Dioxus context.

use crate::backend::supabase::SupabaseClient;
use crate::backend::utils::config::AppConfig;
use dioxus::prelude::*;
use std::sync::Arc;

/// Backend client and configuration. Cheap to clone.
#[derive(Clone)]
pub struct AppContext {
    pub client: SupabaseClient,
    pub config: Arc<AppConfig>,
}

impl AppContext {
    pub fn new(client: SupabaseClient, config: AppConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}
