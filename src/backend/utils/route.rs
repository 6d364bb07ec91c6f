//! Application routing system.

use crate::backend::services::Destination;
use crate::frontend::pages::{Admin, Auth, Dashboard, Index, NotFound};

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Public landing page.
    #[route("/")]
    Index {},
    /// Sign-in and sign-up page.
    #[route("/auth")]
    Auth {},
    /// Baseline protected view.
    #[route("/dashboard")]
    Dashboard {},
    /// Elevated view, admins only.
    #[route("/admin")]
    Admin {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Landing => Self::Index {},
            Destination::Auth => Self::Auth {},
            Destination::Dashboard => Self::Dashboard {},
            Destination::Admin => Self::Admin {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn destinations_map_to_paths() {
        assert_eq!(Route::from(Destination::Landing).to_string(), "/");
        assert_eq!(Route::from(Destination::Auth).to_string(), "/auth");
        assert_eq!(Route::from(Destination::Dashboard).to_string(), "/dashboard");
        assert_eq!(Route::from(Destination::Admin).to_string(), "/admin");
    }

    #[test]
    fn unknown_paths_fall_through() {
        let route = Route::from_str("/nowhere/else").unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
