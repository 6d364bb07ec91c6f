//! Remote backend-as-a-service: authentication, sessions and the
//! `user_roles` and `credits` tables.

pub mod client;
pub mod events;
pub mod models;
pub mod store;

pub use client::SupabaseClient;
pub use events::{SessionEvent, SessionEventKind, SessionEvents, SessionSubscription};
pub use models::{RoleAssignment, Session, User};
pub use store::SessionStore;

use crate::utils::Result;
use async_trait::async_trait;

/// Everything the views need from the remote service.
///
/// Queries that act on behalf of a user take the [`Session`] explicitly,
/// so no call depends on ambient client state.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Current session, or `None` when signed out.
    async fn get_session(&self) -> Result<Option<Session>>;

    /// Stream of session changes for as long as the handle lives.
    fn subscribe(&self) -> SessionSubscription;

    /// Invalidates the current session.
    async fn sign_out(&self) -> Result<()>;

    /// The `(user, role)` row, `None` when the user lacks the role.
    async fn query_role_assignment(
        &self,
        session: &Session,
        role: &str,
    ) -> Result<Option<RoleAssignment>>;

    async fn query_credit_balance(&self, session: &Session) -> Result<i64>;
}
