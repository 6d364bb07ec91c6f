//! Session and role gate for protected views.
//!
//! Each view mount resolves the gate exactly once, starting from
//! [`GateState::Resolving`]. The decision functions are pure; the `resolve_*`
//! functions add the remote queries around them.

use crate::backend::supabase::{AuthBackend, RoleAssignment, Session};
use crate::utils::Result;

/// Role required by the admin view.
pub const ADMIN_ROLE: &str = "admin";

/// Where a gate sends the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Landing,
    Auth,
    Dashboard,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Resolving,
    /// No session: go to the sign-in page.
    UnauthenticatedRedirect,
    /// Signed in; enough for baseline views.
    AuthenticatedBaseline(Session),
    /// Signed in and holding the required role.
    Authorized(Session),
    /// Signed in but the role check failed or came back empty.
    DeniedRedirect,
}

impl GateState {
    pub fn redirect(&self) -> Option<Destination> {
        match self {
            Self::UnauthenticatedRedirect => Some(Destination::Auth),
            Self::DeniedRedirect => Some(Destination::Dashboard),
            _ => None,
        }
    }

    /// Session of a visitor allowed to see the content.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::AuthenticatedBaseline(session) | Self::Authorized(session) => Some(session),
            _ => None,
        }
    }

    /// State name without the session, safe to log.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Resolving => "resolving",
            Self::UnauthenticatedRedirect => "unauthenticated",
            Self::AuthenticatedBaseline(_) => "authenticated",
            Self::Authorized(_) => "authorized",
            Self::DeniedRedirect => "denied",
        }
    }

    pub const fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving)
    }

    /// True when the visitor must be told access was denied.
    pub const fn is_denied(&self) -> bool {
        matches!(self, Self::DeniedRedirect)
    }
}

/// Outcome of the inverse gate on public pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublicState {
    #[default]
    Resolving,
    /// Visitor is signed out; show the public page.
    Show,
    /// Visitor already has a session; skip the public page.
    Forward(Destination),
}

pub fn decide_basic(session: Option<Session>) -> GateState {
    match session {
        Some(session) => GateState::AuthenticatedBaseline(session),
        None => GateState::UnauthenticatedRedirect,
    }
}

/// Lookup failures and missing rows are the same denial.
pub fn decide_elevated(session: Session, lookup: Result<Option<RoleAssignment>>) -> GateState {
    match lookup {
        Ok(Some(_)) => GateState::Authorized(session),
        Ok(None) => GateState::DeniedRedirect,
        Err(e) => {
            log::warn!("Role check for {} failed: {e}", session.user_id());
            GateState::DeniedRedirect
        }
    }
}

pub fn decide_public(session: Option<&Session>) -> PublicState {
    match session {
        Some(_) => PublicState::Forward(Destination::Dashboard),
        None => PublicState::Show,
    }
}

/// An unreachable auth service reads as "signed out".
async fn current_session<B: AuthBackend + ?Sized>(backend: &B) -> Option<Session> {
    match backend.get_session().await {
        Ok(session) => session,
        Err(e) => {
            log::error!("Failed to resolve session: {e}");
            None
        }
    }
}

/// Gate for views open to any signed-in user.
pub async fn resolve_basic_access<B: AuthBackend + ?Sized>(backend: &B) -> GateState {
    let state = decide_basic(current_session(backend).await);
    log::debug!("Basic gate resolved: {}", state.name());
    state
}

/// Gate for views that also require `role`. The role is queried once and
/// only when a session exists.
pub async fn resolve_elevated_access<B: AuthBackend + ?Sized>(
    backend: &B,
    role: &str,
) -> GateState {
    let session = match resolve_basic_access(backend).await {
        GateState::AuthenticatedBaseline(session) => session,
        other => return other,
    };

    let lookup = backend.query_role_assignment(&session, role).await;
    let state = decide_elevated(session, lookup);
    log::debug!("Elevated gate for role {role} resolved: {}", state.name());
    state
}

/// Inverse gate for the landing and sign-in pages.
pub async fn resolve_public_access<B: AuthBackend + ?Sized>(backend: &B) -> PublicState {
    decide_public(current_session(backend).await.as_ref())
}

/// Invalidates the session and always ends on the landing page.
pub async fn sign_out<B: AuthBackend + ?Sized>(backend: &B) -> Destination {
    if let Err(e) = backend.sign_out().await {
        log::warn!("Sign-out did not complete cleanly: {e}");
    }
    Destination::Landing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::services::mock::{MockBackend, RoleReply, session};
    use crate::utils::Error;

    #[tokio::test]
    async fn elevated_without_session_redirects_to_auth_without_role_query() {
        let backend = MockBackend::signed_out().with_role(RoleReply::Granted);

        let state = resolve_elevated_access(&backend, ADMIN_ROLE).await;

        assert_eq!(state, GateState::UnauthenticatedRedirect);
        assert_eq!(state.redirect(), Some(Destination::Auth));
        assert_eq!(MockBackend::count(&backend.role_calls), 0);
    }

    #[tokio::test]
    async fn elevated_without_role_is_denied_after_one_query() {
        let backend = MockBackend::signed_in("u1").with_role(RoleReply::Missing);

        let state = resolve_elevated_access(&backend, ADMIN_ROLE).await;

        assert!(state.is_denied());
        assert_eq!(state.redirect(), Some(Destination::Dashboard));
        assert!(state.session().is_none());
        assert_eq!(MockBackend::count(&backend.role_calls), 1);
    }

    #[tokio::test]
    async fn elevated_role_query_error_is_denied() {
        let backend = MockBackend::signed_in("u1").with_role(RoleReply::Fails);

        let state = resolve_elevated_access(&backend, ADMIN_ROLE).await;

        assert_eq!(state, GateState::DeniedRedirect);
        assert_eq!(MockBackend::count(&backend.role_calls), 1);
    }

    #[tokio::test]
    async fn elevated_with_role_is_authorized() {
        let backend = MockBackend::signed_in("u1").with_role(RoleReply::Granted);

        let state = resolve_elevated_access(&backend, ADMIN_ROLE).await;

        assert_eq!(state, GateState::Authorized(session("u1")));
        assert_eq!(state.redirect(), None);
        assert_eq!(MockBackend::count(&backend.session_calls), 1);
    }

    #[tokio::test]
    async fn basic_gate_needs_only_a_session() {
        let backend = MockBackend::signed_in("u2");

        let state = resolve_basic_access(&backend).await;

        assert_eq!(state.session().map(Session::user_id), Some("u2"));
        assert_eq!(state.redirect(), None);
        assert_eq!(MockBackend::count(&backend.role_calls), 0);
    }

    #[tokio::test]
    async fn unreachable_auth_service_reads_as_signed_out() {
        let backend = MockBackend::signed_in("u1").with_failing_session();

        assert_eq!(
            resolve_basic_access(&backend).await,
            GateState::UnauthenticatedRedirect
        );
        assert_eq!(resolve_public_access(&backend).await, PublicState::Show);
    }

    #[tokio::test]
    async fn landing_forwards_signed_in_visitors() {
        let signed_in = MockBackend::signed_in("u1");
        let signed_out = MockBackend::signed_out();

        assert_eq!(
            resolve_public_access(&signed_in).await,
            PublicState::Forward(Destination::Dashboard)
        );
        assert_eq!(resolve_public_access(&signed_out).await, PublicState::Show);
    }

    #[tokio::test]
    async fn repeated_sign_out_always_lands_on_landing() {
        let backend = MockBackend::signed_in("u1").with_failing_sign_out();

        for _ in 0..3 {
            assert_eq!(sign_out(&backend).await, Destination::Landing);
        }
        assert_eq!(MockBackend::count(&backend.sign_out_calls), 3);
        assert_eq!(resolve_basic_access(&backend).await, GateState::UnauthenticatedRedirect);
    }

    #[test]
    fn decisions_are_pure() {
        assert_eq!(decide_basic(None), GateState::UnauthenticatedRedirect);
        assert_eq!(
            decide_elevated(session("u1"), Err(Error::new("timeout"))),
            GateState::DeniedRedirect
        );
        assert_eq!(decide_public(None), PublicState::Show);
        assert!(GateState::default().is_resolving());
        assert_eq!(GateState::Resolving.redirect(), None);
    }
}
