//! Mount sequence of the dashboard view.

use super::credits::load_credit_balance;
use super::gate::{Destination, resolve_basic_access};
use crate::backend::supabase::{AuthBackend, User};
use futures_util::StreamExt;

/// What the view has to apply while the dashboard is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardUpdate {
    /// The gate passed; the content may render.
    Admitted(User),
    Credits(i64),
    /// A refresh or re-sign-in replaced the session.
    SessionChanged(User),
    Redirect(Destination),
}

/// Runs the dashboard from mount until it leaves the view.
///
/// The subscription is taken before the gate resolves so a sign-out during
/// resolution is still seen; it is released when this future ends or is
/// dropped. Credits are queried only once a session is confirmed. While
/// `signing_out` reports true, a lost session is left to the sign-out flow.
pub async fn run_dashboard<B, S, F>(backend: &B, signing_out: S, mut apply: F)
where
    B: AuthBackend + ?Sized,
    S: Fn() -> bool,
    F: FnMut(DashboardUpdate),
{
    let mut changes = backend.subscribe();

    let state = resolve_basic_access(backend).await;
    if let Some(destination) = state.redirect() {
        apply(DashboardUpdate::Redirect(destination));
        return;
    }
    let Some(session) = state.session() else {
        return;
    };

    apply(DashboardUpdate::Admitted(session.user.clone()));
    apply(DashboardUpdate::Credits(
        load_credit_balance(backend, session).await,
    ));

    while let Some(event) = changes.next().await {
        if signing_out() {
            log::debug!("Ignoring session change during sign-out");
            break;
        }
        match event.session {
            Some(session) => apply(DashboardUpdate::SessionChanged(session.user)),
            None => {
                apply(DashboardUpdate::Redirect(Destination::Auth));
                break;
            }
        }
    }
}
