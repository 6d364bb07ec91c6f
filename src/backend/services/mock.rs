//! In-memory [`AuthBackend`] for tests.

use crate::backend::supabase::models::User;
use crate::backend::supabase::{
    AuthBackend, RoleAssignment, Session, SessionEvent, SessionEvents, SessionSubscription,
};
use crate::utils::{Error, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub enum RoleReply {
    Granted,
    Missing,
    Fails,
}

pub struct MockBackend {
    session: Mutex<Option<Session>>,
    session_fails: bool,
    role_reply: RoleReply,
    credits: Option<i64>,
    sign_out_fails: bool,
    pub events: SessionEvents,
    pub session_calls: AtomicUsize,
    pub role_calls: AtomicUsize,
    pub credit_calls: AtomicUsize,
    pub sign_out_calls: AtomicUsize,
}

pub fn session(user_id: &str) -> Session {
    Session {
        access_token: format!("token-{user_id}"),
        refresh_token: "refresh".to_string(),
        token_type: "bearer".to_string(),
        expires_in: Some(3600),
        expires_at: None,
        user: User {
            id: user_id.to_string(),
            email: Some(format!("{user_id}@example.com")),
            phone: None,
            created_at: None,
        },
    }
}

impl MockBackend {
    pub fn signed_out() -> Self {
        Self {
            session: Mutex::new(None),
            session_fails: false,
            role_reply: RoleReply::Missing,
            credits: Some(0),
            sign_out_fails: false,
            events: SessionEvents::new(),
            session_calls: AtomicUsize::new(0),
            role_calls: AtomicUsize::new(0),
            credit_calls: AtomicUsize::new(0),
            sign_out_calls: AtomicUsize::new(0),
        }
    }

    pub fn signed_in(user_id: &str) -> Self {
        let backend = Self::signed_out();
        *backend.session.lock().unwrap() = Some(session(user_id));
        backend
    }

    pub fn with_role(mut self, reply: RoleReply) -> Self {
        self.role_reply = reply;
        self
    }

    /// `None` makes the credit query fail.
    pub fn with_credits(mut self, credits: Option<i64>) -> Self {
        self.credits = credits;
        self
    }

    pub fn with_failing_session(mut self) -> Self {
        self.session_fails = true;
        self
    }

    pub fn with_failing_sign_out(mut self) -> Self {
        self.sign_out_fails = true;
        self
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthBackend for MockBackend {
    async fn get_session(&self) -> Result<Option<Session>> {
        self.session_calls.fetch_add(1, Ordering::SeqCst);
        if self.session_fails {
            return Err(Error::new("auth service unreachable"));
        }
        Ok(self.session.lock().unwrap().clone())
    }

    fn subscribe(&self) -> SessionSubscription {
        self.events.subscribe()
    }

    async fn sign_out(&self) -> Result<()> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        let had_session = self.session.lock().unwrap().take().is_some();
        if had_session {
            self.events.emit(SessionEvent::signed_out());
        }
        if self.sign_out_fails {
            return Err(Error::status(500, "logout failed"));
        }
        Ok(())
    }

    async fn query_role_assignment(
        &self,
        _session: &Session,
        role: &str,
    ) -> Result<Option<RoleAssignment>> {
        self.role_calls.fetch_add(1, Ordering::SeqCst);
        match self.role_reply {
            RoleReply::Granted => Ok(Some(RoleAssignment {
                role: role.to_string(),
            })),
            RoleReply::Missing => Ok(None),
            RoleReply::Fails => Err(Error::status(503, "role lookup unavailable")),
        }
    }

    async fn query_credit_balance(&self, _session: &Session) -> Result<i64> {
        self.credit_calls.fetch_add(1, Ordering::SeqCst);
        self.credits
            .ok_or_else(|| Error::invalid("No credit row for user"))
    }
}
