//! Session change notifications.
//!
//! Every subscriber owns a [`SessionSubscription`]. Dropping it removes the
//! subscriber from the registry, so a view that goes away (or whose setup
//! task is cancelled) stops receiving events without any explicit cleanup.

use super::models::Session;
use futures_util::Stream;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEventKind {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEvent {
    pub kind: SessionEventKind,
    pub session: Option<Session>,
}

impl SessionEvent {
    pub fn signed_in(session: Session) -> Self {
        Self {
            kind: SessionEventKind::SignedIn,
            session: Some(session),
        }
    }

    pub fn refreshed(session: Session) -> Self {
        Self {
            kind: SessionEventKind::TokenRefreshed,
            session: Some(session),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            kind: SessionEventKind::SignedOut,
            session: None,
        }
    }
}

type Subscribers = Arc<Mutex<HashMap<u64, mpsc::UnboundedSender<SessionEvent>>>>;

/// Fan-out point for session events.
#[derive(Clone, Default)]
pub struct SessionEvents {
    subscribers: Subscribers,
    next_id: Arc<AtomicU64>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> SessionSubscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.insert(id, tx);
        }
        log::debug!("Session subscriber {id} registered");
        SessionSubscription {
            id,
            receiver: rx,
            subscribers: Arc::clone(&self.subscribers),
        }
    }

    /// Delivers `event` to every live subscriber, pruning closed ones.
    pub fn emit(&self, event: SessionEvent) {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.retain(|_, tx| tx.send(event.clone()).is_ok());
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|s| s.len()).unwrap_or(0)
    }
}

/// Owned handle to a stream of [`SessionEvent`]s.
pub struct SessionSubscription {
    id: u64,
    receiver: mpsc::UnboundedReceiver<SessionEvent>,
    subscribers: Subscribers,
}

impl SessionSubscription {
    #[cfg(test)]
    pub async fn recv(&mut self) -> Option<SessionEvent> {
        self.receiver.recv().await
    }

    /// Explicit release; equivalent to dropping the handle.
    #[cfg(test)]
    pub fn unsubscribe(self) {}
}

impl Stream for SessionSubscription {
    type Item = SessionEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.remove(&self.id);
        }
        log::debug!("Session subscriber {} released", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::supabase::models::User;
    use futures_util::StreamExt;

    fn session() -> Session {
        Session {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            token_type: "bearer".to_string(),
            expires_in: None,
            expires_at: None,
            user: User {
                id: "u1".to_string(),
                email: None,
                phone: None,
                created_at: None,
            },
        }
    }

    #[tokio::test]
    async fn subscribers_receive_events_in_order() {
        let events = SessionEvents::new();
        let mut first = events.subscribe();
        let mut second = events.subscribe();

        events.emit(SessionEvent::signed_in(session()));
        events.emit(SessionEvent::signed_out());

        assert_eq!(first.recv().await.unwrap().kind, SessionEventKind::SignedIn);
        assert_eq!(first.next().await.unwrap().kind, SessionEventKind::SignedOut);
        assert_eq!(second.recv().await.unwrap().kind, SessionEventKind::SignedIn);
    }

    #[test]
    fn dropping_the_handle_unsubscribes() {
        let events = SessionEvents::new();
        let sub = events.subscribe();
        let other = events.subscribe();
        assert_eq!(events.subscriber_count(), 2);

        drop(sub);
        assert_eq!(events.subscriber_count(), 1);

        other.unsubscribe();
        assert_eq!(events.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn cancelled_listener_task_releases_subscription() {
        let events = SessionEvents::new();
        let mut sub = events.subscribe();
        let task = tokio::spawn(async move {
            while sub.recv().await.is_some() {}
        });
        assert_eq!(events.subscriber_count(), 1);

        task.abort();
        let _ = task.await;
        assert_eq!(events.subscriber_count(), 0);
    }

    #[test]
    fn emit_without_subscribers_is_a_no_op() {
        let events = SessionEvents::new();
        events.emit(SessionEvent::signed_out());
        assert_eq!(events.subscriber_count(), 0);
    }
}
