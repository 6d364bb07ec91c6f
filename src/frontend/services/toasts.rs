//! Transient notifications.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast-info",
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Ordered list of visible toasts.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Keeps the newest toasts when more than this are visible.
    pub const MAX_VISIBLE: usize = 4;

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            level,
            message: message.into(),
        });
        if self.items.len() > Self::MAX_VISIBLE {
            let excess = self.items.len() - Self::MAX_VISIBLE;
            self.items.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Handle to the app-wide toast queue, provided by the root component.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
    duration: Duration,
}

impl Toasts {
    pub fn new(queue: Signal<ToastQueue>, duration_ms: u64) -> Self {
        Self {
            queue,
            duration: Duration::from_millis(duration_ms),
        }
    }

    pub fn queue(&self) -> Signal<ToastQueue> {
        self.queue
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastLevel::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    /// Toasts outlive the page that raised them (a denial toast is shown
    /// while navigating away), so the timer runs on the root scope.
    fn show(&self, level: ToastLevel, message: impl Into<String>) {
        let mut queue = self.queue;
        let id = queue.write().push(level, message);
        let duration = self.duration;
        spawn_forever(async move {
            tokio::time::sleep(duration).await;
            queue.write().dismiss(id);
        });
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}
