//! Content generation requests.
//!
//! The pipeline behind this is not live yet, so a valid request only
//! yields [`Submission::Pending`].

use crate::backend::services::credits::{ContentKind, can_afford};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Prompt was empty after trimming.
    EmptyPrompt,
    /// Balance does not cover the cost.
    InsufficientCredits { required: i64 },
    /// Accepted; generation is not available yet.
    Pending,
}

pub fn submit(prompt: &str, kind: ContentKind, balance: i64) -> Submission {
    if prompt.trim().is_empty() {
        return Submission::EmptyPrompt;
    }
    if !can_afford(balance, kind) {
        return Submission::InsufficientCredits {
            required: kind.cost(),
        };
    }
    log::info!("Generation requested: {kind:?}, {} chars", prompt.trim().chars().count());
    Submission::Pending
}
