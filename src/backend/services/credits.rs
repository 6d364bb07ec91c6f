//! Credit balance and content pricing.

use crate::backend::supabase::{AuthBackend, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentKind {
    #[default]
    Image,
    Video,
}

impl ContentKind {
    pub const ALL: [Self; 2] = [Self::Image, Self::Video];

    /// Price in credits.
    pub const fn cost(self) -> i64 {
        match self {
            Self::Image => 10,
            Self::Video => 50,
        }
    }
}

/// Loads the user's balance. Failures are logged and read as zero, which
/// leaves every paid action unaffordable.
pub async fn load_credit_balance<B: AuthBackend + ?Sized>(backend: &B, session: &Session) -> i64 {
    match backend.query_credit_balance(session).await {
        Ok(balance) => balance,
        Err(e) => {
            log::error!("Error loading credits for {}: {e}", session.user_id());
            0
        }
    }
}

pub const fn can_afford(balance: i64, kind: ContentKind) -> bool {
    balance >= kind.cost()
}

/// Whether the submit control is enabled.
pub const fn can_submit(balance: i64, kind: ContentKind, submitting: bool) -> bool {
    !submitting && can_afford(balance, kind)
}
