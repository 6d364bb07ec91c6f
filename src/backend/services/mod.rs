//! Core services.

pub mod credentials;
pub mod credits;
pub mod dashboard;
pub mod gate;
pub mod generation;

#[cfg(test)]
pub mod mock;

pub use credits::{ContentKind, can_submit, load_credit_balance};
pub use dashboard::{DashboardUpdate, run_dashboard};
pub use gate::{
    ADMIN_ROLE, Destination, GateState, PublicState, resolve_basic_access,
    resolve_elevated_access, resolve_public_access, sign_out,
};
pub use generation::{Submission, submit};
