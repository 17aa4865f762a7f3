//! Storefront Profile - profile state, persisted snapshot, session
//!
//! - [`ProfileStore`]: pending/fulfilled/rejected state container over the
//!   profile gateway, with Role-preserving snapshot merge on update
//! - [`SnapshotRepository`]: the durable local-storage surface
//!   (in-memory and JSON-file implementations included)
//! - [`SessionWorkflow`]: credential login with the explicit
//!   seller-verification branch

#![warn(unreachable_pub)]

pub mod merge;
pub mod session;
pub mod snapshot;
pub mod state;

pub use merge::merge_profile_snapshot;
pub use session::{
    LoginOutcome, SessionWorkflow, HOME_ROUTE, INVALID_CREDENTIALS_MESSAGE,
    SELLER_VERIFICATION_MESSAGE,
};
pub use snapshot::{
    InMemorySnapshots, JsonFileSnapshots, SnapshotError, SnapshotRepository, PROFILE_KEY,
    TOKEN_KEY,
};
pub use state::{ProfileState, ProfileStore, ProfileUpdateInput};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
