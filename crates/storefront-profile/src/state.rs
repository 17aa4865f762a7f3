//! Profile state container
//!
//! Fetch and update are asynchronous units of work with three observable
//! phases: pending (loading set, error cleared), fulfilled (user replaced),
//! rejected (error stored, last-known-good user retained). On a fulfilled
//! update the server's user is also merged into the persisted snapshot.

use crate::merge::merge_profile_snapshot;
use crate::snapshot::{SnapshotRepository, PROFILE_KEY};
use std::sync::Arc;
use storefront_client::{MultipartForm, ProfileGateway, ProfilePatch};
use storefront_model::User;

/// Observable profile state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    /// Last successfully loaded user; retained across rejections
    pub user: Option<User>,
    /// Whether a request is in flight
    pub loading: bool,
    /// Rejection payload of the last failed request; cleared on dispatch
    pub error: Option<String>,
}

/// Input accepted by [`ProfileStore::update_profile`]
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileUpdateInput {
    /// Flat patch; `email`/`password` are excluded during encoding
    Patch(ProfilePatch),
    /// Pre-built multipart payload, used as-is
    Form(MultipartForm),
}

impl ProfileUpdateInput {
    fn into_form(self) -> MultipartForm {
        match self {
            Self::Patch(patch) => patch.encode(),
            Self::Form(form) => form,
        }
    }
}

/// Drives profile fetch/update and owns the observable state
pub struct ProfileStore {
    state: ProfileState,
    gateway: Arc<dyn ProfileGateway>,
    snapshots: Arc<dyn SnapshotRepository>,
}

impl ProfileStore {
    /// Create a store over the given gateway and snapshot repository
    #[must_use]
    pub fn new(gateway: Arc<dyn ProfileGateway>, snapshots: Arc<dyn SnapshotRepository>) -> Self {
        Self {
            state: ProfileState::default(),
            gateway,
            snapshots,
        }
    }

    /// Current observable state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    /// Fetch the profile
    ///
    /// Failures settle into `state.error`; nothing propagates.
    pub async fn fetch_profile(&mut self) {
        self.begin();
        match self.gateway.fetch_profile().await {
            Ok(user) => {
                tracing::debug!("profile fetched");
                self.state.loading = false;
                self.state.user = Some(user);
            }
            Err(failure) => {
                tracing::warn!(error = %failure, "profile fetch rejected");
                self.state.loading = false;
                self.state.error = Some(failure.rejection_payload());
            }
        }
    }

    /// Update the profile
    ///
    /// On fulfillment the returned user replaces `state.user` and is merged
    /// into the persisted snapshot (prior `Role` carried forward when the
    /// response omits one). On rejection the previous user is retained.
    pub async fn update_profile(&mut self, input: ProfileUpdateInput) {
        self.begin();
        let form = input.into_form();
        tracing::debug!(parts = form.len(), "submitting profile update");

        match self.gateway.update_profile(form).await {
            Ok(response) => {
                self.persist(&response.user);
                self.state.loading = false;
                self.state.user = Some(response.user);
            }
            Err(failure) => {
                tracing::warn!(error = %failure, "profile update rejected");
                self.state.loading = false;
                self.state.error = Some(failure.rejection_payload());
            }
        }
    }

    fn begin(&mut self) {
        self.state.loading = true;
        self.state.error = None;
    }

    /// Read-modify-write of the persisted snapshot; storage failures
    /// degrade to a warning because the in-memory state is already correct
    fn persist(&self, user: &User) {
        let existing = match self.snapshots.load(PROFILE_KEY) {
            Ok(existing) => existing,
            Err(err) => {
                tracing::warn!(error = %err, "snapshot load failed; merging into empty blob");
                None
            }
        };
        let merged = merge_profile_snapshot(existing.as_ref(), user);
        if let Err(err) = self.snapshots.store(PROFILE_KEY, &merged) {
            tracing::warn!(error = %err, "snapshot store failed");
        }
    }
}

impl std::fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
