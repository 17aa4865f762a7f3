//! Session login workflow
//!
//! Credential login with the storefront's exact surface: any failure shows
//! the one fixed invalid-credentials message, a plain success stores the
//! token and navigates home, and an HTTP 201 marks a seller account that
//! still needs a verification step the backend does not yet define. That
//! branch resolves to an explicit outcome carrying the informational
//! message and stores no token.

use crate::snapshot::{SnapshotRepository, TOKEN_KEY};
use serde_json::json;
use std::sync::Arc;
use storefront_client::AuthGateway;

/// Message shown for any failed login attempt
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid Email Or Password";

/// Informational message for the unimplemented seller verification branch
pub const SELLER_VERIFICATION_MESSAGE: &str = "THIS IS A SELLER";

/// Route navigated to after an ordinary login
pub const HOME_ROUTE: &str = "/";

/// How a login attempt settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token stored; navigate to the given route
    LoggedIn {
        navigate_to: String,
    },
    /// Seller account: a further verification step is required but not yet
    /// defined by the backend; no token is stored
    SellerVerificationRequired,
    /// Credentials rejected (or the attempt failed for any other reason)
    Rejected,
}

/// Login state machine over the auth gateway and token storage
pub struct SessionWorkflow {
    gateway: Arc<dyn AuthGateway>,
    snapshots: Arc<dyn SnapshotRepository>,
    loading: bool,
    error: Option<String>,
}

impl SessionWorkflow {
    /// Create a session workflow
    #[must_use]
    pub fn new(gateway: Arc<dyn AuthGateway>, snapshots: Arc<dyn SnapshotRepository>) -> Self {
        Self {
            gateway,
            snapshots,
            loading: false,
            error: None,
        }
    }

    /// Whether a login attempt is in flight
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message to render under the form, if any
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clear the rendered message (user started typing again)
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Attempt a credential login
    pub async fn login(&mut self, email: &str, password: &str) -> LoginOutcome {
        self.loading = true;
        self.error = None;

        let response = match self.gateway.login(email, password).await {
            Ok(response) => response,
            Err(failure) => {
                tracing::debug!(error = %failure, "login rejected");
                return self.reject();
            }
        };

        if response.status == 201 {
            tracing::info!("seller account; verification step required");
            self.loading = false;
            self.error = Some(SELLER_VERIFICATION_MESSAGE.to_string());
            return LoginOutcome::SellerVerificationRequired;
        }

        let Some(token) = response.token else {
            tracing::warn!(status = response.status, "login response carried no token");
            return self.reject();
        };

        if let Err(err) = self.snapshots.store(TOKEN_KEY, &json!(token)) {
            tracing::warn!(error = %err, "token store failed");
            return self.reject();
        }

        self.loading = false;
        tracing::info!("login succeeded");
        LoginOutcome::LoggedIn {
            navigate_to: HOME_ROUTE.to_string(),
        }
    }

    fn reject(&mut self) -> LoginOutcome {
        self.loading = false;
        self.error = Some(INVALID_CREDENTIALS_MESSAGE.to_string());
        LoginOutcome::Rejected
    }
}

impl std::fmt::Debug for SessionWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionWorkflow")
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
