//! Category directory for the form's select box
//!
//! Categories load through their own pending/ready/failed phase; while
//! loading, the select box is disabled, and once ready the draft's category
//! id can be checked against the known options.

use storefront_client::ApiFailure;
use storefront_model::Category;

/// Load phase of the category options
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryPhase {
    /// Never requested
    Idle,
    /// Request in flight; select box disabled
    Loading,
    /// Options available
    Ready(Vec<Category>),
    /// Load failed with a surfaced message
    Failed(String),
}

/// Holds the category options and their load phase
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDirectory {
    phase: DirectoryPhase,
}

impl CategoryDirectory {
    /// Create an idle directory
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: DirectoryPhase::Idle,
        }
    }

    /// Mark a load as started
    pub fn begin(&mut self) {
        self.phase = DirectoryPhase::Loading;
    }

    /// Settle the in-flight load
    pub fn resolve(&mut self, result: Result<Vec<Category>, ApiFailure>) {
        self.phase = match result {
            Ok(categories) => {
                tracing::debug!(count = categories.len(), "categories loaded");
                DirectoryPhase::Ready(categories)
            }
            Err(failure) => {
                let message = failure.failure_message();
                tracing::warn!(error = %message, "category load failed");
                DirectoryPhase::Failed(message)
            }
        };
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> &DirectoryPhase {
        &self.phase
    }

    /// Whether the select box should be disabled
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, DirectoryPhase::Loading)
    }

    /// Loaded options, if ready
    #[must_use]
    pub fn categories(&self) -> Option<&[Category]> {
        match &self.phase {
            DirectoryPhase::Ready(categories) => Some(categories),
            _ => None,
        }
    }

    /// Whether `id` names a known category
    ///
    /// Only meaningful once ready; before that every id passes, so a slow
    /// category load never blocks an edit.
    #[must_use]
    pub fn allows(&self, id: &str) -> bool {
        match &self.phase {
            DirectoryPhase::Ready(categories) => categories.iter().any(|c| c.id == id),
            _ => true,
        }
    }
}

impl Default for CategoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}
