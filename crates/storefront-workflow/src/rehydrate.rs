//! Remote image rehydration
//!
//! Previously uploaded product pictures only exist as URLs; editing needs
//! them back as local file handles so the update can resubmit the full set.
//! Fetches are issued concurrently but results keep input order, and the
//! population is all-or-nothing: one failed fetch fails the whole
//! rehydration with zero local pictures, because silently continuing would
//! let the form submit fewer pictures than the product really has.

use crate::cancel::CancelToken;
use crate::error::RehydrationError;
use futures::future::join_all;
use std::sync::Arc;
use storefront_client::ImageFetcher;
use storefront_model::{FileHandle, LocalPicture, PreviewLedger, RemotePicture};

/// Status line shown while fetches are in flight
pub const LOADING_MESSAGE: &str = "Wait for loading product image........";

/// Informational note when the product has no stored pictures
pub const NO_EXISTING_IMAGES_MESSAGE: &str =
    "no existing image found for this product please upload new";

/// Where the rehydration currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RehydrationStatus {
    /// Fetches in flight; the picture grid renders a spinner
    Loading(String),
    /// All pictures are local; the grid is live
    Ready,
    /// At least one fetch failed; the session cannot continue
    Failed(String),
}

impl RehydrationStatus {
    /// The in-flight status with the standard status line
    #[inline]
    #[must_use]
    pub fn loading() -> Self {
        Self::Loading(LOADING_MESSAGE.to_string())
    }

    /// Whether the grid should still show a spinner
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }
}

/// Result of one rehydration pass
#[derive(Debug)]
pub struct Rehydration {
    /// Terminal status (`Ready` or `Failed`)
    pub status: RehydrationStatus,
    /// Informational note for the status line, if any
    pub note: Option<String>,
    /// Local pictures in input order; empty unless `Ready`
    pub pictures: Vec<LocalPicture>,
}

/// Fetches a product's stored pictures back into local handles
pub struct RemoteImageRehydrator {
    fetcher: Arc<dyn ImageFetcher>,
    ledger: PreviewLedger,
}

impl RemoteImageRehydrator {
    /// Create a rehydrator over the given fetcher
    #[must_use]
    pub fn new(fetcher: Arc<dyn ImageFetcher>, ledger: PreviewLedger) -> Self {
        Self { fetcher, ledger }
    }

    /// Rehydrate `remotes` into local pictures
    ///
    /// Output order equals input order. Zero remotes is not an error: the
    /// result is `Ready` with an informational note and an empty set.
    pub async fn rehydrate(
        &self,
        remotes: &[RemotePicture],
        cancel: &CancelToken,
    ) -> Rehydration {
        if remotes.is_empty() {
            tracing::debug!("no stored pictures to rehydrate");
            return Rehydration {
                status: RehydrationStatus::Ready,
                note: Some(NO_EXISTING_IMAGES_MESSAGE.to_string()),
                pictures: Vec::new(),
            };
        }

        tracing::info!(count = remotes.len(), "rehydrating stored pictures");

        // Concurrent issuance; join_all keeps input order.
        let fetches = remotes.iter().map(|remote| self.fetcher.fetch(&remote.url));
        let results = join_all(fetches).await;

        if cancel.is_cancelled() {
            tracing::debug!("rehydration cancelled after fetch");
            return Self::failed(RehydrationError::Cancelled);
        }

        let mut handles = Vec::with_capacity(remotes.len());
        for (remote, result) in remotes.iter().zip(results) {
            match result {
                Ok(image) => handles.push(FileHandle::generated(image.mime, image.bytes)),
                Err(failure) => {
                    let err = RehydrationError::Fetch {
                        url: remote.url.clone(),
                        failure,
                    };
                    tracing::error!(error = %err, "rehydration failed");
                    return Self::failed(err);
                }
            }
        }

        let pictures = handles
            .into_iter()
            .map(|handle| LocalPicture::tracked(handle, &self.ledger))
            .collect();

        Rehydration {
            status: RehydrationStatus::Ready,
            note: None,
            pictures,
        }
    }

    fn failed(err: RehydrationError) -> Rehydration {
        Rehydration {
            status: RehydrationStatus::Failed(err.to_string()),
            note: None,
            pictures: Vec::new(),
        }
    }
}
