//! Storefront Workflow - the product-update core
//!
//! - [`RemoteImageRehydrator`]: pulls stored pictures back into local
//!   handles, ordered and all-or-nothing
//! - [`PictureSetEditor`]: bounded, ordered picture collection with the
//!   storefront's acceptance rules
//! - [`ProductUpdateWorkflow`]: Editing/Submitting/Succeeded/Failed state
//!   machine over validation and multipart submission
//! - [`CategoryDirectory`] and [`MenuState`]: the adjacent select-box and
//!   sidebar state
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_workflow::prelude::*;
//!
//! # async fn example(gateway: std::sync::Arc<dyn storefront_client::ProductGateway>,
//! #     fetcher: std::sync::Arc<dyn storefront_client::ImageFetcher>,
//! #     record: storefront_model::ProductRecord) {
//! let ledger = storefront_model::PreviewLedger::new();
//! let cancel = CancelToken::new();
//!
//! let rehydrator = RemoteImageRehydrator::new(fetcher, ledger.clone());
//! let rehydration = rehydrator.rehydrate(&record.product_pictures, &cancel).await;
//!
//! let mut workflow = ProductUpdateWorkflow::seed(
//!     gateway, &record, rehydration.pictures, PictureRules::default(), ledger,
//! );
//! let _ = workflow.submit(chrono::Utc::now().date_naive(), &cancel).await;
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod cancel;
pub mod categories;
pub mod dashboard;
pub mod error;
pub mod pictures;
pub mod product;
pub mod rehydrate;
pub mod signal;

pub use cancel::CancelToken;
pub use categories::{CategoryDirectory, DirectoryPhase};
pub use dashboard::{MenuEntry, MenuState, DEFAULT_MENU_TITLES};
pub use error::{PictureError, RehydrationError, SubmitError};
pub use pictures::{PictureRules, PictureSetEditor};
pub use product::{
    ProductUpdateWorkflow, WorkflowPhase, PICTURES_FIELD, PRODUCT_LIST_ROUTE,
    UPDATE_SUCCESS_MESSAGE,
};
pub use rehydrate::{
    Rehydration, RehydrationStatus, RemoteImageRehydrator, LOADING_MESSAGE,
    NO_EXISTING_IMAGES_MESSAGE,
};
pub use signal::{ToastKind, UiSignal};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the product-update workflow
    pub use crate::{
        CancelToken, PictureRules, PictureSetEditor, ProductUpdateWorkflow, Rehydration,
        RehydrationStatus, RemoteImageRehydrator, SubmitError, UiSignal, WorkflowPhase,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
