//! Product update workflow
//!
//! State machine over Editing -> Submitting -> Succeeded/Failed. The form
//! is seeded once from an existing product record plus the rehydrated
//! picture set; submission runs field validation and the picture-count
//! invariant before any network call, then posts a multipart payload of the
//! scalar fields and the ordered picture files. Failure returns the
//! workflow to editing with nothing discarded.

use crate::cancel::CancelToken;
use crate::categories::CategoryDirectory;
use crate::error::SubmitError;
use crate::pictures::{PictureRules, PictureSetEditor};
use crate::signal::UiSignal;
use chrono::NaiveDate;
use std::sync::Arc;
use storefront_client::{MultipartForm, ProductGateway};
use storefront_model::{
    validate_draft, FieldError, LocalPicture, PreviewLedger, ProductDraft, ProductRecord,
    ValidationErrors,
};

/// Toast shown after a successful update
pub const UPDATE_SUCCESS_MESSAGE: &str = "Product has been updated";

/// Route navigated to after a successful update
pub const PRODUCT_LIST_ROUTE: &str = "/dashboard/product";

/// Field name the picture files post under
pub const PICTURES_FIELD: &str = "productPictures";

/// Where the workflow currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowPhase {
    /// Form interactive
    Editing,
    /// Update request in flight; the submit affordance is disabled
    Submitting,
    /// Update accepted; navigation away has been signalled
    Succeeded,
    /// Last submission failed; resumable
    Failed,
}

/// The product-update workflow
pub struct ProductUpdateWorkflow {
    product_id: String,
    draft: ProductDraft,
    pictures: PictureSetEditor,
    categories: CategoryDirectory,
    phase: WorkflowPhase,
    last_error: Option<String>,
    signals: Vec<UiSignal>,
    gateway: Arc<dyn ProductGateway>,
}

impl ProductUpdateWorkflow {
    /// Seed the workflow from an existing record and its rehydrated pictures
    #[must_use]
    pub fn seed(
        gateway: Arc<dyn ProductGateway>,
        record: &ProductRecord,
        rehydrated: Vec<LocalPicture>,
        rules: PictureRules,
        ledger: PreviewLedger,
    ) -> Self {
        let mut pictures = PictureSetEditor::new(rules, ledger);
        pictures.seed(rehydrated);

        Self {
            product_id: record.id.clone(),
            draft: ProductDraft::seed(record),
            pictures,
            categories: CategoryDirectory::new(),
            phase: WorkflowPhase::Editing,
            last_error: None,
            signals: Vec::new(),
            gateway,
        }
    }

    /// Load the category options for the select box
    pub async fn load_categories(&mut self) {
        self.categories.begin();
        let result = self.gateway.fetch_categories().await;
        self.categories.resolve(result);
    }

    /// Submit the current draft
    ///
    /// Validation failures and submission failures both leave the workflow
    /// resumable; only a success is terminal.
    ///
    /// # Errors
    /// `InProgress` while a submission is in flight; `Validation` /
    /// `Pictures` before any network call; `Api` when the update call
    /// failed; `Cancelled` when torn down mid-flight.
    pub async fn submit(
        &mut self,
        today: NaiveDate,
        cancel: &CancelToken,
    ) -> Result<(), SubmitError> {
        if self.phase == WorkflowPhase::Submitting {
            return Err(SubmitError::InProgress);
        }

        self.validate(today)?;
        self.pictures.validate_for_submit().map_err(|err| {
            self.last_error = Some(err.to_string());
            err
        })?;

        self.phase = WorkflowPhase::Submitting;
        self.last_error = None;
        tracing::info!(product_id = %self.product_id, "submitting product update");

        let form = self.build_form();
        let result = self.gateway.update_product(&self.product_id, form).await;

        if cancel.is_cancelled() {
            // Torn down mid-flight: settle quietly, no signals, no toasts
            self.phase = WorkflowPhase::Editing;
            return Err(SubmitError::Cancelled);
        }

        match result {
            Ok(_record) => {
                tracing::info!(product_id = %self.product_id, "product update accepted");
                self.phase = WorkflowPhase::Succeeded;
                self.signals.push(UiSignal::success(UPDATE_SUCCESS_MESSAGE));
                self.signals.push(UiSignal::navigate(PRODUCT_LIST_ROUTE));
                Ok(())
            }
            Err(failure) => {
                let message = failure.failure_message();
                tracing::error!(product_id = %self.product_id, error = %message, "product update failed");
                self.phase = WorkflowPhase::Failed;
                self.last_error = Some(message.clone());
                self.signals.push(UiSignal::error(message));
                Err(SubmitError::Api(failure))
            }
        }
    }

    /// Return a failed workflow to editing
    pub fn resume_editing(&mut self) {
        if self.phase == WorkflowPhase::Failed {
            self.phase = WorkflowPhase::Editing;
        }
    }

    /// Drain queued UI effects
    #[must_use]
    pub fn drain_signals(&mut self) -> Vec<UiSignal> {
        std::mem::take(&mut self.signals)
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    /// The draft under edit
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Mutable access for user input
    ///
    /// Only meaningful while editing; the submit path snapshots the draft
    /// when it builds the payload.
    #[inline]
    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    /// The picture set
    #[inline]
    #[must_use]
    pub fn pictures(&self) -> &PictureSetEditor {
        &self.pictures
    }

    /// Mutable picture set for upload/remove actions
    #[inline]
    pub fn pictures_mut(&mut self) -> &mut PictureSetEditor {
        &mut self.pictures
    }

    /// Category directory
    #[inline]
    #[must_use]
    pub fn categories(&self) -> &CategoryDirectory {
        &self.categories
    }

    /// Message from the last failure, if any
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn validate(&mut self, today: NaiveDate) -> Result<(), SubmitError> {
        let mut errors = match validate_draft(&self.draft, today) {
            Ok(_) => ValidationErrors::default(),
            Err(errors) => errors,
        };

        if !self.categories.allows(&self.draft.product_category)
            && errors.message_for("productCategory").is_none()
        {
            errors.errors.push(FieldError {
                field: "productCategory",
                message: "Unknown product category".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            self.last_error = Some(errors.to_string());
            Err(SubmitError::Validation(errors))
        }
    }

    fn build_form(&self) -> MultipartForm {
        let mut form = MultipartForm::new();
        form.text("productName", &self.draft.product_name)
            .text("productCategory", &self.draft.product_category)
            .text("productPrice", &self.draft.product_price)
            .text("productDiscount", &self.draft.product_discount)
            .text("productCurrency", &self.draft.product_currency)
            .text("expireDate", &self.draft.expire_date)
            .text("stockLevel", &self.draft.stock_level)
            .text("productDescription", &self.draft.product_description);
        for handle in self.pictures.handles() {
            form.file(PICTURES_FIELD, handle.clone());
        }
        form
    }
}

impl std::fmt::Debug for ProductUpdateWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductUpdateWorkflow")
            .field("product_id", &self.product_id)
            .field("phase", &self.phase)
            .field("pictures", &self.pictures.len())
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}
