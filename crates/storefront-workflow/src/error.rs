//! Error types for the product-update workflow
//!
//! Three layers: per-add picture acceptance, rehydration of the remote
//! picture set, and submission itself. Display strings for picture errors
//! are the exact texts the form renders inline.

use storefront_client::ApiFailure;
use storefront_model::ValidationErrors;

/// Picture-set violations
///
/// `TooFew`/`TooMany` are count-bound violations at submit time (and the
/// standing advisory); the rest block a single add operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PictureError {
    /// Adding would exceed the cap
    #[error("You can upload a maximum of {max} pictures.")]
    CountExceeded { max: usize },

    /// Set is below the minimum
    #[error("You must upload at least {min} pictures.")]
    TooFew { min: usize },

    /// Set is above the maximum
    ///
    /// Unreachable through the editor API (adds are capped) but kept as a
    /// checked variant for callers that seed sets directly.
    #[error("You can upload a maximum of {max} pictures.")]
    TooMany { max: usize },

    /// MIME type not on the allow-list
    #[error("Only jpeg, jpg, and png files are allowed.")]
    UnsupportedType { mime: String },

    /// Payload over the size cap
    #[error("Image size must be less than 1MB.")]
    TooLarge { size: usize },

    /// One picture per upload action
    #[error("Please upload one picture at a time.")]
    SingleFileOnly { got: usize },

    /// Removal index outside current bounds
    #[error("picture index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Rehydration of previously stored images failed
///
/// Fatal to the edit session: the picture set stays empty rather than being
/// partially populated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RehydrationError {
    /// One of the remote fetches failed
    #[error("failed to fetch {url}: {failure}")]
    Fetch { url: String, failure: ApiFailure },

    /// The edit session was torn down mid-fetch
    #[error("rehydration cancelled")]
    Cancelled,
}

/// Submission outcomes that keep the form in (or return it to) editing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// A submission is already in flight
    #[error("submission already in progress")]
    InProgress,

    /// Field-level validation failed; no network call was made
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Picture-count invariant failed; no network call was made
    #[error(transparent)]
    Pictures(#[from] PictureError),

    /// The update call failed
    #[error(transparent)]
    Api(#[from] ApiFailure),

    /// The workflow was torn down while the request was in flight
    #[error("submission cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_errors_render_form_texts() {
        assert_eq!(
            PictureError::CountExceeded { max: 8 }.to_string(),
            "You can upload a maximum of 8 pictures."
        );
        assert_eq!(
            PictureError::TooFew { min: 4 }.to_string(),
            "You must upload at least 4 pictures."
        );
        assert_eq!(
            PictureError::UnsupportedType {
                mime: "image/gif".into()
            }
            .to_string(),
            "Only jpeg, jpg, and png files are allowed."
        );
        assert_eq!(
            PictureError::TooLarge { size: 2_000_000 }.to_string(),
            "Image size must be less than 1MB."
        );
        assert_eq!(
            PictureError::SingleFileOnly { got: 3 }.to_string(),
            "Please upload one picture at a time."
        );
    }

    #[test]
    fn rehydration_fetch_carries_cause() {
        let err = RehydrationError::Fetch {
            url: "https://cdn.example/a.png".into(),
            failure: ApiFailure::response(404, "Not Found", None),
        };
        let text = err.to_string();
        assert!(text.contains("https://cdn.example/a.png"));
        assert!(text.contains("404"));
    }
}
