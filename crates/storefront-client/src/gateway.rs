//! Collaborator traits for the external HTTP layer
//!
//! The transport (client, retries, interceptors) is out of scope; callers
//! implement these traits over whatever HTTP stack they run, and the
//! workflows depend only on the trait objects.

use crate::error::ApiFailure;
use crate::multipart::MultipartForm;
use async_trait::async_trait;
use storefront_model::{Category, ProductRecord, ProfileUpdateResponse, User};

/// A remote image pulled back into local bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    /// MIME type reported by the response
    pub mime: String,
    /// Image payload
    pub bytes: Vec<u8>,
}

/// Raw login result as the auth endpoint reports it
///
/// Status 201 is the seller path; 200 carries a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    /// HTTP status of the login response
    pub status: u16,
    /// Session token, present on ordinary success
    pub token: Option<String>,
}

/// Fetches stored images by URL
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch one image
    ///
    /// # Errors
    /// Any transport or HTTP failure for this URL.
    async fn fetch(&self, url: &str) -> Result<FetchedImage, ApiFailure>;
}

/// Product endpoints used by the update workflow
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Multipart update of the product identified by `product_id`
    ///
    /// # Errors
    /// Any transport or HTTP failure; bodies are surfaced through
    /// [`ApiFailure::failure_message`].
    async fn update_product(
        &self,
        product_id: &str,
        form: MultipartForm,
    ) -> Result<ProductRecord, ApiFailure>;

    /// Category options for the form's select box
    ///
    /// # Errors
    /// Any transport or HTTP failure.
    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiFailure>;
}

/// Profile endpoints
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    /// GET the current user's profile
    ///
    /// # Errors
    /// Any transport or HTTP failure.
    async fn fetch_profile(&self) -> Result<User, ApiFailure>;

    /// PUT a multipart profile update
    ///
    /// # Errors
    /// Any transport or HTTP failure.
    async fn update_profile(
        &self,
        form: MultipartForm,
    ) -> Result<ProfileUpdateResponse, ApiFailure>;
}

/// Login endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Credential login
    ///
    /// # Errors
    /// Any transport or HTTP failure (surfaced to the user as an
    /// invalid-credentials message).
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mocked_fetcher_returns_scripted_image() {
        let mut fetcher = MockImageFetcher::new();
        fetcher.expect_fetch().returning(|_| {
            Ok(FetchedImage {
                mime: "image/png".into(),
                bytes: vec![9],
            })
        });

        let image = fetcher.fetch("https://cdn.example/a.png").await.unwrap();
        assert_eq!(image.mime, "image/png");
    }

    #[tokio::test]
    async fn mocked_gateway_surfaces_failure() {
        let mut gateway = MockProductGateway::new();
        gateway
            .expect_update_product()
            .returning(|_, _| Err(ApiFailure::response(500, "Internal Server Error", None)));

        let err = gateway
            .update_product("p-1", MultipartForm::new())
            .await
            .unwrap_err();
        assert_eq!(err.failure_message(), "Internal Server Error");
    }
}
