//! Testing utilities for the storefront workspace
//!
//! Shared fixtures and scripted collaborator fakes.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use storefront_client::{
    ApiFailure, AuthGateway, FetchedImage, ImageFetcher, LoginResponse, MultipartForm,
    ProductGateway, ProfileGateway,
};
use storefront_model::{Category, FileHandle, ProductRecord, ProfileUpdateResponse, RemotePicture, User};

pub fn png_image(bytes: usize) -> FetchedImage {
    FetchedImage {
        mime: "image/png".to_string(),
        bytes: vec![0u8; bytes],
    }
}

pub fn png_handle(name: &str, bytes: usize) -> FileHandle {
    FileHandle::new(name, "image/png", vec![0u8; bytes])
}

pub fn sample_product_record() -> ProductRecord {
    ProductRecord {
        id: "p-1".to_string(),
        product_name: "Keyboard".to_string(),
        product_category: "cat-9".to_string(),
        product_price: 120.0,
        product_discount: 10.0,
        product_currency: "USD".to_string(),
        expire_date: "2030-01-15 00:00:00".to_string(),
        stock_level: 40,
        product_description: "Mechanical keyboard".to_string(),
        product_pictures: vec![
            RemotePicture {
                url: "https://cdn.example/p1-a.png".to_string(),
            },
            RemotePicture {
                url: "https://cdn.example/p1-b.png".to_string(),
            },
            RemotePicture {
                url: "https://cdn.example/p1-c.png".to_string(),
            },
            RemotePicture {
                url: "https://cdn.example/p1-d.png".to_string(),
            },
        ],
    }
}

pub fn sample_user(first_name: &str) -> User {
    User {
        id: Some("u-1".to_string()),
        first_name: Some(first_name.to_string()),
        last_name: Some("Lovelace".to_string()),
        email: Some("ada@example.com".to_string()),
        verified: Some(true),
        ..User::default()
    }
}

fn status_text(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "",
    }
}

/// Image fetcher backed by a url -> image map; unknown urls 404
pub struct MapFetcher {
    images: HashMap<String, FetchedImage>,
    failing: Option<(String, u16)>,
}

#[async_trait]
impl ImageFetcher for MapFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, ApiFailure> {
        if let Some((failing_url, status)) = &self.failing {
            if failing_url == url {
                return Err(ApiFailure::response(*status, status_text(*status), None));
            }
        }
        self.images
            .get(url)
            .cloned()
            .ok_or_else(|| ApiFailure::response(404, "Not Found", None))
    }
}

pub fn map_fetcher(entries: &[(&str, FetchedImage)]) -> Arc<dyn ImageFetcher> {
    Arc::new(MapFetcher {
        images: entries
            .iter()
            .map(|(url, image)| ((*url).to_string(), image.clone()))
            .collect(),
        failing: None,
    })
}

/// Like [`map_fetcher`], but `failing_url` answers with `status`
pub fn failing_fetcher(
    entries: &[(&str, FetchedImage)],
    failing_url: &str,
    status: u16,
) -> Arc<dyn ImageFetcher> {
    Arc::new(MapFetcher {
        images: entries
            .iter()
            .map(|(url, image)| ((*url).to_string(), image.clone()))
            .collect(),
        failing: Some((failing_url.to_string(), status)),
    })
}

/// An update call captured by [`ScriptedProductGateway`]
#[derive(Debug, Clone)]
pub struct CapturedUpdate {
    pub product_id: String,
    pub form: MultipartForm,
}

/// Product gateway that answers from a script and records every call
///
/// With an empty script, updates succeed with [`sample_product_record`].
#[derive(Default)]
pub struct ScriptedProductGateway {
    updates: Mutex<VecDeque<Result<ProductRecord, ApiFailure>>>,
    categories: Mutex<Vec<Category>>,
    captured: Mutex<Vec<CapturedUpdate>>,
}

impl ScriptedProductGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_update_result(&self, result: Result<ProductRecord, ApiFailure>) {
        self.updates.lock().push_back(result);
    }

    pub fn set_categories(&self, categories: Vec<Category>) {
        *self.categories.lock() = categories;
    }

    pub fn captured(&self) -> Vec<CapturedUpdate> {
        self.captured.lock().clone()
    }
}

#[async_trait]
impl ProductGateway for ScriptedProductGateway {
    async fn update_product(
        &self,
        product_id: &str,
        form: MultipartForm,
    ) -> Result<ProductRecord, ApiFailure> {
        self.captured.lock().push(CapturedUpdate {
            product_id: product_id.to_string(),
            form,
        });
        self.updates
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(sample_product_record()))
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiFailure> {
        Ok(self.categories.lock().clone())
    }
}

/// Profile gateway answering from scripts, recording update forms
#[derive(Default)]
pub struct ScriptedProfileGateway {
    fetches: Mutex<VecDeque<Result<User, ApiFailure>>>,
    updates: Mutex<VecDeque<Result<ProfileUpdateResponse, ApiFailure>>>,
    captured_forms: Mutex<Vec<MultipartForm>>,
}

impl ScriptedProfileGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_fetch_result(&self, result: Result<User, ApiFailure>) {
        self.fetches.lock().push_back(result);
    }

    pub fn push_update_result(&self, result: Result<ProfileUpdateResponse, ApiFailure>) {
        self.updates.lock().push_back(result);
    }

    pub fn captured_forms(&self) -> Vec<MultipartForm> {
        self.captured_forms.lock().clone()
    }
}

#[async_trait]
impl ProfileGateway for ScriptedProfileGateway {
    async fn fetch_profile(&self) -> Result<User, ApiFailure> {
        self.fetches
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(sample_user("Ada")))
    }

    async fn update_profile(
        &self,
        form: MultipartForm,
    ) -> Result<ProfileUpdateResponse, ApiFailure> {
        self.captured_forms.lock().push(form);
        self.updates.lock().pop_front().unwrap_or_else(|| {
            Ok(ProfileUpdateResponse {
                user: sample_user("Ada"),
            })
        })
    }
}

/// Auth gateway answering from a script; empty script rejects with 401
#[derive(Default)]
pub struct ScriptedAuthGateway {
    logins: Mutex<VecDeque<Result<LoginResponse, ApiFailure>>>,
}

impl ScriptedAuthGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_login_result(&self, result: Result<LoginResponse, ApiFailure>) {
        self.logins.lock().push_back(result);
    }
}

#[async_trait]
impl AuthGateway for ScriptedAuthGateway {
    async fn login(&self, _email: &str, _password: &str) -> Result<LoginResponse, ApiFailure> {
        self.logins
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ApiFailure::response(401, "Unauthorized", None)))
    }
}
