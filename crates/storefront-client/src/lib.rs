//! Storefront Client - API boundary
//!
//! Everything that crosses the line to the backend lives here:
//!
//! - [`MultipartForm`] / [`ProfilePatch`]: ordered multipart assembly with
//!   the protected-field exclusions
//! - [`ApiFailure`]: failure shapes plus the message-extraction chain
//! - The collaborator traits ([`ImageFetcher`], [`ProductGateway`],
//!   [`ProfileGateway`], [`AuthGateway`]) the workflows are written against
//!
//! The HTTP transport itself is the caller's concern.

#![warn(unreachable_pub)]

pub mod error;
pub mod gateway;
pub mod multipart;

pub use error::{ApiFailure, UNKNOWN_ERROR_MESSAGE};
pub use gateway::{AuthGateway, FetchedImage, ImageFetcher, LoginResponse, ProductGateway, ProfileGateway};
pub use multipart::{MultipartForm, Part, PartValue, ProfilePatch, PROTECTED_PATCH_FIELDS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
