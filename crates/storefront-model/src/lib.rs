//! Storefront Model
//!
//! Boundary data shapes for the storefront client core:
//!
//! - [`FileHandle`] / [`LocalPicture`]: owned picture content with
//!   release-tracked previews
//! - [`ProductRecord`] / [`ProductDraft`]: product wire shape and its
//!   form-input projection
//! - [`validate_draft`]: the form schema, field-keyed
//! - [`User`] and the persisted profile snapshot shapes
//!
//! No async and no I/O here; everything is plain data plus derivations.

#![warn(unreachable_pub)]

pub mod picture;
pub mod product;
pub mod user;
pub mod validate;

pub use picture::{
    FileHandle, LocalPicture, PreviewLedger, PreviewUri, ALLOWED_PICTURE_MIMES, MAX_PICTURE_BYTES,
};
pub use product::{Category, ProductDraft, ProductRecord, RemotePicture};
pub use user::{ProfileUpdateResponse, User};
pub use validate::{validate_draft, FieldError, ValidatedProduct, ValidationErrors};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
