//! Product record and draft form shapes
//!
//! [`ProductRecord`] is the wire shape the backend returns for an existing
//! product. [`ProductDraft`] is its form-input projection: every numeric
//! field becomes the string a text/number input would hold, and the expiry
//! date is truncated to its date part.

use serde::{Deserialize, Serialize};

/// A previously uploaded picture, addressable by URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePicture {
    /// Fetchable location of the stored image
    pub url: String,
}

/// Product resource as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Resource identifier (path parameter for updates)
    pub id: String,
    pub product_name: String,
    /// Category id the product belongs to
    pub product_category: String,
    pub product_price: f64,
    pub product_discount: f64,
    pub product_currency: String,
    /// `YYYY-MM-DD`, possibly followed by a time component after a space
    pub expire_date: String,
    pub stock_level: u32,
    pub product_description: String,
    #[serde(default)]
    pub product_pictures: Vec<RemotePicture>,
}

/// Form-input representation of a product under edit
///
/// All fields are the raw strings held by the corresponding inputs; parsing
/// and range checks happen in [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductDraft {
    pub product_name: String,
    pub product_category: String,
    pub product_price: String,
    pub product_discount: String,
    pub product_currency: String,
    /// `YYYY-MM-DD`
    pub expire_date: String,
    pub stock_level: String,
    pub product_description: String,
}

impl ProductDraft {
    /// Seed a draft from an existing record
    ///
    /// Numbers are stringified the way number inputs display them; the
    /// expiry date keeps only the part before the first space.
    #[must_use]
    pub fn seed(record: &ProductRecord) -> Self {
        Self {
            product_name: record.product_name.clone(),
            product_category: record.product_category.clone(),
            product_price: trim_float(record.product_price),
            product_discount: trim_float(record.product_discount),
            product_currency: record.product_currency.clone(),
            expire_date: record
                .expire_date
                .split(' ')
                .next()
                .unwrap_or_default()
                .to_string(),
            stock_level: record.stock_level.to_string(),
            product_description: record.product_description.clone(),
        }
    }
}

/// Stringify a float without a trailing `.0` for whole values
fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Product category option for the form's select box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub category_name: String,
}
