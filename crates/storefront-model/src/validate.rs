//! Field-level validation for the product draft
//!
//! Mirrors the storefront's form schema: every violation is keyed by field
//! name so the form can render inline messages, and a draft that passes
//! yields a [`ValidatedProduct`] with properly typed values.

use crate::product::ProductDraft;
use chrono::NaiveDate;

/// A single field violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Draft field the message belongs to
    pub field: &'static str,
    /// Human-readable message for inline display
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All violations found in one validation pass
#[derive(Debug, Clone, PartialEq, Eq, Default, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    /// Violations in field order
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Message for a specific field, if it failed
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Whether any violation was recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Typed values extracted from a draft that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
    pub product_name: String,
    pub product_category: String,
    pub product_price: f64,
    pub product_discount: f64,
    pub product_currency: String,
    pub expire_date: NaiveDate,
    pub stock_level: u32,
    pub product_description: String,
}

/// Validate a draft against the form schema
///
/// `today` anchors the expiry-date check so validation stays deterministic
/// in tests.
///
/// # Errors
/// Returns every violated field at once, in field order.
pub fn validate_draft(
    draft: &ProductDraft,
    today: NaiveDate,
) -> Result<ValidatedProduct, ValidationErrors> {
    let mut errors = Vec::new();

    if draft.product_name.trim().is_empty() {
        errors.push(FieldError::new("productName", "Product name is required"));
    }
    if draft.product_category.trim().is_empty() {
        errors.push(FieldError::new(
            "productCategory",
            "Product category is required",
        ));
    }

    let price = match draft.product_price.trim().parse::<f64>() {
        Ok(p) if p > 0.0 => Some(p),
        Ok(_) => {
            errors.push(FieldError::new(
                "productPrice",
                "Product price must be greater than zero",
            ));
            None
        }
        Err(_) => {
            errors.push(FieldError::new(
                "productPrice",
                "Product price must be a number",
            ));
            None
        }
    };

    let discount = match draft.product_discount.trim().parse::<f64>() {
        Ok(d) if (0.0..=100.0).contains(&d) => Some(d),
        Ok(_) => {
            errors.push(FieldError::new(
                "productDiscount",
                "Discount must be between 0 and 100",
            ));
            None
        }
        Err(_) => {
            errors.push(FieldError::new(
                "productDiscount",
                "Discount must be a number",
            ));
            None
        }
    };

    if draft.product_currency.trim().is_empty() {
        errors.push(FieldError::new("productCurrency", "Currency is required"));
    }

    let expire = match NaiveDate::parse_from_str(draft.expire_date.trim(), "%Y-%m-%d") {
        Ok(date) if date >= today => Some(date),
        Ok(_) => {
            errors.push(FieldError::new(
                "expireDate",
                "Expire date must not be in the past",
            ));
            None
        }
        Err(_) => {
            errors.push(FieldError::new(
                "expireDate",
                "Expire date must be a valid date (YYYY-MM-DD)",
            ));
            None
        }
    };

    let stock = match draft.stock_level.trim().parse::<u32>() {
        Ok(s) => Some(s),
        Err(_) => {
            errors.push(FieldError::new(
                "stockLevel",
                "Stock level must be a non-negative whole number",
            ));
            None
        }
    };

    if draft.product_description.trim().is_empty() {
        errors.push(FieldError::new(
            "productDescription",
            "Description is required",
        ));
    }

    if !errors.is_empty() {
        return Err(ValidationErrors { errors });
    }

    // Each value is Some whenever its field recorded no error, and errors
    // is empty here, so the defaults never surface.
    Ok(ValidatedProduct {
        product_name: draft.product_name.trim().to_string(),
        product_category: draft.product_category.trim().to_string(),
        product_price: price.unwrap_or_default(),
        product_discount: discount.unwrap_or_default(),
        product_currency: draft.product_currency.trim().to_string(),
        expire_date: expire.unwrap_or_default(),
        stock_level: stock.unwrap_or_default(),
        product_description: draft.product_description.trim().to_string(),
    })
}
