//! Role-preserving snapshot merge
//!
//! A successful profile update returns the user without role data when
//! nothing role-related changed. The merge writes the fresh user fields
//! into the persisted snapshot but carries the prior `User.Role` forward,
//! and never touches sibling top-level keys in the blob.

use serde_json::{json, Map, Value};
use storefront_model::User;

/// Merge a fresh server user into the existing snapshot blob
///
/// Returns the blob to persist. `existing` is whatever was stored before
/// (possibly `None` or not even an object; both degrade to a fresh blob).
#[must_use]
pub fn merge_profile_snapshot(existing: Option<&Value>, user: &User) -> Value {
    let mut blob = match existing {
        Some(Value::Object(map)) => Value::Object(map.clone()),
        _ => Value::Object(Map::new()),
    };

    let prior_role = blob
        .get("User")
        .and_then(|u| u.get("Role"))
        .cloned();

    let mut fresh = match serde_json::to_value(user) {
        Ok(Value::Object(map)) => Value::Object(map),
        // User always serializes to an object; anything else means a broken
        // input and gets an empty object rather than a panic
        _ => Value::Object(Map::new()),
    };

    if user.role.is_none() {
        fresh["Role"] = prior_role.unwrap_or_else(|| json!({}));
    }

    blob["User"] = fresh;
    blob
}
