//! User, role, and persisted profile snapshot shapes
//!
//! The snapshot is the JSON blob kept in durable local storage under the
//! fixed `"profile"` key: a single `User` object that nests a `Role`
//! sub-object. Server responses may omit `Role`; the merge logic in the
//! profile crate carries the prior one forward.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat user record as the profile endpoints return it
///
/// `extra` keeps any server field this client does not model yet, so merges
/// never drop data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub google_id: Option<String>,
    pub profile_image: Option<String>,
    pub verified: Option<bool>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    pub preferred_language: Option<String>,
    pub preferred_currency: Option<String>,
    pub where_you_live: Option<String>,
    pub billing_address: Option<String>,
    pub role_id: Option<String>,
    pub is_active: Option<bool>,
    pub reason_for_deactivation: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub password_expires_at: Option<String>,
    pub is_password_expired: Option<bool>,
    /// Nested role object; `None` when the response omits role data
    #[serde(rename = "Role", skip_serializing_if = "Option::is_none")]
    pub role: Option<Value>,
    /// Open-ended extension point for unmodeled server fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Shape of a successful profile update response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdateResponse {
    /// The updated user resource
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_parses_camel_case_and_role() {
        let user: User = serde_json::from_value(json!({
            "id": "u-1",
            "firstName": "Ada",
            "lastName": "L",
            "email": "ada@example.com",
            "isActive": true,
            "Role": { "name": "buyer" },
            "loyaltyTier": "gold"
        }))
        .unwrap();

        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert_eq!(user.is_active, Some(true));
        assert_eq!(user.role.as_ref().unwrap()["name"], "buyer");
        // unmodeled field survives the round trip
        assert_eq!(user.extra["loyaltyTier"], "gold");

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["firstName"], "Ada");
        assert_eq!(back["Role"]["name"], "buyer");
        assert_eq!(back["loyaltyTier"], "gold");
    }

    #[test]
    fn omitted_role_serializes_as_absent() {
        let user = User {
            first_name: Some("Ada".into()),
            ..User::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("Role").is_none());
    }

    #[test]
    fn update_response_wraps_user() {
        let response: ProfileUpdateResponse = serde_json::from_value(json!({
            "user": { "id": "u-1", "firstName": "Ada" }
        }))
        .unwrap();
        assert_eq!(response.user.id.as_deref(), Some("u-1"));
    }
}
