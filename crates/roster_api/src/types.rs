//! Wire types for the profile service.
//!
//! The fetch controllers key records by `id` and treat every other field as
//! opaque payload; only the rendering layer reads them.

use serde::{Deserialize, Serialize};

/// A single profile record returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_may_be_absent() {
        let profile: Profile =
            serde_json::from_str(r#"{"id":"1","name":"Ada","email":"ada@example.com"}"#).unwrap();
        assert_eq!(profile.id, "1");
        assert_eq!(profile.name, "Ada");
        assert!(profile.age.is_none());
        assert!(profile.phone.is_none());
        assert!(profile.bio.is_none());
    }

    #[test]
    fn full_record_roundtrips_through_json() {
        let profile = Profile {
            id: "42".to_string(),
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            age: Some(36),
            phone: Some("+1 555 0100".to_string()),
            bio: Some("Compilers.".to_string()),
        };
        let json = serde_json::to_string(&profile).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let result: Result<Profile, _> = serde_json::from_str(r#"{"id":"1","name":"Ada"}"#);
        assert!(result.is_err());
    }
}
