//! Person model matching the portal's JSON contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role tag carried by every person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Member,
    Admin,
}

/// A person shown on the People screen.
///
/// Records are immutable once fetched; the screen never writes them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub role: Role,
}

impl PersonRecord {
    /// Display name as rendered on the screen.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Which data set the screen is showing.
///
/// Starts in `Members` and changes only on explicit user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Members,
    Admins,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let person = PersonRecord {
            id: "64001660a711c62d5b4076a2".to_string(),
            first_name: "Noble".to_string(),
            last_name: "Mittal".to_string(),
            image: None,
            email: "noble@gmail.com".to_string(),
            created_at: "2023-03-02T03:22:08.101Z".parse().unwrap(),
            role: Role::Member,
        };

        assert_eq!(person.full_name(), "Noble Mittal");
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::json!({
            "id": "64001660a711c62d5b4076a3",
            "firstName": "Noble",
            "lastName": "Mittal",
            "image": "mockImage",
            "email": "noble@gmail.com",
            "createdAt": "2023-03-02T03:22:08.101Z",
            "role": "Member"
        });

        let person: PersonRecord = serde_json::from_value(json).unwrap();
        assert_eq!(person.first_name, "Noble");
        assert_eq!(person.image.as_deref(), Some("mockImage"));
        assert_eq!(person.role, Role::Member);
    }

    #[test]
    fn test_view_mode_defaults_to_members() {
        assert_eq!(ViewMode::default(), ViewMode::Members);
    }
}
