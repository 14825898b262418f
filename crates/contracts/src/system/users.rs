use crate::shared::ids::FlexId;
use serde::{Deserialize, Serialize};

/// The signed-in user as the login flow stores it in the browser.
///
/// The record is written by the auth service from either the login
/// response body or the token claims, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub user_id: Option<FlexId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl CurrentUser {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .unwrap_or("Student")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_partial_records() {
        let user: CurrentUser =
            serde_json::from_value(json!({"user_id": "17", "role": "influencer"})).unwrap();
        assert_eq!(user.user_id, Some(FlexId::Text("17".into())));
        assert_eq!(user.display_name(), "Student");

        let user: CurrentUser =
            serde_json::from_value(json!({"user_id": 17, "name": "Sari"})).unwrap();
        assert_eq!(user.display_name(), "Sari");
    }
}
