//! Campaign application rows from the `/campaign-users` endpoints.
//!
//! Depending on the backend version a row nests the campaign under
//! `campaign`, spreads campaign columns flat into the row, or only carries
//! `campaign_title`/`campaign_id`. The flattened inline record covers the
//! spread case so callers always get a [`Campaign`] to render.

use crate::domain::campaign::Campaign;
use crate::shared::ids::FlexId;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
    Paid,
    Other(String),
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Cancelled => "cancelled",
            ApplicationStatus::Paid => "paid",
            ApplicationStatus::Other(s) => s,
        }
    }
}

impl From<String> for ApplicationStatus {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "pending" => ApplicationStatus::Pending,
            "accepted" => ApplicationStatus::Accepted,
            "rejected" => ApplicationStatus::Rejected,
            "cancelled" => ApplicationStatus::Cancelled,
            "paid" => ApplicationStatus::Paid,
            other => ApplicationStatus::Other(other.to_string()),
        }
    }
}

impl Serialize for ApplicationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignApplication {
    #[serde(default)]
    pub id: Option<FlexId>,
    #[serde(default)]
    pub campaign_user_id: Option<FlexId>,
    #[serde(default)]
    pub application_status: Option<ApplicationStatus>,
    #[serde(default)]
    pub application_notes: Option<String>,
    #[serde(default)]
    pub applied_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub campaign_title: Option<String>,
    #[serde(default)]
    pub campaign: Option<Campaign>,
    #[serde(flatten)]
    pub inline: Campaign,
}

impl CampaignApplication {
    /// The row id, whichever of the two column names carried it.
    pub fn id(&self) -> Option<&FlexId> {
        self.id.as_ref().or(self.campaign_user_id.as_ref())
    }

    /// The campaign this application targets: the nested record when the
    /// backend joined it in, otherwise the row's own campaign columns.
    pub fn campaign(&self) -> &Campaign {
        self.campaign.as_ref().unwrap_or(&self.inline)
    }

    pub fn display_title(&self) -> String {
        let campaign = self.campaign();
        if !campaign.title.is_empty() {
            return campaign.title.clone();
        }
        if let Some(title) = self.campaign_title.as_deref() {
            if !title.is_empty() {
                return title.to_string();
            }
        }
        match campaign.id() {
            Some(id) => format!("Campaign #{}", id),
            None => "Campaign".to_string(),
        }
    }

    pub fn applied_date(&self) -> Option<&str> {
        self.created_at.as_deref().or(self.applied_at.as_deref())
    }

    /// Only pending applications can still be withdrawn.
    pub fn can_cancel(&self) -> bool {
        self.application_status == Some(ApplicationStatus::Pending)
    }
}

/// Body of the application POST.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyRequest {
    pub campaign_id: FlexId,
    pub student_id: FlexId,
    pub application_notes: String,
}

/// Body of the status-change PUT (withdraw, accept, reject).
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdateRequest {
    pub application_status: ApplicationStatus,
}

/// Application lists arrive bare, under `{data}`, or under `{result}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApplicationListEnvelope {
    Bare(Vec<Value>),
    Wrapped { data: Vec<Value> },
    Result { result: Vec<Value> },
    Unrecognized(Value),
}

impl ApplicationListEnvelope {
    pub fn into_applications(self) -> Vec<CampaignApplication> {
        let rows = match self {
            ApplicationListEnvelope::Bare(rows) => rows,
            ApplicationListEnvelope::Wrapped { data } => data,
            ApplicationListEnvelope::Result { result } => result,
            ApplicationListEnvelope::Unrecognized(_) => Vec::new(),
        };
        rows.into_iter()
            .filter_map(|row| serde_json::from_value(row).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_result_shape() {
        let apps = serde_json::from_value::<ApplicationListEnvelope>(json!({
            "result": [{"id": 1, "application_status": "pending"}]
        }))
        .unwrap()
        .into_applications();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].application_status, Some(ApplicationStatus::Pending));
    }

    #[test]
    fn test_nested_campaign_preferred() {
        let app: CampaignApplication = serde_json::from_value(json!({
            "id": 1,
            "campaign": {"title": "Nested", "campaign_id": 5},
            "title": "Flat"
        }))
        .unwrap();
        assert_eq!(app.campaign().title, "Nested");
        assert_eq!(app.display_title(), "Nested");
    }

    #[test]
    fn test_flat_row_serves_as_campaign() {
        let app: CampaignApplication = serde_json::from_value(json!({
            "id": 1,
            "title": "Spread row",
            "campaign_id": 5,
            "status": "active",
            "campaign_category": "Fashion"
        }))
        .unwrap();
        assert_eq!(app.campaign().title, "Spread row");
        assert!(app.campaign().is_active());
        assert_eq!(app.campaign().id(), Some(&FlexId::Num(5)));
    }

    #[test]
    fn test_title_fallback_chain() {
        let app: CampaignApplication = serde_json::from_value(json!({
            "id": 1,
            "campaign_title": "Joined title",
            "campaign_id": 9
        }))
        .unwrap();
        assert_eq!(app.display_title(), "Joined title");

        let app: CampaignApplication =
            serde_json::from_value(json!({"id": 1, "campaign_id": 9})).unwrap();
        assert_eq!(app.display_title(), "Campaign #9");
    }

    #[test]
    fn test_row_id_coalescing() {
        let app: CampaignApplication =
            serde_json::from_value(json!({"campaign_user_id": "12"})).unwrap();
        assert_eq!(app.id(), Some(&FlexId::Text("12".into())));
    }

    #[test]
    fn test_applied_date_prefers_created_at() {
        let app: CampaignApplication = serde_json::from_value(json!({
            "created_at": "2024-06-01",
            "applied_at": "2024-05-20"
        }))
        .unwrap();
        assert_eq!(app.applied_date(), Some("2024-06-01"));
    }

    #[test]
    fn test_only_pending_can_cancel() {
        for (status, expected) in [("pending", true), ("PENDING", true), ("accepted", false)] {
            let app: CampaignApplication =
                serde_json::from_value(json!({"application_status": status})).unwrap();
            assert_eq!(app.can_cancel(), expected);
        }
    }

    #[test]
    fn test_status_update_serializes_lowercase() {
        let body = StatusUpdateRequest {
            application_status: ApplicationStatus::Cancelled,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"application_status": "cancelled"})
        );
    }
}
