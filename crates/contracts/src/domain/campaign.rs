//! Campaign records as the API serves them.

use crate::shared::flex;
use crate::shared::ids::FlexId;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Campaign lifecycle status. Matching is case-insensitive and the set is
/// open: anything unrecognized lands in `Other` instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CampaignStatus {
    Active,
    Inactive,
    Completed,
    Draft,
    AdminReview,
    PendingPayment,
    Cancelled,
    Other(String),
}

impl CampaignStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Inactive => "inactive",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Draft => "draft",
            CampaignStatus::AdminReview => "admin_review",
            CampaignStatus::PendingPayment => "pending_payment",
            CampaignStatus::Cancelled => "cancelled",
            CampaignStatus::Other(s) => s,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CampaignStatus::Active)
    }
}

impl From<String> for CampaignStatus {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "active" => CampaignStatus::Active,
            "inactive" => CampaignStatus::Inactive,
            "completed" => CampaignStatus::Completed,
            "draft" => CampaignStatus::Draft,
            "admin_review" => CampaignStatus::AdminReview,
            "pending_payment" => CampaignStatus::PendingPayment,
            "cancelled" => CampaignStatus::Cancelled,
            other => CampaignStatus::Other(other.to_string()),
        }
    }
}

impl Serialize for CampaignStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One campaign row. Every field is optional or defaulted: records come
/// from several backend versions and the browse view must render whatever
/// subset is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(default)]
    pub id: Option<FlexId>,
    #[serde(default)]
    pub campaign_id: Option<FlexId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: Option<CampaignStatus>,
    #[serde(default)]
    pub campaign_category: Option<String>,
    #[serde(default, deserialize_with = "flex::list_keep_raw")]
    pub influencer_category: Vec<String>,
    #[serde(default, deserialize_with = "flex::lenient_i64")]
    pub price_per_post: Option<i64>,
    #[serde(default, deserialize_with = "flex::lenient_i64")]
    pub influencer_count: Option<i64>,
    #[serde(default, deserialize_with = "flex::lenient_i64")]
    pub min_followers: Option<i64>,
    #[serde(default, deserialize_with = "flex::lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub submission_deadline: Option<String>,
    #[serde(default)]
    pub banner_image: Option<String>,
    #[serde(default, deserialize_with = "flex::list_drop_raw")]
    pub reference_images: Vec<String>,
    #[serde(default, deserialize_with = "flex::truthy")]
    pub has_product: bool,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "flex::lenient_i64")]
    pub product_value: Option<i64>,
    #[serde(default)]
    pub product_desc: Option<String>,
    #[serde(default)]
    pub content_guidelines: Option<String>,
    #[serde(default)]
    pub caption_guidelines: Option<String>,
    #[serde(default)]
    pub selected_gender: Option<String>,
    #[serde(default)]
    pub selected_age: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Campaign {
    /// The record id, whichever of the two column names carried it;
    /// `id` wins when both are set.
    pub fn id(&self) -> Option<&FlexId> {
        self.id.as_ref().or(self.campaign_id.as_ref())
    }

    pub fn is_active(&self) -> bool {
        self.status.as_ref().is_some_and(CampaignStatus::is_active)
    }

    /// Creation time parsed from the wire string, `None` when missing or
    /// in a format none of the known backends produce.
    pub fn created_timestamp(&self) -> Option<NaiveDateTime> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

/// Timestamps arrive as RFC 3339, as naive `YYYY-MM-DDTHH:MM:SS`, or as a
/// bare date, depending on which backend wrote the row.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// List responses arrive bare, wrapped in `{data}`, or wrapped twice in
/// `{data:{data}}`. Rows are kept as raw values so one malformed record
/// drops alone instead of failing the whole list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CampaignListEnvelope {
    Bare(Vec<Value>),
    Wrapped { data: Vec<Value> },
    Nested { data: NestedCampaignData },
    Unrecognized(Value),
}

#[derive(Debug, Deserialize)]
pub struct NestedCampaignData {
    #[serde(default)]
    pub data: Vec<Value>,
}

impl CampaignListEnvelope {
    pub fn into_campaigns(self) -> Vec<Campaign> {
        let rows = match self {
            CampaignListEnvelope::Bare(rows) => rows,
            CampaignListEnvelope::Wrapped { data } => data,
            CampaignListEnvelope::Nested { data } => data.data,
            CampaignListEnvelope::Unrecognized(_) => Vec::new(),
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

    fn decode(value: Value) -> Vec<Campaign> {
        serde_json::from_value::<CampaignListEnvelope>(value)
            .unwrap()
            .into_campaigns()
    }

    #[test]
    fn test_envelope_bare_array() {
        let campaigns = decode(json!([{"campaign_id": 1, "title": "A"}]));
        assert_eq!(campaigns.len(), 1);
        assert_eq!(campaigns[0].title, "A");
    }

    #[test]
    fn test_envelope_wrapped() {
        let campaigns = decode(json!({"data": [{"campaign_id": 2, "title": "B"}]}));
        assert_eq!(campaigns.len(), 1);
        assert_eq!(campaigns[0].title, "B");
    }

    #[test]
    fn test_envelope_nested() {
        let campaigns =
            decode(json!({"data": {"data": [{"campaign_id": 3, "title": "C"}], "total": 1}}));
        assert_eq!(campaigns.len(), 1);
        assert_eq!(campaigns[0].title, "C");
    }

    #[test]
    fn test_envelope_unrecognized_yields_empty() {
        assert!(decode(json!({"error": "oops"})).is_empty());
        assert!(decode(json!("nope")).is_empty());
    }

    #[test]
    fn test_malformed_record_drops_alone() {
        let campaigns = decode(json!([
            {"campaign_id": 1, "title": "Good"},
            {"campaign_id": 2, "title": {"not": "a string"}},
            {"campaign_id": 3, "title": "Also good"}
        ]));
        let titles: Vec<&str> = campaigns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Good", "Also good"]);
    }

    #[test]
    fn test_id_coalescing() {
        let c: Campaign = serde_json::from_value(json!({"id": "7"})).unwrap();
        assert_eq!(c.id(), Some(&FlexId::Text("7".into())));

        let c: Campaign = serde_json::from_value(json!({"campaign_id": 9})).unwrap();
        assert_eq!(c.id(), Some(&FlexId::Num(9)));

        let c: Campaign = serde_json::from_value(json!({"id": 1, "campaign_id": 2})).unwrap();
        assert_eq!(c.id(), Some(&FlexId::Num(1)));

        let c = Campaign::default();
        assert_eq!(c.id(), None);
    }

    #[test]
    fn test_status_is_case_insensitive_and_open() {
        let c: Campaign = serde_json::from_value(json!({"status": "ACTIVE"})).unwrap();
        assert_eq!(c.status, Some(CampaignStatus::Active));
        assert!(c.is_active());

        let c: Campaign = serde_json::from_value(json!({"status": "Paused"})).unwrap();
        assert_eq!(c.status, Some(CampaignStatus::Other("paused".into())));
        assert!(!c.is_active());
    }

    #[test]
    fn test_tolerant_fields_roundtrip() {
        let c: Campaign = serde_json::from_value(json!({
            "title": "Summer Sale",
            "influencer_category": "[\"Fashion\",\"Lifestyle\"]",
            "reference_images": "[broken",
            "price_per_post": "250000",
            "has_product": 1
        }))
        .unwrap();
        assert_eq!(c.influencer_category, vec!["Fashion", "Lifestyle"]);
        assert!(c.reference_images.is_empty());
        assert_eq!(c.price_per_post, Some(250_000));
        assert!(c.has_product);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-06-01T10:30:00Z").is_some());
        assert!(parse_timestamp("2024-06-01T10:30:00.123Z").is_some());
        assert!(parse_timestamp("2024-06-01T10:30:00").is_some());
        assert!(parse_timestamp("2024-06-01 10:30:00").is_some());
        assert!(parse_timestamp("2024-06-01").is_some());
        assert!(parse_timestamp("yesterday").is_none());

        let early = parse_timestamp("2024-01-01").unwrap();
        let late = parse_timestamp("2024-06-01T00:00:01Z").unwrap();
        assert!(late > early);
    }
}
