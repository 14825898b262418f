//! Application endpoints.

use contracts::domain::application::{
    ApplicationListEnvelope, ApplicationStatus, ApplyRequest, CampaignApplication,
    StatusUpdateRequest,
};
use contracts::shared::ids::FlexId;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Submit an application for a campaign.
pub async fn apply_to_campaign(request: &ApplyRequest) -> Result<(), String> {
    let url = api_url("/campaign-users");

    let response = Request::post(&url)
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to apply: HTTP {}", response.status()));
    }

    Ok(())
}

/// Fetch the current student's applications.
pub async fn fetch_my_applications() -> Result<Vec<CampaignApplication>, String> {
    let url = api_url("/campaign-users");

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to load applications: HTTP {}",
            response.status()
        ));
    }

    let envelope: ApplicationListEnvelope = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse applications response: {}", e))?;

    Ok(envelope.into_applications())
}

/// Withdraw a pending application by flipping its status to cancelled.
pub async fn cancel_application(id: &FlexId) -> Result<(), String> {
    let url = api_url(&format!("/campaign-users/{}", id));
    let body = StatusUpdateRequest {
        application_status: ApplicationStatus::Cancelled,
    };

    let response = Request::put(&url)
        .header("Accept", "application/json")
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to cancel application: HTTP {}",
            response.status()
        ));
    }

    Ok(())
}
