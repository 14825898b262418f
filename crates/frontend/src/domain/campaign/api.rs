//! Campaign endpoints.

use contracts::domain::campaign::{Campaign, CampaignListEnvelope};
use gloo_net::http::Request;
use web_sys::AbortSignal;

use crate::shared::api_utils::api_url;

/// Fetch every campaign in one go. Filtering and pagination happen
/// client side, so the request asks for a large page up front.
///
/// Passing an [`AbortSignal`] lets the caller cancel the request when
/// the view unmounts mid flight.
pub async fn fetch_all_campaigns(abort: Option<AbortSignal>) -> Result<Vec<Campaign>, String> {
    let url = api_url("/campaigns?limit=1000&offset=0");

    let response = Request::get(&url)
        .abort_signal(abort.as_ref())
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to load campaigns: HTTP {}",
            response.status()
        ));
    }

    let envelope: CampaignListEnvelope = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse campaigns response: {}", e))?;

    Ok(envelope.into_campaigns())
}
