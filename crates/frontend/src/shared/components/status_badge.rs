use contracts::domain::campaign::CampaignStatus;
use leptos::prelude::*;

/// Campaign status chip. Active gets the highlighted style, everything
/// else falls back to the muted one.
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<Option<CampaignStatus>>) -> impl IntoView {
    let class = move || {
        if status.with(|s| s.as_ref().is_some_and(CampaignStatus::is_active)) {
            "status-badge status-badge--active"
        } else {
            "status-badge status-badge--muted"
        }
    };
    let label = move || {
        status.with(|s| {
            s.as_ref()
                .map(|s| s.as_str().to_string())
                .unwrap_or_else(|| "unknown".to_string())
        })
    };

    view! { <span class=class>{label}</span> }
}
