use std::collections::BTreeSet;

use contracts::domain::application::ApplyRequest;
use contracts::domain::campaign::Campaign;
use contracts::shared::ids::FlexId;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

use crate::domain::application::api as application_api;
use crate::domain::campaign::api;
use crate::domain::campaign::discovery::{
    apply_filters, clamp_page, extract_campaign_categories, extract_influencer_categories,
    paginate, sort_campaigns, CampaignFilter, CategorySelection, StatusFilter,
};
use crate::domain::campaign::ui::details::CampaignDetailsModal;
use crate::shared::api_utils::upload_url;
use crate::shared::components::{CategoryFilter, PaginationControls, SearchInput, StatusBadge};
use crate::shared::date_utils::format_date_short;
use crate::shared::format::format_rupiah;
use crate::shared::icons::{category_icon, icon};
use crate::system::session::use_session;

/// Application body for a campaign, `None` when the record has no id.
fn apply_request_for(student_id: FlexId, campaign: &Campaign) -> Option<ApplyRequest> {
    let campaign_id = campaign.id().cloned()?;
    Some(ApplyRequest {
        campaign_id,
        student_id,
        application_notes: format!("Applying to {}", campaign.title),
    })
}

#[component]
pub fn BrowseCampaignsPage() -> impl IntoView {
    let (campaigns, set_campaigns) = signal(Vec::<Campaign>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let (search_text, set_search_text) = signal(String::new());
    let (status_filter, set_status_filter) = signal(StatusFilter::All);
    let campaign_selection = RwSignal::new(CategorySelection::default());
    let influencer_selection = RwSignal::new(CategorySelection::default());

    let (current_page, set_current_page) = signal(1usize);
    let (page_size, set_page_size) = signal(6usize);

    let (selected_campaign, set_selected_campaign) = signal(None::<Campaign>);

    let (session, _) = use_session();

    // A later load supersedes an earlier one; the stale response is dropped.
    let load_generation = StoredValue::new(0u64);
    let abort_controller = StoredValue::new_local(None::<AbortController>);

    let load_campaigns = move || {
        set_loading.set(true);
        set_error.set(None);

        let generation = load_generation.get_value() + 1;
        load_generation.set_value(generation);

        if let Some(previous) = abort_controller.get_value() {
            previous.abort();
        }
        let controller = AbortController::new().ok();
        let abort = controller.as_ref().map(|c| c.signal());
        abort_controller.set_value(controller);

        spawn_local(async move {
            let result = api::fetch_all_campaigns(abort).await;
            if load_generation.try_get_value() != Some(generation) {
                return;
            }
            match result {
                Ok(data) => {
                    set_campaigns.set(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    log!("Failed to fetch campaigns: {:?}", e);
                    set_campaigns.set(Vec::new());
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if load_generation.get_value() == 0 {
            load_campaigns();
        }
    });

    on_cleanup(move || {
        if let Some(controller) = abort_controller.try_get_value().flatten() {
            controller.abort();
        }
    });

    // Seed both selections with every known category once campaigns land.
    // The filters stay inert until the user hits Apply.
    Effect::new(move |_| {
        let all = campaigns.with(|list| extract_campaign_categories(list));
        if !all.is_empty() && campaign_selection.with_untracked(|sel| sel.selected.is_empty()) {
            campaign_selection.update(|sel| sel.seed(&all));
        }
    });
    Effect::new(move |_| {
        let all = campaigns.with(|list| extract_influencer_categories(list));
        if !all.is_empty() && influencer_selection.with_untracked(|sel| sel.selected.is_empty()) {
            influencer_selection.update(|sel| sel.seed(&all));
        }
    });

    // Page reset keys off the applied flags, not the selection contents,
    // so reworking a dropdown without applying keeps the current page.
    let campaign_filter_applied = Memo::new(move |_| campaign_selection.with(|sel| sel.applied));
    let influencer_filter_applied =
        Memo::new(move |_| influencer_selection.with(|sel| sel.applied));

    Effect::new(move |_| {
        search_text.track();
        status_filter.track();
        campaign_filter_applied.track();
        influencer_filter_applied.track();
        page_size.track();
        set_current_page.set(1);
    });

    let filtered_campaigns = Memo::new(move |_| {
        let mut list = campaigns.get();
        sort_campaigns(&mut list);
        let filter = CampaignFilter {
            search_text: search_text.get(),
            status: status_filter.get(),
            campaign_categories: campaign_selection.get(),
            influencer_categories: influencer_selection.get(),
        };
        apply_filters(&list, &filter)
    });

    let current_page_clamped = Memo::new(move |_| {
        filtered_campaigns.with(|list| clamp_page(current_page.get(), list.len(), page_size.get()))
    });

    let page_data = Memo::new(move |_| {
        filtered_campaigns
            .with(|list| paginate(list, current_page_clamped.get(), page_size.get()))
    });

    let handle_apply = Callback::new(move |campaign: Campaign| {
        let state = session.get_untracked();
        if !state.is_logged_in() {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Please login to apply");
            }
            return;
        }
        let Some(student_id) = state.user_id().cloned() else {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .alert_with_message("Student profile not found. Please complete your profile.");
            }
            return;
        };
        let title = campaign.title.clone();
        let Some(request) = apply_request_for(student_id, &campaign) else {
            log!("Campaign record has no id, cannot apply");
            return;
        };
        spawn_local(async move {
            match application_api::apply_to_campaign(&request).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window
                            .alert_with_message(&format!("Successfully applied to {}!", title));
                    }
                }
                Err(e) => {
                    log!("Failed to apply: {:?}", e);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&e);
                    }
                }
            }
        });
    });

    let go_to_page = Callback::new(move |page: usize| set_current_page.set(page));
    let change_page_size = Callback::new(move |size: usize| {
        set_page_size.set(size);
        set_current_page.set(1);
    });

    let apply_campaign_categories = Callback::new(move |selected: BTreeSet<String>| {
        campaign_selection.update(|sel| sel.apply(selected));
    });
    let apply_influencer_categories = Callback::new(move |selected: BTreeSet<String>| {
        influencer_selection.update(|sel| sel.apply(selected));
    });

    view! {
        <div class="page browse-page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Browse Campaigns"</h1>
                    <p class="page__subtitle">"Discover and apply for campaigns that match your profile"</p>
                </div>
            </div>

            <div class="browse-page__search">
                <SearchInput
                    value=search_text
                    on_change=Callback::new(move |value: String| set_search_text.set(value))
                    placeholder="Search campaigns..."
                />
            </div>

            <div class="browse-page__filters">
                <select
                    class="status-select"
                    prop:value=move || status_filter.get().as_str()
                    on:change=move |ev| {
                        set_status_filter.set(StatusFilter::parse(&event_target_value(&ev)));
                    }
                >
                    <option value="all">"All Status"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>

                <CategoryFilter
                    label="Campaign Categories"
                    options=Signal::derive(move || {
                        campaigns.with(|list| extract_campaign_categories(list))
                    })
                    selected=Signal::derive(move || {
                        campaign_selection.with(|sel| sel.selected.clone())
                    })
                    on_apply=apply_campaign_categories
                />

                <CategoryFilter
                    label="Influencer Categories"
                    options=Signal::derive(move || {
                        campaigns.with(|list| extract_influencer_categories(list))
                    })
                    selected=Signal::derive(move || {
                        influencer_selection.with(|sel| sel.selected.clone())
                    })
                    on_apply=apply_influencer_categories
                />
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">
                    <span>{e}</span>
                    <button class="button button--secondary" on:click=move |_| load_campaigns()>
                        {icon("refresh")}
                        " Try Again"
                    </button>
                </div>
            })}

            <Show when=move || loading.get()>
                <div class="campaign-grid">
                    {(0..5)
                        .map(|_| view! {
                            <div class="campaign-card campaign-card--skeleton">
                                <div class="skeleton-block skeleton-block--banner"></div>
                                <div class="campaign-card__body">
                                    <div class="skeleton-block skeleton-block--chip"></div>
                                    <div class="skeleton-block skeleton-block--title"></div>
                                    <div class="skeleton-block skeleton-block--line"></div>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </Show>

            <Show when=move || !loading.get() && page_data.with(|p| p.items.is_empty())>
                <div class="empty-state">
                    {icon("search")}
                    <h3>"No campaigns found"</h3>
                    <p>"Try adjusting your search or filters"</p>
                </div>
            </Show>

            <Show when=move || !loading.get() && page_data.with(|p| !p.items.is_empty())>
                <div class="campaign-grid">
                    {move || {
                        page_data
                            .get()
                            .items
                            .into_iter()
                            .map(|campaign| campaign_card(campaign, set_selected_campaign, handle_apply))
                            .collect_view()
                    }}
                </div>
            </Show>

            <Show when=move || !loading.get() && page_data.with(|p| p.total_items > 0)>
                <PaginationControls
                    current_page=current_page_clamped
                    total_pages=Signal::derive(move || page_data.with(|p| p.total_pages))
                    total_items=Signal::derive(move || page_data.with(|p| p.total_items))
                    page_size=page_size
                    on_page_change=go_to_page
                    on_page_size_change=change_page_size
                />
            </Show>

            {move || selected_campaign.get().map(|campaign| view! {
                <CampaignDetailsModal
                    campaign=campaign
                    on_close=Callback::new(move |_| set_selected_campaign.set(None))
                    on_apply=handle_apply
                />
            })}
        </div>
    }
}

fn campaign_card(
    campaign: Campaign,
    set_selected_campaign: WriteSignal<Option<Campaign>>,
    handle_apply: Callback<Campaign>,
) -> impl IntoView {
    let banner_style = campaign
        .banner_image
        .as_deref()
        .map(|img| format!("background: url({}) center/cover;", upload_url(img)))
        .unwrap_or_else(|| {
            "background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);".to_string()
        });
    let status = campaign.status.clone();
    let rating = campaign.rating.filter(|r| *r != 0.0);
    let category_glyph = category_icon(campaign.campaign_category.as_deref().unwrap_or(""));
    let category_label = campaign
        .campaign_category
        .clone()
        .unwrap_or_else(|| "General".to_string());
    let title = campaign.title.clone();
    let price_label = match campaign.price_per_post {
        Some(price) if price != 0 => format_rupiah(price),
        _ => "TBD".to_string(),
    };
    let influencer_label = campaign.influencer_count.unwrap_or(0).to_string();
    let date_range = campaign
        .start_date
        .as_deref()
        .zip(campaign.end_date.as_deref())
        .map(|(start, end)| format!("{} - {}", format_date_short(start), format_date_short(end)));
    let can_apply = campaign.is_active();
    let details_campaign = campaign.clone();
    let apply_campaign = campaign;

    view! {
        <div class="campaign-card">
            <div class="campaign-card__banner" style=banner_style>
                <StatusBadge status=status />
                {rating.map(|r| view! {
                    <div class="campaign-card__rating">
                        {icon("star")}
                        {format!("{}", r)}
                    </div>
                })}
            </div>

            <div class="campaign-card__body">
                <div class="campaign-card__category">
                    {icon(category_glyph)}
                    <span>{category_label}</span>
                </div>
                <h3 class="campaign-card__title">{title}</h3>

                <div class="campaign-card__stats">
                    <div class="campaign-card__stat">
                        {icon("banknote")}
                        <div>
                            <div class="campaign-card__stat-label">"Price"</div>
                            <div class="campaign-card__stat-value">{price_label}</div>
                        </div>
                    </div>
                    <div class="campaign-card__stat">
                        {icon("users")}
                        <div>
                            <div class="campaign-card__stat-label">"Influencers"</div>
                            <div class="campaign-card__stat-value">{influencer_label}</div>
                        </div>
                    </div>
                </div>

                {date_range.map(|range| view! {
                    <div class="campaign-card__dates">
                        {icon("calendar")}
                        <span>{range}</span>
                    </div>
                })}
            </div>

            <div class="campaign-card__actions">
                <button
                    class="button button--secondary"
                    on:click=move |_| set_selected_campaign.set(Some(details_campaign.clone()))
                >
                    "Details"
                </button>
                <button
                    class="button button--primary"
                    disabled=!can_apply
                    on:click=move |_| handle_apply.run(apply_campaign.clone())
                >
                    "Apply"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_request_carries_ids_and_notes() {
        let campaign = Campaign {
            campaign_id: Some(FlexId::Num(7)),
            title: "Summer Sale".to_string(),
            ..Campaign::default()
        };
        let request = apply_request_for(FlexId::Num(3), &campaign).unwrap();
        assert_eq!(request.campaign_id, FlexId::Num(7));
        assert_eq!(request.student_id, FlexId::Num(3));
        assert_eq!(request.application_notes, "Applying to Summer Sale");
    }

    #[test]
    fn test_apply_request_requires_a_campaign_id() {
        assert!(apply_request_for(FlexId::Num(3), &Campaign::default()).is_none());
    }
}
