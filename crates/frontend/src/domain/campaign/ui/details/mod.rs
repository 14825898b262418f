use contracts::domain::campaign::Campaign;
use leptos::prelude::*;

use crate::shared::api_utils::upload_url;
use crate::shared::date_utils::format_date_numeric;
use crate::shared::format::{format_number_id, format_rupiah};

/// Campaign detail overlay. With an `on_apply` handler the footer gets an
/// Apply button that fires the handler and closes the dialog right away;
/// without one the dialog is read only.
#[component]
pub fn CampaignDetailsModal(
    campaign: Campaign,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] on_apply: Option<Callback<Campaign>>,
) -> impl IntoView {
    let title = campaign.title.clone();
    let banner = campaign.banner_image.as_deref().map(upload_url);
    let has_product = campaign.has_product;
    let product_name = campaign.product_name.clone().unwrap_or_default();
    let product_value = format_rupiah(campaign.product_value.unwrap_or(0));
    let product_desc = campaign.product_desc.clone().unwrap_or_default();
    let category = campaign.campaign_category.clone().unwrap_or_default();
    let influencer_categories = campaign.influencer_category.clone();
    let price = format_rupiah(campaign.price_per_post.unwrap_or(0));
    let status_label = campaign
        .status
        .as_ref()
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let status_class = if campaign.is_active() {
        "campaign-detail__status campaign-detail__status--active"
    } else {
        "campaign-detail__status"
    };
    let dates = format!(
        "{} - {}",
        campaign
            .start_date
            .as_deref()
            .map(format_date_numeric)
            .unwrap_or_default(),
        campaign
            .end_date
            .as_deref()
            .map(format_date_numeric)
            .unwrap_or_default(),
    );
    let min_followers = campaign
        .min_followers
        .map(format_number_id)
        .unwrap_or_else(|| "N/A".to_string());
    let gender = campaign
        .selected_gender
        .clone()
        .filter(|g| !g.is_empty())
        .unwrap_or_else(|| "Any".to_string());
    let age = campaign
        .selected_age
        .clone()
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| "Any".to_string());
    let content_guidelines = campaign.content_guidelines.clone().filter(|g| !g.is_empty());
    let caption_guidelines = campaign.caption_guidelines.clone().filter(|g| !g.is_empty());
    let has_guidelines = content_guidelines.is_some() || caption_guidelines.is_some();
    let reference_images: Vec<String> = campaign
        .reference_images
        .iter()
        .map(|img| upload_url(img))
        .collect();
    let can_apply = campaign.is_active();
    let apply_campaign = campaign;

    view! {
        <div class="modal-overlay">
            <div class="modal-content modal-content--wide">
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>

                <div class="modal-body">
                    {banner.map(|url| view! {
                        <div
                            class="campaign-detail__banner"
                            style=format!("background: url({}) center/cover;", url)
                        ></div>
                    })}

                    <div class="campaign-detail__grid">
                        <div>
                            <h4 class="campaign-detail__section">"Product Information"</h4>

                            {has_product.then(|| view! {
                                <div class="campaign-detail__field">
                                    <div class="campaign-detail__label">"Product Name"</div>
                                    <div class="campaign-detail__value">{product_name}</div>
                                </div>
                                <div class="campaign-detail__field">
                                    <div class="campaign-detail__label">"Product Value"</div>
                                    <div class="campaign-detail__value">{product_value}</div>
                                </div>
                                <div class="campaign-detail__field">
                                    <div class="campaign-detail__label">"Description"</div>
                                    <div class="campaign-detail__value">{product_desc}</div>
                                </div>
                            })}

                            <div class="campaign-detail__field">
                                <div class="campaign-detail__label">"Category"</div>
                                <div class="campaign-detail__value">{category}</div>
                            </div>

                            <div class="campaign-detail__field">
                                <div class="campaign-detail__label">"Influencer Categories"</div>
                                <div class="campaign-detail__chips">
                                    {influencer_categories
                                        .into_iter()
                                        .map(|cat| view! { <span class="chip">{cat}</span> })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>

                        <div>
                            <h4 class="campaign-detail__section">"Campaign Details"</h4>

                            <div class="campaign-detail__field">
                                <div class="campaign-detail__label">"Price Per Post"</div>
                                <div class="campaign-detail__value campaign-detail__value--price">
                                    {price}
                                </div>
                            </div>

                            <div class="campaign-detail__field">
                                <div class="campaign-detail__label">"Status"</div>
                                <div class=status_class>{status_label}</div>
                            </div>

                            <div class="campaign-detail__field">
                                <div class="campaign-detail__label">"Dates"</div>
                                <div class="campaign-detail__value">{dates}</div>
                            </div>

                            <div class="campaign-detail__field">
                                <div class="campaign-detail__label">"Requirements"</div>
                                <div class="campaign-detail__requirements">
                                    <div class="campaign-detail__requirement">
                                        <span>"Min Followers: "</span>
                                        {min_followers}
                                    </div>
                                    <div class="campaign-detail__requirement">
                                        <span>"Gender: "</span>
                                        {gender}
                                    </div>
                                    <div class="campaign-detail__requirement">
                                        <span>"Age: "</span>
                                        {age}
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>

                    {has_guidelines.then(|| view! {
                        <div class="campaign-detail__guidelines">
                            <h4 class="campaign-detail__section">"Guidelines"</h4>
                            {content_guidelines.map(|text| view! {
                                <div class="campaign-detail__field">
                                    <div class="campaign-detail__label">"Content Guidelines"</div>
                                    <div class="campaign-detail__value campaign-detail__value--prewrap">
                                        {text}
                                    </div>
                                </div>
                            })}
                            {caption_guidelines.map(|text| view! {
                                <div class="campaign-detail__field">
                                    <div class="campaign-detail__label">"Caption Guidelines"</div>
                                    <div class="campaign-detail__value campaign-detail__value--prewrap">
                                        {text}
                                    </div>
                                </div>
                            })}
                        </div>
                    })}

                    {(!reference_images.is_empty()).then(|| view! {
                        <div class="campaign-detail__references">
                            <h4 class="campaign-detail__section">"Reference Images"</h4>
                            <div class="campaign-detail__reference-strip">
                                {reference_images
                                    .into_iter()
                                    .map(|url| view! {
                                        <img class="campaign-detail__reference" src=url alt="Reference" />
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    })}

                    <div class="modal-actions">
                        <button class="button button--secondary" on:click=move |_| on_close.run(())>
                            "Close"
                        </button>
                        {on_apply.map(|apply| view! {
                            <button
                                class="button button--primary"
                                disabled=!can_apply
                                on:click=move |_| {
                                    apply.run(apply_campaign.clone());
                                    on_close.run(());
                                }
                            >
                                "Apply Now"
                            </button>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
