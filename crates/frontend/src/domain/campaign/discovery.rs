//! Campaign discovery engine
//!
//! Pure functions behind the browse view: newest-first ordering, the
//! four-predicate filter, category extraction for the filter dropdowns
//! and 1-based pagination. Everything works on plain slices so the whole
//! pipeline is testable without a DOM.

use contracts::domain::campaign::{Campaign, CampaignStatus};
use contracts::shared::ids::FlexId;
use std::collections::BTreeSet;

/// Status dropdown choices. `All` passes everything; the concrete
/// choices compare against the normalized decoded status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    /// Parse the select value; anything unknown falls back to `All`.
    pub fn parse(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    pub fn matches(&self, status: Option<&CampaignStatus>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => matches!(status, Some(CampaignStatus::Active)),
            StatusFilter::Inactive => matches!(status, Some(CampaignStatus::Inactive)),
        }
    }
}

/// One category dimension of the filter state.
///
/// `selected` is seeded with every known category as a display default,
/// but the dimension stays inert until the user explicitly applies it:
/// with `applied == false` every campaign passes regardless of
/// `selected`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySelection {
    pub selected: BTreeSet<String>,
    pub applied: bool,
}

impl CategorySelection {
    /// Commit a selection chosen in the dropdown.
    pub fn apply(&mut self, selected: BTreeSet<String>) {
        self.selected = selected;
        self.applied = true;
    }

    /// Seed the display default without turning the filter on. Only an
    /// empty selection is seeded, so a user choice is never overwritten.
    pub fn seed(&mut self, categories: &[String]) {
        if !categories.is_empty() && self.selected.is_empty() {
            self.selected = categories.iter().cloned().collect();
            self.applied = false;
        }
    }

    fn allows_single(&self, category: Option<&str>) -> bool {
        if !self.applied {
            return true;
        }
        category.is_some_and(|c| self.selected.contains(c))
    }

    fn allows_any<'a>(&self, categories: impl IntoIterator<Item = &'a str>) -> bool {
        if !self.applied {
            return true;
        }
        categories.into_iter().any(|c| self.selected.contains(c))
    }
}

/// Complete filter state for the browse view. All four predicates must
/// pass for a campaign to stay in the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignFilter {
    pub search_text: String,
    pub status: StatusFilter,
    pub campaign_categories: CategorySelection,
    pub influencer_categories: CategorySelection,
}

impl CampaignFilter {
    pub fn matches(&self, campaign: &Campaign) -> bool {
        self.matches_lowered(campaign, &self.search_text.to_lowercase())
    }

    /// Shared predicate body; `search` is the already lower-cased query.
    fn matches_lowered(&self, campaign: &Campaign, search: &str) -> bool {
        let match_search = campaign.title.to_lowercase().contains(search);
        let match_status = self.status.matches(campaign.status.as_ref());
        let match_campaign_category = self
            .campaign_categories
            .allows_single(campaign.campaign_category.as_deref());
        let match_influencer_category = self
            .influencer_categories
            .allows_any(campaign.influencer_category.iter().map(String::as_str));
        match_search && match_status && match_campaign_category && match_influencer_category
    }
}

/// Keep the campaigns matching `filter`, preserving input order. The
/// query is lower-cased once here, not per row.
pub fn apply_filters(campaigns: &[Campaign], filter: &CampaignFilter) -> Vec<Campaign> {
    let search = filter.search_text.to_lowercase();
    campaigns
        .iter()
        .filter(|c| filter.matches_lowered(c, &search))
        .cloned()
        .collect()
}

/// Newest first: by creation time when both rows carry one, otherwise by
/// campaign row id. Unparseable timestamps count as missing.
pub fn sort_campaigns(campaigns: &mut [Campaign]) {
    campaigns.sort_by(|a, b| match (a.created_timestamp(), b.created_timestamp()) {
        (Some(ta), Some(tb)) => tb.cmp(&ta),
        _ => sort_id(b).cmp(&sort_id(a)),
    });
}

/// Ordering key for rows without timestamps: the `campaign_id` column
/// when present, the generic `id` otherwise. Non-numeric or missing ids
/// sort as zero.
fn sort_id(campaign: &Campaign) -> i64 {
    campaign
        .campaign_id
        .as_ref()
        .or(campaign.id.as_ref())
        .and_then(FlexId::as_i64)
        .unwrap_or(0)
}

/// Distinct campaign categories, sorted; empty labels are dropped.
pub fn extract_campaign_categories(campaigns: &[Campaign]) -> Vec<String> {
    let set: BTreeSet<&str> = campaigns
        .iter()
        .filter_map(|c| c.campaign_category.as_deref())
        .filter(|c| !c.is_empty())
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// Distinct influencer categories across all campaigns, sorted.
pub fn extract_influencer_categories(campaigns: &[Campaign]) -> Vec<String> {
    let set: BTreeSet<&str> = campaigns
        .iter()
        .flat_map(|c| c.influencer_category.iter())
        .map(String::as_str)
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// One page of results plus the totals the pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Slice out 1-based `page`. Out-of-range pages yield empty items, page
/// 0 behaves like page 1, and a zero page size yields no pages at all.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_items = items.len();
    if page_size == 0 {
        return Page {
            items: Vec::new(),
            total_items,
            total_pages: 0,
        };
    }
    let total_pages = (total_items + page_size - 1) / page_size;
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    Page {
        items: items[start..end].to_vec(),
        total_items,
        total_pages,
    }
}

/// Highest page that still shows content, at least 1 so the pager always
/// has a current page to highlight.
pub fn clamp_page(page: usize, total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    let total_pages = (total_items + page_size - 1) / page_size;
    page.max(1).min(total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(id: i64, title: &str, status: &str, created_at: Option<&str>) -> Campaign {
        Campaign {
            campaign_id: Some(FlexId::Num(id)),
            title: title.to_string(),
            status: Some(CampaignStatus::from(status.to_string())),
            created_at: created_at.map(str::to_string),
            ..Campaign::default()
        }
    }

    fn with_categories(
        mut base: Campaign,
        campaign_category: &str,
        influencer: &[&str],
    ) -> Campaign {
        base.campaign_category = Some(campaign_category.to_string());
        base.influencer_category = influencer.iter().map(|s| s.to_string()).collect();
        base
    }

    fn sample() -> Vec<Campaign> {
        vec![
            with_categories(
                campaign(1, "Summer Sale", "active", Some("2024-06-01")),
                "Beauty & Fashion",
                &["Fashion", "Lifestyle"],
            ),
            with_categories(
                campaign(2, "Winter Promo", "active", Some("2024-01-01")),
                "Technology",
                &["Tech"],
            ),
            with_categories(
                campaign(3, "Sale Bonanza", "inactive", Some("2024-03-01")),
                "Food & Beverages",
                &["Food"],
            ),
        ]
    }

    #[test]
    fn test_filtered_results_are_a_subset_and_stable() {
        let campaigns = sample();
        let filter = CampaignFilter {
            search_text: "sale".to_string(),
            ..CampaignFilter::default()
        };

        let once = apply_filters(&campaigns, &filter);
        assert!(once.iter().all(|c| campaigns.contains(c)));

        let twice = apply_filters(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let campaigns = sample();
        let mut filter = CampaignFilter {
            search_text: "SALE".to_string(),
            ..CampaignFilter::default()
        };
        let found = apply_filters(&campaigns, &filter);
        let titles: Vec<&str> = found.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Summer Sale", "Sale Bonanza"]);

        filter.search_text = String::new();
        assert_eq!(apply_filters(&campaigns, &filter).len(), 3);
    }

    #[test]
    fn test_matches_and_apply_filters_agree() {
        let campaigns = sample();
        let filter = CampaignFilter {
            search_text: "SaLe".to_string(),
            ..CampaignFilter::default()
        };
        let row_by_row: Vec<Campaign> = campaigns
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        assert_eq!(row_by_row.len(), 2);
        assert_eq!(apply_filters(&campaigns, &filter), row_by_row);
    }

    #[test]
    fn test_status_filter_choices() {
        let campaigns = sample();

        let all = CampaignFilter::default();
        assert_eq!(apply_filters(&campaigns, &all).len(), 3);

        let active = CampaignFilter {
            status: StatusFilter::Active,
            ..CampaignFilter::default()
        };
        assert_eq!(apply_filters(&campaigns, &active).len(), 2);

        let inactive = CampaignFilter {
            status: StatusFilter::Inactive,
            ..CampaignFilter::default()
        };
        let found = apply_filters(&campaigns, &inactive);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Sale Bonanza");

        // Decode normalizes casing, so SCREAMING statuses still match.
        let shouting = campaign(9, "Loud", "ACTIVE", None);
        assert!(active.matches(&shouting));
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!(StatusFilter::parse("active"), StatusFilter::Active);
        assert_eq!(StatusFilter::parse("inactive"), StatusFilter::Inactive);
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(StatusFilter::parse("garbage"), StatusFilter::All);
    }

    #[test]
    fn test_unapplied_category_selection_is_inert() {
        let campaigns = sample();
        let mut filter = CampaignFilter::default();

        // Seeded with every category, as after load, but never applied.
        filter
            .campaign_categories
            .seed(&extract_campaign_categories(&campaigns));
        filter
            .influencer_categories
            .seed(&extract_influencer_categories(&campaigns));

        assert_eq!(apply_filters(&campaigns, &filter).len(), 3);

        // Even a campaign with no categories at all passes while inert.
        let bare = campaign(10, "Bare", "active", None);
        assert!(filter.matches(&bare));
    }

    #[test]
    fn test_applied_campaign_category_selection_filters() {
        let campaigns = sample();
        let mut filter = CampaignFilter::default();
        filter
            .campaign_categories
            .apply(["Technology".to_string()].into());

        let found = apply_filters(&campaigns, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Winter Promo");

        // A campaign without a category never matches an applied filter.
        let bare = campaign(10, "Bare", "active", None);
        assert!(!filter.matches(&bare));
    }

    #[test]
    fn test_applied_influencer_selection_requires_overlap() {
        let campaigns = sample();
        let mut filter = CampaignFilter::default();
        filter
            .influencer_categories
            .apply(["Lifestyle".to_string(), "Food".to_string()].into());

        let titles: Vec<String> = apply_filters(&campaigns, &filter)
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["Summer Sale", "Sale Bonanza"]);

        // An empty influencer list has no overlap with anything.
        let bare = campaign(10, "Bare", "active", None);
        assert!(!filter.matches(&bare));
    }

    #[test]
    fn test_seed_does_not_overwrite_user_selection() {
        let mut selection = CategorySelection::default();
        selection.apply(["Tech".to_string()].into());
        selection.seed(&["Tech".to_string(), "Food".to_string()]);
        assert_eq!(selection.selected.len(), 1);
        assert!(selection.applied);
    }

    #[test]
    fn test_summer_sale_scenario() {
        let campaigns = sample();
        let filter = CampaignFilter {
            search_text: "sale".to_string(),
            status: StatusFilter::Active,
            ..CampaignFilter::default()
        };
        let found = apply_filters(&campaigns, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Summer Sale");
    }

    #[test]
    fn test_sort_newest_first_by_timestamp() {
        let mut campaigns = vec![
            campaign(1, "January", "active", Some("2024-01-01")),
            campaign(2, "June", "active", Some("2024-06-01")),
        ];
        sort_campaigns(&mut campaigns);
        assert_eq!(campaigns[0].title, "June");
        assert_eq!(campaigns[1].title, "January");
    }

    #[test]
    fn test_sort_falls_back_to_numeric_id() {
        let mut campaigns = vec![
            campaign(9, "Nine", "active", None),
            campaign(11, "Eleven", "active", None),
        ];
        // String ids coerce numerically, so "10" lands between 9 and 11.
        campaigns.push(Campaign {
            campaign_id: Some(FlexId::Text("10".into())),
            title: "Ten".to_string(),
            ..Campaign::default()
        });
        sort_campaigns(&mut campaigns);
        let titles: Vec<&str> = campaigns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Eleven", "Ten", "Nine"]);
    }

    #[test]
    fn test_sort_prefers_campaign_row_id_over_generic_id() {
        // The two id columns disagree; ordering follows campaign_id.
        let mut campaigns = vec![
            Campaign {
                id: Some(FlexId::Num(99)),
                campaign_id: Some(FlexId::Num(1)),
                title: "One".to_string(),
                ..Campaign::default()
            },
            Campaign {
                id: Some(FlexId::Num(1)),
                campaign_id: Some(FlexId::Num(2)),
                title: "Two".to_string(),
                ..Campaign::default()
            },
        ];
        sort_campaigns(&mut campaigns);
        assert_eq!(campaigns[0].title, "Two");
        assert_eq!(campaigns[1].title, "One");
    }

    #[test]
    fn test_sort_mixed_missing_timestamps_uses_ids() {
        let mut campaigns = vec![
            campaign(1, "Dated", "active", Some("2024-06-01")),
            campaign(2, "Undated", "active", None),
        ];
        sort_campaigns(&mut campaigns);
        assert_eq!(campaigns[0].title, "Undated");
    }

    #[test]
    fn test_extract_categories_sorted_and_deduplicated() {
        let campaigns = vec![
            with_categories(campaign(1, "A", "active", None), "Tech", &["Fashion", "Tech"]),
            with_categories(campaign(2, "B", "active", None), "Beauty", &["Tech"]),
            with_categories(campaign(3, "C", "active", None), "Tech", &[]),
            with_categories(campaign(4, "D", "active", None), "", &["Anime"]),
        ];
        assert_eq!(extract_campaign_categories(&campaigns), vec!["Beauty", "Tech"]);
        assert_eq!(
            extract_influencer_categories(&campaigns),
            vec!["Anime", "Fashion", "Tech"]
        );
    }

    #[test]
    fn test_paginate_13_items_pages_of_6() {
        let items: Vec<usize> = (1..=13).collect();

        let first = paginate(&items, 1, 6);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_items, 13);
        assert_eq!(first.items, (1..=6).collect::<Vec<_>>());

        let second = paginate(&items, 2, 6);
        assert_eq!(second.items, (7..=12).collect::<Vec<_>>());

        let third = paginate(&items, 3, 6);
        assert_eq!(third.items, vec![13]);
    }

    #[test]
    fn test_paginate_edge_cases() {
        let items: Vec<usize> = (1..=13).collect();

        let beyond = paginate(&items, 5, 6);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_pages, 3);
        assert_eq!(beyond.total_items, 13);

        let zeroth = paginate(&items, 0, 6);
        assert_eq!(zeroth.items, (1..=6).collect::<Vec<_>>());

        let no_size = paginate(&items, 1, 0);
        assert!(no_size.items.is_empty());
        assert_eq!(no_size.total_pages, 0);

        let empty = paginate(&Vec::<usize>::new(), 1, 6);
        assert!(empty.items.is_empty());
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(5, 13, 6), 3);
        assert_eq!(clamp_page(2, 13, 6), 2);
        assert_eq!(clamp_page(0, 13, 6), 1);
        assert_eq!(clamp_page(4, 0, 6), 1);
        assert_eq!(clamp_page(4, 13, 0), 1);
    }

    #[test]
    fn test_filter_runs_on_decoded_payloads() {
        let envelope: contracts::domain::campaign::CampaignListEnvelope =
            serde_json::from_value(serde_json::json!({
                "data": [
                    {
                        "campaign_id": 1,
                        "title": "Encoded",
                        "status": "active",
                        "influencer_category": "[\"Gaming\"]"
                    },
                    {
                        "campaign_id": 2,
                        "title": "Plain",
                        "status": "active",
                        "influencer_category": ["Food"]
                    }
                ]
            }))
            .unwrap();
        let campaigns = envelope.into_campaigns();

        let mut filter = CampaignFilter::default();
        filter.influencer_categories.apply(["Gaming".to_string()].into());

        let found = apply_filters(&campaigns, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Encoded");
    }
}
