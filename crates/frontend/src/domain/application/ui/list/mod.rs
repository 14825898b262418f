use contracts::domain::application::{ApplicationStatus, CampaignApplication};
use contracts::domain::campaign::Campaign;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::application::api;
use crate::domain::campaign::ui::details::CampaignDetailsModal;
use crate::layout::{ActivePage, AppContext};
use crate::shared::date_utils::format_date_numeric;
use crate::shared::format::format_rupiah;
use crate::system::session::use_session;

fn translate_status(status: Option<&ApplicationStatus>) -> String {
    match status {
        Some(ApplicationStatus::Accepted) => "Diterima".to_string(),
        Some(ApplicationStatus::Paid) => "Dibayar".to_string(),
        Some(ApplicationStatus::Rejected) => "Ditolak".to_string(),
        Some(ApplicationStatus::Cancelled) => "Dibatalkan".to_string(),
        Some(ApplicationStatus::Pending) => "Menunggu".to_string(),
        Some(ApplicationStatus::Other(s)) => s.clone(),
        None => "-".to_string(),
    }
}

fn status_chip_class(status: Option<&ApplicationStatus>) -> &'static str {
    match status {
        Some(ApplicationStatus::Accepted) | Some(ApplicationStatus::Paid) => "chip chip--success",
        Some(ApplicationStatus::Rejected) => "chip chip--error",
        Some(ApplicationStatus::Cancelled) => "chip chip--default",
        Some(ApplicationStatus::Pending) => "chip chip--warning",
        _ => "chip chip--primary",
    }
}

#[component]
pub fn MyApplicationsPage() -> impl IntoView {
    let (applications, set_applications) = signal(Vec::<CampaignApplication>::new());
    let (loading, set_loading) = signal(true);
    let (selected_campaign, set_selected_campaign) = signal(None::<Campaign>);

    let ctx = use_context::<AppContext>().expect("AppContext not found in component tree");
    let (session, _) = use_session();

    let fetch_applications = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_my_applications().await {
                Ok(data) => {
                    set_applications.set(data);
                    set_loading.set(false);
                }
                Err(e) => {
                    log!("Failed to fetch applications: {:?}", e);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Gagal memuat lamaran");
                    }
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if session.with_untracked(|s| s.is_logged_in()) {
            fetch_applications();
        } else {
            set_loading.set(false);
        }
    });

    let handle_details = Callback::new(move |app: CampaignApplication| {
        set_selected_campaign.set(Some(app.campaign().clone()));
    });

    let handle_cancel = Callback::new(move |app: CampaignApplication| {
        let Some(id) = app.id().cloned() else {
            return;
        };
        let confirmed = {
            if let Some(win) = web_sys::window() {
                win.confirm_with_message(
                    "Apakah Anda yakin ingin membatalkan lamaran Anda? Tindakan ini tidak dapat dibatalkan.",
                )
                .unwrap_or(false)
            } else {
                false
            }
        };
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::cancel_application(&id).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Lamaran dibatalkan");
                    }
                    fetch_applications();
                }
                Err(e) => {
                    log!("Failed to cancel application: {:?}", e);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Gagal membatalkan lamaran");
                    }
                }
            }
        });
    });

    view! {
        <div class="page applications-page">
            <div class="page__header">
                <div>
                    <h1 class="page__title">"Lamaran Saya"</h1>
                    <p class="page__subtitle">"Lacak status lamaran kampanye Anda"</p>
                </div>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="loading-state">
                            <div class="spinner"></div>
                        </div>
                    }
                    .into_any()
                } else if applications.with(|list| list.is_empty()) {
                    view! {
                        <div class="empty-state">
                            <h3>"Anda belum melamar kampanye apa pun."</h3>
                            <button
                                class="button button--primary"
                                on:click=move |_| ctx.active_page.set(ActivePage::Browse)
                            >
                                "Jelajahi Kampanye"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="data-table__wrap">
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Kampanye"</th>
                                        <th>"Kategori"</th>
                                        <th>"Status"</th>
                                        <th>"Tanggal Melamar"</th>
                                        <th class="data-table__actions">"Aksi"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {applications
                                        .get()
                                        .into_iter()
                                        .map(|app| application_row(app, handle_details, handle_cancel))
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }
            }}

            {move || selected_campaign.get().map(|campaign| view! {
                <CampaignDetailsModal
                    campaign=campaign
                    on_close=Callback::new(move |_| set_selected_campaign.set(None))
                />
            })}
        </div>
    }
}

fn application_row(
    app: CampaignApplication,
    on_details: Callback<CampaignApplication>,
    on_cancel: Callback<CampaignApplication>,
) -> impl IntoView {
    let title = app.display_title();
    let price_caption = app
        .campaign()
        .price_per_post
        .filter(|p| *p != 0)
        .map(|p| format!("{} / post", format_rupiah(p)));
    let category = app
        .campaign()
        .campaign_category
        .clone()
        .unwrap_or_else(|| "Kampanye".to_string());
    let status_label = translate_status(app.application_status.as_ref());
    let status_class = status_chip_class(app.application_status.as_ref());
    let applied_date = app
        .applied_date()
        .map(format_date_numeric)
        .unwrap_or_else(|| "-".to_string());
    let can_cancel = app.can_cancel();
    let cancel_app = app.clone();
    let details_app = app;

    view! {
        <tr class="data-table__row">
            <td>
                <div class="data-table__primary">{title}</div>
                {price_caption.map(|caption| view! {
                    <div class="data-table__caption">{caption}</div>
                })}
            </td>
            <td>
                <span class="chip chip--outline">{category}</span>
            </td>
            <td>
                <span class=status_class>{status_label}</span>
            </td>
            <td>{applied_date}</td>
            <td class="data-table__actions">
                {can_cancel.then(|| view! {
                    <button
                        class="button button--danger-outline"
                        on:click=move |_| on_cancel.run(cancel_app.clone())
                    >
                        "Batal"
                    </button>
                })}
                <button
                    class="button button--outline"
                    on:click=move |_| on_details.run(details_app.clone())
                >
                    "Detail"
                </button>
            </td>
        </tr>
    }
}
