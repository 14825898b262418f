use leptos::prelude::*;

use crate::domain::application::ui::list::MyApplicationsPage;
use crate::domain::campaign::ui::browse::BrowseCampaignsPage;
use crate::system::session::{context, use_session};

/// Top-level pages reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivePage {
    #[default]
    Browse,
    Applications,
}

/// App-wide UI state shared via context.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub active_page: RwSignal<ActivePage>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(ActivePage::default()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application shell: top bar with navigation plus the active page.
#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found in component tree");
    let (session, set_session) = use_session();

    let nav_class = move |page: ActivePage| {
        if ctx.active_page.get() == page {
            "nav-button nav-button--active"
        } else {
            "nav-button"
        }
    };

    view! {
        <div class="app-layout">
            <header class="app-topbar">
                <div class="app-brand">"Influent"</div>
                <nav class="app-nav">
                    <button
                        class=move || nav_class(ActivePage::Browse)
                        on:click=move |_| ctx.active_page.set(ActivePage::Browse)
                    >
                        "Browse Campaigns"
                    </button>
                    <button
                        class=move || nav_class(ActivePage::Applications)
                        on:click=move |_| ctx.active_page.set(ActivePage::Applications)
                    >
                        "My Collaborations"
                    </button>
                </nav>
                <div class="app-user">
                    <span class="app-user__name">
                        {move || {
                            session
                                .get()
                                .user
                                .map(|u| u.display_name().to_string())
                                .unwrap_or_else(|| "Guest".to_string())
                        }}
                    </span>
                    <Show when=move || session.get().is_logged_in()>
                        <button
                            class="app-user__logout"
                            on:click=move |_| context::do_logout(set_session)
                        >
                            "Log Out"
                        </button>
                    </Show>
                </div>
            </header>

            <main class="app-main">
                {move || match ctx.active_page.get() {
                    ActivePage::Browse => view! { <BrowseCampaignsPage /> }.into_any(),
                    ActivePage::Applications => view! { <MyApplicationsPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
