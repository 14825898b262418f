use leptos::prelude::*;

use crate::layout::{AppContext, AppShell};
use crate::system::session::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppContext store to the whole app via context.
    provide_context(AppContext::new());

    view! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}
