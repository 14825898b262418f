use contracts::system::users::CurrentUser;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<CurrentUser>,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<&contracts::shared::ids::FlexId> {
        self.user.as_ref().and_then(|u| u.user_id.as_ref())
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the signed-in user from localStorage on mount
    let (session, set_session) = signal(SessionState {
        user: storage::load_user(),
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access session state
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Helper: forget the stored user and reset the given session handle
pub fn do_logout(set_session: WriteSignal<SessionState>) {
    storage::clear_user();
    set_session.set(SessionState::default());
}
