use contracts::system::users::CurrentUser;
use web_sys::window;

const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get the stored user record from localStorage. An unparseable record
/// counts as absent.
pub fn load_user() -> Option<CurrentUser> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Clear the stored user record
pub fn clear_user() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}
