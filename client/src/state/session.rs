#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// `localStorage` key holding the player's name.
#[cfg(feature = "csr")]
const USER_NAME_KEY: &str = "userName";

/// Who is playing. The name is shown on the play field and carries no logic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user_name: String,
}

impl SessionState {
    /// Restore the session from `localStorage`; empty outside a browser or when unset.
    pub fn load() -> Self {
        Self { user_name: read_user_name() }
    }
}

fn read_user_name() -> String {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(name)) = storage.get_item(USER_NAME_KEY) {
                return name;
            }
        }
        String::new()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
