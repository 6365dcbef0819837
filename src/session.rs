//! Session Guard
//!
//! Reads the display name written by the login page and handles logout.
//! Visitors without a stored name are sent back to the entry page before
//! anything else on this page starts.

use crate::config::BrowserConfig;

/// String key-value storage (browser `localStorage` in production)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Unavailable storage reads as empty.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}

/// Signed-in visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub display_name: String,
}

impl UserSession {
    pub fn welcome(&self) -> String {
        format!("Welcome, {}", self.display_name)
    }
}

/// Look up the stored display name. Blank names count as missing.
pub fn resolve(store: &impl KeyValueStore, config: &BrowserConfig) -> Option<UserSession> {
    store
        .get(config.display_name_key)
        .filter(|name| !name.trim().is_empty())
        .map(|display_name| UserSession { display_name })
}

/// Forget the visitor. No confirmation.
pub fn clear(store: &impl KeyValueStore, config: &BrowserConfig) {
    store.remove(config.display_name_key);
    store.remove(config.user_id_key);
}

/// Navigate to the entry page
pub fn redirect_to_entry(config: &BrowserConfig) {
    web_sys::console::log_1(&format!("[SESSION] Redirecting to {}", config.entry_page).into());
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(config.entry_page);
    }
}

/// Clear stored keys, then leave the page
pub fn logout(config: &BrowserConfig) {
    web_sys::console::log_1(&"[SESSION] Logging out".into());
    clear(&LocalStore::open(), config);
    redirect_to_entry(config);
}
