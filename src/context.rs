//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::BrowserConfig;
use crate::session::UserSession;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: BrowserConfig,
    /// Signed-in visitor, resolved before mount
    pub user: StoredValue<UserSession>,
    /// Trigger to refetch recipes - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch recipes - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        config: BrowserConfig,
        user: UserSession,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            config,
            user: StoredValue::new(user),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Start a fresh fetch cycle
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
