//! Loading and error panels shown in place of the grid.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div id="loadingState" class="loading-state">
            <div class="spinner"></div>
            <p>"Loading delicious recipes..."</p>
        </div>
    }
}

/// Fetch failure with a retry button. Retry always refetches; no backoff.
#[component]
pub fn ErrorState(#[prop(into)] message: String) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div id="errorState" class="error-state">
            <p class="error-text">{message}</p>
            <button id="retryButton" class="retry-btn" on:click=move |_| ctx.reload()>
                "Try Again"
            </button>
        </div>
    }
}
