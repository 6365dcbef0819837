//! Navigation Bar Component
//!
//! Brand, welcome message and logout. The user section collapses behind a
//! hamburger toggle on narrow screens.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::session;

/// Top navigation bar
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config;
    let welcome = ctx.user.with_value(|user| user.welcome());
    let (menu_open, set_menu_open) = signal(false);

    let user_class = move || {
        if menu_open.get() {
            "nav-user active"
        } else {
            "nav-user"
        }
    };

    view! {
        <nav class="navbar">
            <div class="nav-brand">"🍳 Recipe Browser"</div>

            <button
                id="hamburgerMenu"
                class="hamburger"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>

            <div class=user_class>
                <span id="userName" class="user-name">{welcome}</span>
                <button
                    id="logoutButton"
                    class="logout-btn"
                    on:click=move |_| session::logout(&config)
                >
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
