use blog_composer::{NoticeLevel, Notifier};
use leptos::prelude::*;
use tracing::warn;

use crate::navigation::BrowserNavigator;
use crate::state::AppState;

#[component]
pub(crate) fn Navbar(state: AppState) -> impl IntoView {
    let on_logout = move |_| {
        if let Err(err) = state.form.with_untracked(|f| f.logout(&BrowserNavigator)) {
            warn!(error = %err, "logout failed");
            state.notify(NoticeLevel::Error, "Failed to log out");
        }
    };

    view! {
        <nav class="navbar">
            <span class="navbar-brand">"Rust Blog"</span>
            <button type="button" class="logout-btn" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
