use leptos::prelude::*;

use crate::components::create_post::CreatePostPage;
use crate::components::navbar::Navbar;
use crate::components::notices::Notices;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    view! {
        <main class="create-post-page">
            <Navbar state=state />
            <Notices state=state />
            <CreatePostPage state=state />
        </main>
    }
}
