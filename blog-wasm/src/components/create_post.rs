use blog_composer::{DraftField, PostsApi};
use chrono::Local;
use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BrowserPostsApi;
use crate::components::image_picker::CoverImagePicker;
use crate::navigation::BrowserNavigator;
use crate::state::AppState;

#[component]
pub(crate) fn CreatePostPage(state: AppState) -> impl IntoView {
    let form = state.form;
    let file_input = NodeRef::<Input>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(record) = form
            .try_update(|f| f.begin_submit(&Local::now()))
            .flatten()
        else {
            return;
        };

        let api = BrowserPostsApi::new(form.with_untracked(|f| f.config().posts_endpoint.clone()));
        spawn_local(async move {
            let result = api.create_post(&record).await;
            form.update(|f| {
                f.finish_submit(result, &state, &BrowserNavigator);
            });
        });
    };

    let on_clear = move |_| {
        form.update(|f| f.clear(&state));
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let is_submitting = move || form.with(|f| f.is_submitting());

    view! {
        <div class="create-post-container">
            <header class="form-header">
                <h1>"Create New Post"</h1>
                <p>"Share your thoughts and stories with the world"</p>
            </header>

            <div class="post-form-card">
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Post Title"</label>
                        <input
                            type="text"
                            name=DraftField::Title.name()
                            class="form-control"
                            required=true
                            prop:value=move || form.with(|f| f.draft().title.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.update_field(DraftField::Title, value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label>"Author Name"</label>
                        <input
                            type="text"
                            name=DraftField::Author.name()
                            class="form-control"
                            prop:value=move || form.with(|f| f.draft().author.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.update_field(DraftField::Author, value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label>"Description"</label>
                        <textarea
                            name=DraftField::Description.name()
                            class="form-control"
                            required=true
                            prop:value=move || form.with(|f| f.draft().description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.update_field(DraftField::Description, value));
                            }
                        />
                    </div>

                    <CoverImagePicker form=form file_input=file_input />

                    <div class="form-actions-row">
                        <button type="submit" class="submit-btn" disabled=is_submitting>
                            {move || if is_submitting() { "Publishing..." } else { "Publish Post" }}
                        </button>
                        <button type="button" class="cancel-btn" on:click=on_clear>
                            "Clear Form"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
