use blog_composer::{ComposerError, CreatePostForm, ImageMode, ImageView, encode_data_url};
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::debug;

use crate::storage::LocalStorageAuth;

#[component]
pub(crate) fn CoverImagePicker(
    form: RwSignal<CreatePostForm<LocalStorageAuth>>,
    file_input: NodeRef<Input>,
) -> impl IntoView {
    let has_image = move || form.with(|f| f.preview().is_some());
    let mode_is = move |mode: ImageMode| form.with(|f| f.image_mode() == mode);
    let upload_hint = move || {
        form.with(|f| match (f.image_view(), f.selected_file()) {
            (ImageView::Picker { reading: true, .. }, Some(name)) => format!("Reading {name}..."),
            _ => "Click to upload image".to_string(),
        })
    };

    let on_file_change = move |_| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            debug!("file picker closed without a selection");
            return;
        };

        let file = gloo_file::File::from(file);
        let Some(ticket) = form
            .try_update(|f| f.begin_file_read(file.name()))
            .flatten()
        else {
            return;
        };

        spawn_local(async move {
            let result = gloo_file::futures::read_as_bytes(&file)
                .await
                .map(|bytes| encode_data_url(&file.raw_mime_type(), &bytes))
                .map_err(|err| ComposerError::FileRead(err.to_string()));
            form.update(|f| {
                f.complete_file_read(ticket, result);
            });
        });
    };

    let on_remove = move |_| {
        form.update(|f| f.remove_image());
        // Сбрасываем input, чтобы тот же файл можно было выбрать снова.
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    view! {
        <div class="form-group">
            <label>"Cover Image"</label>

            <Show
                when=move || !has_image()
                fallback=move || view! {
                    <div class="image-preview-container">
                        <img
                            class="image-preview"
                            alt="Preview"
                            src=move || form.with(|f| f.preview().unwrap_or_default().to_string())
                        />
                        <button type="button" class="remove-image-btn" on:click=on_remove>
                            "×"
                        </button>
                    </div>
                }
            >
                <div class="image-source-tabs">
                    <button
                        type="button"
                        class="tab-btn"
                        class:active=move || mode_is(ImageMode::Url)
                        on:click=move |_| form.update(|f| f.choose_image_mode(ImageMode::Url))
                    >
                        {ImageMode::Url.label()}
                    </button>
                    <button
                        type="button"
                        class="tab-btn"
                        class:active=move || mode_is(ImageMode::File)
                        on:click=move |_| form.update(|f| f.choose_image_mode(ImageMode::File))
                    >
                        {ImageMode::File.label()}
                    </button>
                </div>

                <Show
                    when=move || mode_is(ImageMode::Url)
                    fallback=move || view! {
                        <div class="image-upload-area" on:click=open_picker>
                            <p>{upload_hint}</p>
                            <input
                                node_ref=file_input
                                type="file"
                                accept="image/*"
                                style="display: none"
                                on:click=|ev| ev.stop_propagation()
                                on:change=on_file_change
                            />
                        </div>
                    }
                >
                    <input
                        type="url"
                        class="form-control"
                        placeholder="https://example.com/cover.png"
                        prop:value=move || form.with(|f| f.draft().image_url.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.enter_image_url(value));
                        }
                    />
                </Show>
            </Show>
        </div>
    }
}
