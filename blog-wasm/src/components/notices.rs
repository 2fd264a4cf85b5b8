use blog_composer::NoticeLevel;
use leptos::prelude::*;

use crate::state::AppState;

fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "toast toast-success",
        NoticeLevel::Error => "toast toast-error",
        NoticeLevel::Info => "toast toast-info",
    }
}

/// Всплывающие уведомления; клик по уведомлению скрывает его.
#[component]
pub(crate) fn Notices(state: AppState) -> impl IntoView {
    view! {
        <div class="toast-container">
            <For
                each=move || state.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice_class(notice.level) on:click=move |_| state.dismiss(id)>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
