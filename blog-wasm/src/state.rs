use std::time::Duration;

use blog_composer::{ComposerConfig, CreatePostForm, NoticeLevel, Notifier};
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;

use crate::api::POSTS_URL;
use crate::storage::LocalStorageAuth;

/// Сколько уведомление висит на экране, если его не закрыли кликом.
const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Notice {
    pub(crate) id: u64,
    pub(crate) level: NoticeLevel,
    pub(crate) message: String,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) form: RwSignal<CreatePostForm<LocalStorageAuth>>,
    pub(crate) notices: RwSignal<Vec<Notice>>,
    // Идентификаторы не переиспользуются: иначе таймер старого уведомления
    // закрыл бы новое.
    next_notice_id: StoredValue<u64>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        let config = ComposerConfig {
            posts_endpoint: POSTS_URL.to_string(),
            ..ComposerConfig::default()
        };

        Self {
            form: RwSignal::new(CreatePostForm::mount(config, LocalStorageAuth)),
            notices: RwSignal::new(Vec::new()),
            next_notice_id: StoredValue::new(0),
        }
    }

    pub(crate) fn dismiss(&self, id: u64) {
        self.notices
            .update(|notices| notices.retain(|notice| notice.id != id));
    }
}

impl Notifier for AppState {
    fn notify(&self, level: NoticeLevel, message: &str) {
        let Some(id) = self.next_notice_id.try_update_value(|next| {
            let id = *next;
            *next += 1;
            id
        }) else {
            return;
        };

        self.notices.update(|notices| {
            notices.push(Notice {
                id,
                level,
                message: message.to_string(),
            });
        });

        let state = *self;
        set_timeout(move || state.dismiss(id), NOTICE_TTL);
    }
}
