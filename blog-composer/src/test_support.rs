use std::cell::RefCell;

use async_trait::async_trait;

use crate::auth::{AuthRecord, AuthStore};
use crate::error::{ComposerError, ComposerResult};
use crate::feedback::{Navigator, NoticeLevel, Notifier};
use crate::record::PostRecord;
use crate::submit::PostsApi;

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    notices: RefCell<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub(crate) fn take(&self) -> Vec<(NoticeLevel, String)> {
        std::mem::take(&mut *self.notices.borrow_mut())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push((level, message.to_string()));
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    routes: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub(crate) fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.routes.borrow_mut())
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.borrow_mut().push(route.to_string());
    }
}

/// Запись есть, но удалить её нельзя.
pub(crate) struct FailingAuthStore;

impl AuthStore for FailingAuthStore {
    fn current_user(&self) -> Option<AuthRecord> {
        Some(AuthRecord::with_username("alice"))
    }

    fn clear_current_user(&self) -> ComposerResult<()> {
        Err(ComposerError::Storage("storage is read-only".to_string()))
    }
}

pub(crate) struct StubPostsApi {
    error: Option<fn() -> ComposerError>,
    yield_before_reply: bool,
    sent: RefCell<Vec<PostRecord>>,
}

impl StubPostsApi {
    pub(crate) fn succeeding() -> Self {
        Self {
            error: None,
            yield_before_reply: false,
            sent: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn failing(error: fn() -> ComposerError) -> Self {
        Self {
            error: Some(error),
            ..Self::succeeding()
        }
    }

    /// Отвечает не сразу, а после одного возврата в планировщик.
    pub(crate) fn yielding(self) -> Self {
        Self {
            yield_before_reply: true,
            ..self
        }
    }

    pub(crate) fn sent(&self) -> Vec<PostRecord> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PostsApi for StubPostsApi {
    async fn create_post(&self, record: &PostRecord) -> ComposerResult<()> {
        self.sent.borrow_mut().push(record.clone());
        if self.yield_before_reply {
            tokio::task::yield_now().await;
        }
        match self.error {
            Some(error) => Err(error()),
            None => Ok(()),
        }
    }
}
