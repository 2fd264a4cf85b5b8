use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use tracing::{debug, info, warn};

use crate::auth::{AuthStore, resolve_author};
use crate::config::ComposerConfig;
use crate::draft::{Draft, DraftField};
use crate::error::ComposerResult;
use crate::feedback::{FORM_CLEARED, Navigator, NoticeLevel, Notifier, POST_CREATED, POST_FAILED};
use crate::image::{FileReadTicket, ImageMode, ImageSelector, ImageView, ReadSettlement};
use crate::record::PostRecord;

/// Итог одной публикации.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Сервер принял пост.
    Created,
    /// Сервер отказал или запрос не дошёл.
    Failed,
}

/// Состояние страницы создания поста: черновик, выбор обложки и флаг
/// отправки.
#[derive(Debug, Clone)]
pub struct CreatePostForm<A> {
    config: ComposerConfig,
    auth: A,
    draft: Draft,
    image: ImageSelector,
    submitting: bool,
}

impl<A: AuthStore> CreatePostForm<A> {
    /// Создаёт форму при открытии страницы; автор берётся из записи
    /// авторизации.
    pub fn mount(config: ComposerConfig, auth: A) -> Self {
        let author = resolve_author(&auth, &config.default_author);
        debug!(%author, "create post form mounted");

        Self {
            config,
            auth,
            draft: Draft::new(author),
            image: ImageSelector::default(),
            submitting: false,
        }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn image_mode(&self) -> ImageMode {
        self.image.mode()
    }

    /// Имя выбранного файла, пока он не сброшен.
    pub fn selected_file(&self) -> Option<&str> {
        self.image.selected_file()
    }

    pub fn is_reading_file(&self) -> bool {
        self.image.is_reading()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Превью совпадает с подготовленным изображением.
    pub fn preview(&self) -> Option<&str> {
        self.draft
            .has_image()
            .then_some(self.draft.image_url.as_str())
    }

    pub fn image_view(&self) -> ImageView<'_> {
        match self.preview() {
            Some(url) => ImageView::Preview(url),
            None => ImageView::Picker {
                mode: self.image.mode(),
                reading: self.image.is_reading(),
            },
        }
    }

    /// Заменяет одно поле черновика. Без валидации.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Переключает вкладку источника. Пока изображение выбрано, вкладки
    /// скрыты и переключение игнорируется.
    pub fn choose_image_mode(&mut self, mode: ImageMode) {
        if self.draft.has_image() {
            debug!(?mode, "image already staged, ignoring mode switch");
            return;
        }
        self.image.choose(mode);
    }

    /// Ввод URL обложки. URL не проверяется и не загружается.
    pub fn enter_image_url(&mut self, url: impl Into<String>) {
        if self.draft.has_image() || self.image.mode() != ImageMode::Url {
            debug!("url input is hidden, ignoring");
            return;
        }
        self.draft.image_url = url.into();
    }

    /// Начинает чтение выбранного файла. `None`, если поле выбора файла
    /// сейчас не показано.
    pub fn begin_file_read(&mut self, file_name: impl Into<String>) -> Option<FileReadTicket> {
        if self.draft.has_image() || self.image.mode() != ImageMode::File {
            debug!("file input is hidden, ignoring selection");
            return None;
        }

        let file_name = file_name.into();
        let ticket = self.image.begin_read(file_name.clone());
        debug!(ticket = ticket.id(), %file_name, "reading image file");
        Some(ticket)
    }

    /// Применяет результат чтения файла (data-URL). `true`, если изображение
    /// подготовлено.
    pub fn complete_file_read(
        &mut self,
        ticket: FileReadTicket,
        result: ComposerResult<String>,
    ) -> bool {
        let settlement = self.image.settle(ticket, self.config.stale_file_reads);
        if !settlement.accepted() {
            debug!(ticket = ticket.id(), "discarding stale file read");
            return false;
        }

        match result {
            Ok(data_url) => {
                info!(ticket = ticket.id(), bytes = data_url.len(), "image staged from file");
                self.draft.image_url = data_url;
                true
            }
            Err(err) => {
                warn!(ticket = ticket.id(), error = %err, "failed to read image file");
                // Имя файла принадлежит более новому чтению, если оно идёт.
                if settlement == ReadSettlement::Current {
                    self.image.forget_file();
                }
                false
            }
        }
    }

    /// Убирает обложку и возвращает выбор источника к URL.
    pub fn remove_image(&mut self) {
        self.draft.image_url.clear();
        self.image.reset();
    }

    /// Сбрасывает форму к начальному виду; автор заново читается из записи
    /// авторизации.
    pub fn clear<N: Notifier + ?Sized>(&mut self, notifier: &N) {
        let author = resolve_author(&self.auth, &self.config.default_author);
        self.draft = Draft::new(author);
        self.image.reset();
        notifier.notify(NoticeLevel::Info, FORM_CLEARED);
    }

    pub fn build_record<Tz>(&self, now: &DateTime<Tz>) -> PostRecord
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        PostRecord::from_draft(&self.draft, &self.config.placeholder_image_url, now)
    }

    /// Поднимает флаг отправки и собирает пост. `None`, если предыдущая
    /// отправка ещё не завершилась.
    pub fn begin_submit<Tz>(&mut self, now: &DateTime<Tz>) -> Option<PostRecord>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if self.submitting {
            debug!("submission already in flight");
            return None;
        }
        self.submitting = true;
        Some(self.build_record(now))
    }

    /// Завершает отправку: снимает флаг, уведомляет и при успехе уходит на
    /// дашборд. При ошибке черновик остаётся как был.
    pub fn finish_submit<N, V>(
        &mut self,
        result: ComposerResult<()>,
        notifier: &N,
        navigator: &V,
    ) -> SubmitOutcome
    where
        N: Notifier + ?Sized,
        V: Navigator + ?Sized,
    {
        self.submitting = false;

        match result {
            Ok(()) => {
                info!(title = %self.draft.title, "post created");
                notifier.notify(NoticeLevel::Success, POST_CREATED);
                navigator.navigate(&self.config.dashboard_route);
                SubmitOutcome::Created
            }
            Err(err) => {
                warn!(error = %err, "failed to create post");
                notifier.notify(NoticeLevel::Error, POST_FAILED);
                SubmitOutcome::Failed
            }
        }
    }

    /// Удаляет запись авторизации и уходит на экран входа.
    pub fn logout<V: Navigator + ?Sized>(&self, navigator: &V) -> ComposerResult<()> {
        self.auth.clear_current_user()?;
        navigator.navigate(&self.config.login_route);
        Ok(())
    }
}
