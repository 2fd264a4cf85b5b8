//! Ядро страницы создания поста, без привязки к UI и транспорту.
//!
//! - [`CreatePostForm`] хранит черновик, выбор источника обложки и флаг
//!   отправки;
//! - [`submit_post`] публикует черновик через [`PostsApi`];
//! - запись авторизации, уведомления и навигация подключаются через
//!   [`AuthStore`], [`Notifier`] и [`Navigator`].
//!
//! Конкретные реализации живут в `blog-client` (reqwest, файлы), `blog-cli`
//! и `blog-wasm` (Leptos, `localStorage`).

mod auth;
mod config;
mod draft;
mod error;
mod feedback;
mod form;
mod image;
mod record;
mod submit;

#[cfg(test)]
mod test_support;

pub use auth::{AuthRecord, AuthStore, MemoryAuthStore, parse_auth_record, resolve_author};
pub use config::{
    AUTH_STORAGE_KEY, ComposerConfig, DASHBOARD_ROUTE, DEFAULT_AUTHOR, DEFAULT_POSTS_ENDPOINT,
    LOGIN_ROUTE, PLACEHOLDER_IMAGE_URL, StaleFileReads,
};
pub use draft::{Draft, DraftField};
pub use error::{ComposerError, ComposerResult};
pub use feedback::{FORM_CLEARED, Navigator, NoticeLevel, Notifier, POST_CREATED, POST_FAILED};
pub use form::{CreatePostForm, SubmitOutcome};
pub use image::{FileReadTicket, ImageMode, ImageSelector, ImageView, encode_data_url};
pub use record::{PostRecord, iso_timestamp, long_date};
pub use submit::{PostsApi, submit_post};
