//! Нативные адаптеры для `blog-composer`.
//!
//! - [`HttpPostsApi`] публикует пост в коллекцию постов через `reqwest`;
//! - [`read_image_file`] читает локальный файл обложки и кодирует его в
//!   base64 data-URL.
//!
//! Ошибки библиотеки ([`BlogClientError`]) приводятся к
//! `blog_composer::ComposerError` на границе трейта `PostsApi`.
#![warn(missing_docs)]

mod error;
mod file_reader;
mod http_client;

pub use error::{BlogClientError, BlogClientResult};
pub use file_reader::{image_mime_for, read_image_file};
pub use http_client::{HttpPostsApi, HttpTimeouts};
