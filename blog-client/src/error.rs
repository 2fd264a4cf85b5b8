use blog_composer::ComposerError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `blog-client`.
pub enum BlogClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Сервер ответил статусом вне диапазона 2xx.
    #[error("unexpected http status {0}")]
    Status(reqwest::StatusCode),

    /// Ошибка чтения локального файла.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Файл не похож на изображение.
    #[error("unsupported image file: {0}")]
    UnsupportedMedia(String),
}

/// Результат операций `blog-client`.
pub type BlogClientResult<T> = Result<T, BlogClientError>;

impl BlogClientError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Status(status);
        }
        Self::Http(err)
    }
}

impl From<BlogClientError> for ComposerError {
    fn from(err: BlogClientError) -> Self {
        match err {
            BlogClientError::Http(err) => ComposerError::Network(err.to_string()),
            BlogClientError::Status(status) => ComposerError::Http {
                status: status.as_u16(),
            },
            BlogClientError::Io(err) => ComposerError::FileRead(err.to_string()),
            BlogClientError::UnsupportedMedia(name) => {
                ComposerError::FileRead(format!("not an image: {name}"))
            }
        }
    }
}
