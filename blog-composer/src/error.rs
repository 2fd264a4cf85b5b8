use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки формы создания поста.
pub enum ComposerError {
    /// Запрос не дошёл до сервера (нет соединения, DNS, обрыв).
    #[error("network error: {0}")]
    Network(String),

    /// Сервер ответил статусом вне диапазона 2xx.
    #[error("http status {status}")]
    Http {
        /// HTTP-статус ответа.
        status: u16,
    },

    /// Не удалось прочитать или закодировать локальный файл изображения.
    #[error("failed to read image file: {0}")]
    FileRead(String),

    /// Не удалось сериализовать пост.
    #[error("failed to serialize post: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Ошибка хранилища записи авторизации.
    #[error("auth storage error: {0}")]
    Storage(String),

    /// Неизвестное имя поля формы.
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// Результат операций формы.
pub type ComposerResult<T> = Result<T, ComposerError>;
