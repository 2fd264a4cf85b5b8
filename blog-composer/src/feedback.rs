/// Сообщение после успешной публикации.
pub const POST_CREATED: &str = "Post created successfully!";
/// Сообщение после неудачной публикации.
pub const POST_FAILED: &str = "Failed to create post";
/// Сообщение после очистки формы.
pub const FORM_CLEARED: &str = "Form cleared";

/// Уровень уведомления.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Операция выполнена.
    Success,
    /// Операция не удалась.
    Error,
    /// Информационное сообщение.
    Info,
}

/// Короткие уведомления пользователю (тосты в браузере, строки в терминале).
pub trait Notifier {
    /// Показывает уведомление.
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Переход на другой экран приложения.
pub trait Navigator {
    /// Переходит по маршруту, например `/dashboard`.
    fn navigate(&self, route: &str);
}
