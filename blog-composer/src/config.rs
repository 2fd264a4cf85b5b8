/// Коллекция постов, куда уходит новый пост.
pub const DEFAULT_POSTS_ENDPOINT: &str = "http://localhost:3000/posts";
/// Обложка, которая подставляется, если пользователь не выбрал изображение.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/600x400";
/// Автор по умолчанию, если в сохранённой записи авторизации нет `username`.
pub const DEFAULT_AUTHOR: &str = "User";
/// Ключ, под которым хранится JSON-запись авторизации.
pub const AUTH_STORAGE_KEY: &str = "authData";
/// Маршрут после успешной публикации.
pub const DASHBOARD_ROUTE: &str = "/dashboard";
/// Маршрут после выхода.
pub const LOGIN_ROUTE: &str = "/login";

/// Что делать с результатом чтения файла, который пришёл после того, как
/// пользователь уже удалил изображение, очистил форму или сменил режим.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleFileReads {
    /// Устаревший результат отбрасывается.
    #[default]
    Discard,
    /// Побеждает последнее завершившееся чтение, даже устаревшее.
    LastWins,
}

impl std::str::FromStr for StaleFileReads {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "discard" => Ok(Self::Discard),
            "last-wins" | "last_wins" => Ok(Self::LastWins),
            other => Err(format!(
                "unknown stale file read policy '{other}', expected 'discard' or 'last-wins'"
            )),
        }
    }
}

/// Настройки формы создания поста.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerConfig {
    /// URL коллекции постов.
    pub posts_endpoint: String,
    /// Обложка по умолчанию.
    pub placeholder_image_url: String,
    /// Автор, если запись авторизации отсутствует или повреждена.
    pub default_author: String,
    /// Куда переходить после успешной публикации.
    pub dashboard_route: String,
    /// Куда переходить после выхода.
    pub login_route: String,
    /// Политика для запоздавших результатов чтения файла.
    pub stale_file_reads: StaleFileReads,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            posts_endpoint: DEFAULT_POSTS_ENDPOINT.to_string(),
            placeholder_image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            default_author: DEFAULT_AUTHOR.to_string(),
            dashboard_route: DASHBOARD_ROUTE.to_string(),
            login_route: LOGIN_ROUTE.to_string(),
            stale_file_reads: StaleFileReads::default(),
        }
    }
}
