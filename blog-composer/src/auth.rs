use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ComposerResult;

/// Сохранённая запись авторизации. Нас интересует только `username`,
/// остальные поля игнорируются.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRecord {
    /// Имя текущего пользователя.
    #[serde(default)]
    pub username: Option<String>,
}

impl AuthRecord {
    /// Запись с заданным именем пользователя.
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }
}

/// Доступ к записи авторизации, которой владеет остальное приложение.
pub trait AuthStore {
    /// Текущий пользователь; `None`, если записи нет или она повреждена.
    fn current_user(&self) -> Option<AuthRecord>;

    /// Удаляет запись авторизации.
    fn clear_current_user(&self) -> ComposerResult<()>;
}

/// Разбирает сырую JSON-запись. Повреждённая запись не ошибка, а `None`.
pub fn parse_auth_record(raw: &str) -> Option<AuthRecord> {
    match serde_json::from_str::<AuthRecord>(raw) {
        Ok(record) => Some(record),
        Err(err) => {
            debug!(error = %err, "ignoring malformed auth record");
            None
        }
    }
}

/// Автор по умолчанию: `username` из записи авторизации, иначе `fallback`.
pub fn resolve_author<A: AuthStore + ?Sized>(store: &A, fallback: &str) -> String {
    store
        .current_user()
        .and_then(|record| record.username)
        .filter(|username| !username.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Хранилище в памяти: держит сырую строку так же, как её держал бы
/// `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryAuthStore {
    raw: RefCell<Option<String>>,
}

impl MemoryAuthStore {
    /// Пустое хранилище.
    pub fn new() -> Self {
        Self::default()
    }

    /// Хранилище с заранее записанной строкой (в том числе невалидной).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    /// Перезаписывает сырую строку.
    pub fn set_raw(&self, raw: Option<String>) {
        *self.raw.borrow_mut() = raw;
    }

    /// Текущая сырая строка.
    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl AuthStore for MemoryAuthStore {
    fn current_user(&self) -> Option<AuthRecord> {
        self.raw.borrow().as_deref().and_then(parse_auth_record)
    }

    fn clear_current_user(&self) -> ComposerResult<()> {
        self.set_raw(None);
        Ok(())
    }
}
