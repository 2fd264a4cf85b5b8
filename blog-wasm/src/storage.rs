use blog_composer::{AUTH_STORAGE_KEY, AuthRecord, AuthStore, ComposerError, ComposerResult, parse_auth_record};

fn local_storage() -> Result<web_sys::Storage, String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    window
        .local_storage()
        .map_err(|_| "failed to access localStorage".to_string())?
        .ok_or_else(|| "localStorage is not available".to_string())
}

/// Запись авторизации в `localStorage` под ключом `authData`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LocalStorageAuth;

impl AuthStore for LocalStorageAuth {
    fn current_user(&self) -> Option<AuthRecord> {
        let storage = local_storage().ok()?;
        let raw = storage.get_item(AUTH_STORAGE_KEY).ok()??;
        parse_auth_record(&raw)
    }

    fn clear_current_user(&self) -> ComposerResult<()> {
        local_storage()
            .map_err(ComposerError::Storage)?
            .remove_item(AUTH_STORAGE_KEY)
            .map_err(|_| ComposerError::Storage("failed to clear auth record".to_string()))
    }
}
