use std::path::Path;

use blog_composer::encode_data_url;
use tracing::debug;

use crate::error::{BlogClientError, BlogClientResult};

/// MIME-тип изображения по расширению файла.
pub fn image_mime_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        "tif" | "tiff" => "image/tiff",
        _ => return None,
    };
    Some(mime)
}

/// Читает файл изображения целиком и кодирует его в data-URL.
///
/// Размер файла не ограничивается.
pub async fn read_image_file(path: &Path) -> BlogClientResult<String> {
    let mime = image_mime_for(path)
        .ok_or_else(|| BlogClientError::UnsupportedMedia(path.display().to_string()))?;

    let bytes = tokio::fs::read(path).await?;
    debug!(path = %path.display(), bytes = bytes.len(), %mime, "image file read");

    Ok(encode_data_url(mime, &bytes))
}
