use async_trait::async_trait;
use blog_composer::{ComposerError, ComposerResult, DEFAULT_POSTS_ENDPOINT, PostRecord, PostsApi};
use gloo_net::http::Request;
use tracing::{debug, warn};

pub(crate) const POSTS_URL: &str = match option_env!("WASM_POSTS_URL") {
    Some(value) => value,
    None => DEFAULT_POSTS_ENDPOINT,
};

/// Коллекция постов через `fetch`.
#[derive(Debug, Clone)]
pub(crate) struct BrowserPostsApi {
    endpoint: String,
}

impl BrowserPostsApi {
    pub(crate) fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl PostsApi for BrowserPostsApi {
    async fn create_post(&self, record: &PostRecord) -> ComposerResult<()> {
        debug!(endpoint = %self.endpoint, "sending post");

        // Без заголовка Authorization: коллекция постов его не требует.
        let response = Request::post(&self.endpoint)
            .json(record)
            .map_err(|err| ComposerError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ComposerError::Network(err.to_string()))?;

        if !response.ok() {
            let status = response.status();
            warn!(status, "posts endpoint rejected the post");
            return Err(ComposerError::Http { status });
        }

        Ok(())
    }
}
