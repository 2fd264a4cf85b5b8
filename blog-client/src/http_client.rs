use std::time::Duration;

use async_trait::async_trait;
use blog_composer::{ComposerResult, PostRecord, PostsApi};
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{BlogClientError, BlogClientResult};

#[derive(Debug, Clone, Default)]
/// Таймауты HTTP-клиента. `None` оставляет значение по умолчанию `reqwest`.
pub struct HttpTimeouts {
    /// Таймаут установки соединения.
    pub connect: Option<Duration>,
    /// Таймаут всего запроса.
    pub request: Option<Duration>,
}

#[derive(Debug, Clone)]
/// HTTP-клиент коллекции постов.
pub struct HttpPostsApi {
    endpoint: String,
    client: Client,
}

impl HttpPostsApi {
    /// Создаёт клиент для URL коллекции постов, например
    /// `http://localhost:3000/posts`.
    pub fn new(endpoint: impl Into<String>) -> BlogClientResult<Self> {
        Self::with_timeouts(endpoint, HttpTimeouts::default())
    }

    /// Создаёт клиент с явными таймаутами.
    pub fn with_timeouts(
        endpoint: impl Into<String>,
        timeouts: HttpTimeouts,
    ) -> BlogClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(connect) = timeouts.connect {
            builder = builder.connect_timeout(connect);
        }
        if let Some(request) = timeouts.request {
            builder = builder.timeout(request);
        }

        Ok(Self {
            endpoint: normalize_endpoint(endpoint.into()),
            client: builder.build()?,
        })
    }

    /// URL коллекции постов.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Отправляет пост одним `POST` с JSON-телом.
    pub async fn send_post(&self, record: &PostRecord) -> BlogClientResult<()> {
        debug!(endpoint = %self.endpoint, "sending post");

        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(BlogClientError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "posts endpoint rejected the post");
            return Err(BlogClientError::Status(status));
        }

        debug!(%status, "post accepted");
        Ok(())
    }
}

#[async_trait(?Send)]
impl PostsApi for HttpPostsApi {
    async fn create_post(&self, record: &PostRecord) -> ComposerResult<()> {
        self.send_post(record).await.map_err(Into::into)
    }
}

fn normalize_endpoint(endpoint: String) -> String {
    let endpoint = endpoint.trim().trim_end_matches('/');
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }

    format!("http://{endpoint}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trims_trailing_slash() {
        let api = HttpPostsApi::new("http://localhost:3000/posts/").expect("client must build");
        assert_eq!(api.endpoint(), "http://localhost:3000/posts");
    }

    #[test]
    fn endpoint_gets_http_scheme_when_missing() {
        let api = HttpPostsApi::new("127.0.0.1:3000/posts").expect("client must build");
        assert_eq!(api.endpoint(), "http://127.0.0.1:3000/posts");
    }

    #[test]
    fn endpoint_keeps_https_scheme() {
        let api = HttpPostsApi::new("https://blog.example.com/posts").expect("client must build");
        assert_eq!(api.endpoint(), "https://blog.example.com/posts");
    }
}
