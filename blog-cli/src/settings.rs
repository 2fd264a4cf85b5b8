use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use blog_composer::{ComposerConfig, DEFAULT_POSTS_ENDPOINT, PLACEHOLDER_IMAGE_URL, StaleFileReads};

use crate::logging::FALLBACK_LEVEL;

const DEFAULT_AUTH_FILE: &str = ".blog_auth.json";

#[derive(Debug, Clone)]
pub struct Settings {
    pub posts_url: String,
    pub auth_file: PathBuf,
    pub placeholder_image_url: String,
    pub stale_file_reads: StaleFileReads,
    pub http_timeout: Option<Duration>,
    pub log_level: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let posts_url = non_empty_env("BLOG_POSTS_URL")
            .unwrap_or_else(|| DEFAULT_POSTS_ENDPOINT.to_string());
        let auth_file = non_empty_env("BLOG_AUTH_FILE")
            .unwrap_or_else(|| DEFAULT_AUTH_FILE.to_string())
            .into();
        let placeholder_image_url = non_empty_env("BLOG_PLACEHOLDER_IMAGE")
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());
        let stale_file_reads = match non_empty_env("BLOG_STALE_FILE_READS") {
            Some(raw) => raw
                .parse::<StaleFileReads>()
                .map_err(|e| anyhow!(e))
                .context("Failed to parse BLOG_STALE_FILE_READS")?,
            None => StaleFileReads::default(),
        };
        let http_timeout = parse_optional_secs_env("BLOG_HTTP_TIMEOUT_SECS")?;
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| FALLBACK_LEVEL.to_string());

        Ok(Self {
            posts_url,
            auth_file,
            placeholder_image_url,
            stale_file_reads,
            http_timeout,
            log_level,
        })
    }

    pub fn composer_config(&self) -> ComposerConfig {
        ComposerConfig {
            posts_endpoint: self.posts_url.clone(),
            placeholder_image_url: self.placeholder_image_url.clone(),
            stale_file_reads: self.stale_file_reads,
            ..ComposerConfig::default()
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    let value = std::env::var(key).ok()?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return None;
    }
    Some(value)
}

fn parse_optional_secs_env(key: &str) -> Result<Option<Duration>> {
    let Some(raw) = non_empty_env(key) else {
        return Ok(None);
    };

    let secs = parse_positive_secs(&raw)
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;
    Ok(Some(Duration::from_secs(secs)))
}

fn parse_positive_secs(raw: &str) -> Result<u64> {
    let value = raw.trim().parse::<u64>()?;
    if value == 0 {
        return Err(anyhow!("must be > 0"));
    }
    Ok(value)
}
