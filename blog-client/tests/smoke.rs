use std::time::{SystemTime, UNIX_EPOCH};

use blog_client::HttpPostsApi;
use blog_composer::{DEFAULT_POSTS_ENDPOINT, PostRecord, PostsApi};
use chrono::Utc;

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

#[tokio::test]
#[ignore = "requires running posts server (json-server on :3000)"]
async fn http_smoke_flow() {
    let endpoint =
        std::env::var("BLOG_POSTS_URL").unwrap_or_else(|_| DEFAULT_POSTS_ENDPOINT.to_string());
    let api = HttpPostsApi::new(endpoint).expect("client must build");

    let now = Utc::now();
    let record = PostRecord {
        title: format!("smoke {}", unique_suffix()),
        author: "smoke".to_string(),
        description: "posted by the smoke test".to_string(),
        image: blog_composer::PLACEHOLDER_IMAGE_URL.to_string(),
        date: blog_composer::long_date(&now),
        created_at: blog_composer::iso_timestamp(&now),
    };

    api.create_post(&record)
        .await
        .expect("create_post must succeed");
}
