use std::cell::RefCell;

use blog_client::HttpPostsApi;
use blog_composer::{
    ComposerConfig, ComposerError, CreatePostForm, DraftField, MemoryAuthStore, Navigator,
    NoticeLevel, Notifier, PostRecord, PostsApi, SubmitOutcome, submit_post,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

struct CapturedRequest {
    head: String,
    body: Vec<u8>,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<String> {
        self.head.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|pos| pos + 4)
}

/// Принимает одно соединение, запоминает запрос и отвечает `status_line`.
async fn serve_once(status_line: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept connection");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut chunk).await.expect("read request");
            assert!(n > 0, "connection closed before headers were received");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = find_header_end(&buf) {
                break end;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let mut request = CapturedRequest {
            head,
            body: Vec::new(),
        };
        let content_length = request
            .header("content-length")
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.expect("read body");
            assert!(n > 0, "connection closed before body was received");
            buf.extend_from_slice(&chunk[..n]);
        }
        request.body = buf[header_end..header_end + content_length].to_vec();

        let response = format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();

        request
    });

    (format!("http://{addr}/posts"), handle)
}

fn sample_record() -> PostRecord {
    PostRecord {
        title: "Hello".to_string(),
        author: "alice".to_string(),
        description: "World".to_string(),
        image: "https://x/img.png".to_string(),
        date: "January 5, 2024".to_string(),
        created_at: "2024-01-05T10:00:00.000Z".to_string(),
    }
}

#[tokio::test]
async fn create_post_sends_single_json_post() {
    let (endpoint, server) = serve_once("HTTP/1.1 201 Created").await;
    let api = HttpPostsApi::new(endpoint).expect("client must build");

    api.create_post(&sample_record())
        .await
        .expect("create_post must succeed");

    let request = server.await.expect("server task");
    assert!(
        request.head.starts_with("POST /posts HTTP/1.1"),
        "unexpected request line: {}",
        request.head
    );
    assert_eq!(
        request.header("content-type").as_deref(),
        Some("application/json")
    );
    assert!(request.header("authorization").is_none());

    let body: serde_json::Value = serde_json::from_slice(&request.body).expect("json body");
    assert_eq!(body["title"], "Hello");
    assert_eq!(body["author"], "alice");
    assert_eq!(body["description"], "World");
    assert_eq!(body["image"], "https://x/img.png");
    assert_eq!(body["date"], "January 5, 2024");
    assert_eq!(body["createdAt"], "2024-01-05T10:00:00.000Z");
}

#[tokio::test]
async fn create_post_maps_server_error_status() {
    let (endpoint, server) = serve_once("HTTP/1.1 500 Internal Server Error").await;
    let api = HttpPostsApi::new(endpoint).expect("client must build");

    let err = api
        .create_post(&sample_record())
        .await
        .expect_err("500 must fail");
    server.await.expect("server task");

    assert!(matches!(err, ComposerError::Http { status: 500 }));
}

#[tokio::test]
async fn create_post_maps_unreachable_server_to_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);

    let api = HttpPostsApi::new(format!("http://{addr}/posts")).expect("client must build");
    let err = api
        .create_post(&sample_record())
        .await
        .expect_err("closed port must fail");

    assert!(matches!(err, ComposerError::Network(_)));
}

#[derive(Default)]
struct Recorder {
    notices: RefCell<Vec<NoticeLevel>>,
    routes: RefCell<Vec<String>>,
}

impl Notifier for Recorder {
    fn notify(&self, level: NoticeLevel, _message: &str) {
        self.notices.borrow_mut().push(level);
    }
}

impl Navigator for Recorder {
    fn navigate(&self, route: &str) {
        self.routes.borrow_mut().push(route.to_string());
    }
}

#[tokio::test]
async fn form_submission_round_trips_through_http() {
    let (endpoint, server) = serve_once("HTTP/1.1 201 Created").await;
    let config = ComposerConfig {
        posts_endpoint: endpoint.clone(),
        ..ComposerConfig::default()
    };
    let mut form = CreatePostForm::mount(config, MemoryAuthStore::new());
    form.update_field(DraftField::Title, "From the form");
    form.update_field(DraftField::Description, "Body");
    let form = RefCell::new(form);

    let api = HttpPostsApi::new(endpoint).expect("client must build");
    let recorder = Recorder::default();

    let outcome = submit_post(&form, &api, &recorder, &recorder).await;
    let request = server.await.expect("server task");

    assert_eq!(outcome, Some(SubmitOutcome::Created));
    assert_eq!(*recorder.notices.borrow(), vec![NoticeLevel::Success]);
    assert_eq!(*recorder.routes.borrow(), vec!["/dashboard".to_string()]);

    let body: serde_json::Value = serde_json::from_slice(&request.body).expect("json body");
    assert_eq!(body["author"], "User");
    assert_eq!(body["image"], "https://via.placeholder.com/600x400");
}
