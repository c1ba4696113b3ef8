#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use surveysmith::config::{CompletionConfig, Config, MailConfig};
use surveysmith::email::{Email, MailError, Mailer};
use surveysmith::generation::{GenerationError, Generator};
use surveysmith::models::{Survey, SurveyResponse};
use surveysmith::state::AppState;
use surveysmith::store::{MemoryStore, ResponseStore, StoreError, SurveyStore};

pub const SAMPLE_HTML: &str = r#"<label for="rating">Rating</label><input type="number" id="rating" name="rating" min="1" max="5">"#;

/// Generator that answers every prompt with a canned result.
pub struct FakeGenerator {
    result: Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn ok(html: &str) -> Self {
        Self {
            result: Ok(html.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Generator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.result.clone().map_err(GenerationError::from)
    }
}

/// Mailer that keeps every message instead of delivering it.
#[derive(Default)]
pub struct RecordingMailer {
    fail: bool,
    pub sent: Mutex<Vec<Email>>,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email);
        if self.fail {
            return Err(MailError::from("Unauthorized".to_string()));
        }
        Ok(())
    }
}

/// Store whose every operation fails.
pub struct BrokenStore;

#[async_trait]
impl SurveyStore for BrokenStore {
    async fn create(&self, _html: &str) -> Result<Survey, StoreError> {
        Err(StoreError::Backend("store offline".to_string()))
    }

    async fn get(&self, _id: Uuid) -> Result<Option<Survey>, StoreError> {
        Err(StoreError::Backend("store offline".to_string()))
    }

    async fn list(&self) -> Result<Vec<Survey>, StoreError> {
        Err(StoreError::Backend("store offline".to_string()))
    }
}

#[async_trait]
impl ResponseStore for BrokenStore {
    async fn create(&self, _survey_id: Uuid, _data: Value) -> Result<SurveyResponse, StoreError> {
        Err(StoreError::Backend("store offline".to_string()))
    }

    async fn count_for(&self, _survey_id: Uuid) -> Result<i64, StoreError> {
        Err(StoreError::Backend("store offline".to_string()))
    }

    async fn list_for(&self, _survey_id: Uuid) -> Result<Vec<SurveyResponse>, StoreError> {
        Err(StoreError::Backend("store offline".to_string()))
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        max_body_size: 1_048_576,
        static_dir: "static".to_string(),
        log_level: "warn".to_string(),
        completion: CompletionConfig {
            url: "http://127.0.0.1:9/unused".to_string(),
            model: "test-model".to_string(),
            api_key: None,
            timeout: Duration::from_secs(5),
        },
        mail: MailConfig {
            sender: Some("noreply@test.com".to_string()),
            sendgrid_api_key: None,
            smtp: None,
        },
    }
}

/// A running test server backed by an in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    pub generator: Arc<FakeGenerator>,
    pub mailer: Arc<RecordingMailer>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get_text(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    /// Generate a survey, return its link.
    pub async fn create_survey(&self, prompt: &str) -> String {
        let (body, status) = self.post_json("/api/prompt", &json!({ "prompt": prompt })).await;
        assert_eq!(status, StatusCode::OK, "create survey failed: {body}");
        body["link"].as_str().unwrap().to_string()
    }

    pub async fn submit(&self, link: &str, data: &Value) -> (Value, StatusCode) {
        self.post_json(&format!("{link}/response"), data).await
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(FakeGenerator::ok(SAMPLE_HTML), RecordingMailer::default()).await
}

pub async fn spawn_app_with(generator: FakeGenerator, mailer: RecordingMailer) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let generator = Arc::new(generator);
    let mailer = Arc::new(mailer);

    let addr = serve(AppState {
        config: test_config(),
        surveys: store.clone(),
        responses: store.clone(),
        generator: generator.clone(),
        mailer: Some(mailer.clone()),
    })
    .await;

    TestApp {
        addr,
        client: Client::new(),
        store,
        generator,
        mailer,
    }
}

/// Bind the app to a random local port and serve it in the background.
pub async fn serve(state: AppState) -> SocketAddr {
    let app = surveysmith::build_app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    addr
}

/// Serve an arbitrary router on a random port, e.g. to stand in for an
/// upstream API.
pub async fn serve_router(router: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Mock server failed");
    });

    addr
}
