#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use ugc_ad_studio::config::AppConfig;
use ugc_ad_studio::models::AdRequest;
use ugc_ad_studio::services::{PollPolicy, ScriptWriter, SpeechSynthesizer, TalkProvider, VideoOrchestrator};
use ugc_ad_studio::{build_app, AppError, AppResult, AppState};

/// A canned provider reply.
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(u16, &'static str),
}

impl Reply {
    fn into_result(self) -> AppResult<Value> {
        match self {
            Reply::Json(value) => Ok(value),
            Reply::Status(status, body) => Err(AppError::UpstreamTransport {
                status,
                content_type: Some("application/json".to_string()),
                body: Bytes::from_static(body.as_bytes()),
            }),
        }
    }
}

/// Talking-avatar provider that replays scripted replies and counts calls.
pub struct FakeTalks {
    creates: Mutex<VecDeque<Reply>>,
    polls: Mutex<VecDeque<Reply>>,
    pub create_calls: AtomicUsize,
    pub poll_calls: AtomicUsize,
    pub submitted: Mutex<Vec<AdRequest>>,
}

impl FakeTalks {
    pub fn new(creates: Vec<Reply>, polls: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            creates: Mutex::new(creates.into()),
            polls: Mutex::new(polls.into()),
            create_calls: AtomicUsize::new(0),
            poll_calls: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
        })
    }

    pub fn polls(&self) -> usize {
        self.poll_calls.load(Ordering::SeqCst)
    }

    pub fn creates(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TalkProvider for FakeTalks {
    async fn create_talk(&self, request: &AdRequest) -> AppResult<Value> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.submitted.lock().unwrap().push(request.clone());
        let reply = self.creates.lock().unwrap().pop_front();
        reply.expect("unexpected create call").into_result()
    }

    async fn get_talk(&self, _talk_id: &str) -> AppResult<Value> {
        self.poll_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.polls.lock().unwrap().pop_front();
        match reply {
            Some(reply) => reply.into_result(),
            None => Ok(serde_json::json!({ "id": "tlk_fake", "status": "started" })),
        }
    }
}

/// Script writer returning a fixed reply or error per product.
pub struct FakeScripts {
    pub replies: HashMap<String, Reply>,
}

#[async_trait]
impl ScriptWriter for FakeScripts {
    async fn write_script(&self, product: &str) -> AppResult<String> {
        match self.replies.get(product).cloned() {
            Some(Reply::Json(value)) => Ok(value.as_str().unwrap_or_default().to_string()),
            Some(reply) => reply.into_result().map(|_| String::new()),
            None => Err(AppError::UpstreamShape("chat completion contained no choices".to_string())),
        }
    }
}

/// Speech synthesizer that echoes the text as fake MP3 bytes, or fails.
pub struct FakeSpeech {
    pub fail: Option<(u16, &'static str)>,
    pub voices: Mutex<Vec<Option<String>>>,
}

#[async_trait]
impl SpeechSynthesizer for FakeSpeech {
    async fn synthesize(&self, text: &str, voice_id: Option<&str>) -> AppResult<Bytes> {
        self.voices.lock().unwrap().push(voice_id.map(str::to_owned));
        match self.fail {
            Some((status, body)) => Err(AppError::UpstreamTransport {
                status,
                content_type: Some("application/json".to_string()),
                body: Bytes::from_static(body.as_bytes()),
            }),
            None => Ok(Bytes::from(format!("ID3{}", text))),
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "PUBLIC_BASE_URL" => Some("https://ads.example.com/".to_string()),
        "DID_API_KEY" => Some("dGVzdDp0ZXN0".to_string()),
        _ => None,
    })
    .expect("test config")
}

pub struct TestApp {
    pub router: Router,
    pub talks: Arc<FakeTalks>,
    pub speech: Arc<FakeSpeech>,
}

pub fn build_test_app(talks: Arc<FakeTalks>, scripts: FakeScripts, policy: PollPolicy) -> TestApp {
    let speech = Arc::new(FakeSpeech {
        fail: None,
        voices: Mutex::new(Vec::new()),
    });
    build_test_app_with_speech(talks, scripts, speech, policy)
}

pub fn build_test_app_with_speech(
    talks: Arc<FakeTalks>,
    scripts: FakeScripts,
    speech: Arc<FakeSpeech>,
    policy: PollPolicy,
) -> TestApp {
    let state = AppState {
        config: test_config(),
        script_writer: Arc::new(scripts),
        speech: speech.clone(),
        video: VideoOrchestrator::new(talks.clone(), policy),
    };

    TestApp {
        router: build_app(Arc::new(state)),
        talks,
        speech,
    }
}

pub fn no_scripts() -> FakeScripts {
    FakeScripts {
        replies: HashMap::new(),
    }
}

pub fn fast_policy(attempts: u32) -> PollPolicy {
    PollPolicy::fixed(attempts, Duration::from_millis(10))
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub request_id: Option<String>,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("json body")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };
    let content_type = header("content-type");
    let request_id = header("x-request-id");
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        content_type,
        request_id,
        body,
    }
}
