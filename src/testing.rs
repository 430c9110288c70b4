//! Fixtures shared by unit and endpoint tests.

use std::sync::{Arc, Mutex};

use actix_web::web;
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::auth::{Claims, JwtVerifier};
use crate::completion::{CompletionClient, PromptMessage};
use crate::store::memory::MemoryStore;
use crate::AppState;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-with-enough-bytes";
pub const TEST_AUDIENCE: &str = "authenticated";

pub fn sign_token_with(sub: &str, secret: &[u8], aud: &str, exp_offset_secs: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        exp: (now + exp_offset_secs) as usize,
        iat: Some(now as usize),
        aud: Some(aud.to_string()),
        email: Some(format!("{}@example.com", sub)),
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
        .expect("failed to sign test token")
}

pub fn sign_token(sub: &str) -> String {
    sign_token_with(sub, TEST_JWT_SECRET.as_bytes(), TEST_AUDIENCE, 3600)
}

/// `Authorization` header for a freshly signed token.
pub fn bearer(sub: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", sign_token(sub)))
}

/// Completion client with a canned outcome that records every prompt.
pub struct StubCompletion {
    reply: Result<Option<String>, String>,
    calls: Mutex<Vec<Vec<PromptMessage>>>,
}

impl StubCompletion {
    pub fn replying(reply: Option<String>) -> Self {
        Self {
            reply: Ok(reply),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Err("503 Service Unavailable".to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<PromptMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for StubCompletion {
    async fn complete(&self, messages: Vec<PromptMessage>) -> anyhow::Result<Option<String>> {
        self.calls.lock().unwrap().push(messages);
        self.reply.clone().map_err(|e| anyhow!(e))
    }
}

/// An in-memory store and stub model wired into an `AppState`.
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub completion: Arc<StubCompletion>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new(StubCompletion::replying(Some("I'm here for you.".to_string())))
    }
}

impl TestContext {
    pub fn new(completion: StubCompletion) -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            completion: Arc::new(completion),
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::new(AppState {
            chats: self.store.clone(),
            moods: self.store.clone(),
            profiles: self.store.clone(),
            gratitude: self.store.clone(),
            completion: self.completion.clone(),
            jwt: JwtVerifier::new(TEST_JWT_SECRET.as_bytes(), TEST_AUDIENCE),
        })
    }

    pub fn configure(&self) -> impl FnOnce(&mut web::ServiceConfig) {
        let state = self.state();
        move |cfg| crate::configure(cfg, state)
    }
}

/// Builds the full service, middleware included, over a `TestContext`.
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(actix_web::App::new().configure($ctx.configure()))
    };
}

pub(crate) use init_app;
