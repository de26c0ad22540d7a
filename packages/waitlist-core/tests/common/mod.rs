//! Shared test fixtures
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::time::Instant;
use waitlist_core::{
    Effect, EmailAddress, ServiceError, ServiceReply, VerificationService,
};

/// In-memory verification service that answers every call with a fixed reply
/// and counts how often it was asked.
pub struct ScriptedService {
    join: Result<ServiceReply, ServiceError>,
    check: Result<ServiceReply, ServiceError>,
    pub join_calls: AtomicUsize,
    pub check_calls: AtomicUsize,
    pub last_token: Mutex<Option<String>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self {
            join: Err(ServiceError::Network("join not scripted".into())),
            check: Err(ServiceError::Network("check not scripted".into())),
            join_calls: AtomicUsize::new(0),
            check_calls: AtomicUsize::new(0),
            last_token: Mutex::new(None),
        }
    }

    pub fn on_join(mut self, status: u16, body: Value) -> Self {
        self.join = Ok(ServiceReply::new(status, body));
        self
    }

    pub fn on_check(mut self, status: u16, body: Value) -> Self {
        self.check = Ok(ServiceReply::new(status, body));
        self
    }

    pub fn on_check_error(mut self, error: ServiceError) -> Self {
        self.check = Err(error);
        self
    }

    pub fn calls(&self) -> usize {
        self.join_calls.load(Ordering::SeqCst) + self.check_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VerificationService for ScriptedService {
    async fn request_verification(
        &self,
        _email: &EmailAddress,
    ) -> Result<ServiceReply, ServiceError> {
        self.join_calls.fetch_add(1, Ordering::SeqCst);
        self.join.clone()
    }

    async fn check_token(&self, token: &str) -> Result<ServiceReply, ServiceError> {
        self.check_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_token.lock().unwrap() = Some(token.to_string());
        self.check.clone()
    }
}

/// Effects as they were dispatched, with the (paused) clock reading at dispatch.
#[derive(Clone, Default)]
pub struct Recorder {
    fired: Arc<Mutex<Vec<(Effect, Instant)>>>,
}

impl Recorder {
    pub fn handler(&self) -> impl Fn(Effect) + Send + Sync + 'static {
        let fired = Arc::clone(&self.fired);
        move |effect| fired.lock().unwrap().push((effect, Instant::now()))
    }

    pub fn fired(&self) -> Vec<(Effect, Instant)> {
        self.fired.lock().unwrap().clone()
    }

    pub fn navigations(&self) -> Vec<(String, Instant)> {
        self.fired()
            .into_iter()
            .filter_map(|(effect, at)| match effect {
                Effect::Navigate { to, .. } => Some((to, at)),
                _ => None,
            })
            .collect()
    }

    pub fn confetti(&self) -> Vec<Instant> {
        self.fired()
            .into_iter()
            .filter_map(|(effect, at)| matches!(effect, Effect::Confetti { .. }).then_some(at))
            .collect()
    }
}
