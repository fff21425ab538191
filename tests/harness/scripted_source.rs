use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use gradewatch::error::ApiError;
use gradewatch::port::SubmissionSource;
use serde_json::{json, Value};

/// Deterministic test double for the homework status API.
///
/// Responses are served in order; once the script runs dry, fetches return
/// an empty homework list. Every requested cursor is recorded.
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<Value, ApiError>>>,
    requests: Mutex<Vec<i64>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_payload(&self, payload: Value) {
        self.responses
            .lock()
            .expect("lock scripted responses")
            .push_back(Ok(payload));
    }

    pub fn push_error(&self, error: ApiError) {
        self.responses
            .lock()
            .expect("lock scripted responses")
            .push_back(Err(error));
    }

    /// Cursors seen by the source, one per fetch.
    pub fn requests(&self) -> Vec<i64> {
        self.requests.lock().expect("lock scripted requests").clone()
    }
}

#[async_trait]
impl SubmissionSource for ScriptedSource {
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError> {
        self.requests
            .lock()
            .expect("lock scripted requests")
            .push(from_date);
        self.responses
            .lock()
            .expect("lock scripted responses")
            .pop_front()
            .unwrap_or_else(|| Ok(json!({"homeworks": []})))
    }
}

/// A 503 from the endpoint, as the client would report it.
pub fn service_unavailable() -> ApiError {
    ApiError::UnexpectedStatusCode {
        endpoint: "https://practicum.yandex.ru/api/user_api/homework_statuses/".into(),
        status: 503,
        reason: "Service Unavailable".into(),
    }
}
