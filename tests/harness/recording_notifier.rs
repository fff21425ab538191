use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gradewatch::error::NotifyError;
use gradewatch::port::Notifier;

/// Thread-safe send collector for notification assertions in tests.
///
/// Records every delivery attempt and answers with a scripted result
/// (accepted by default), so tests can exercise the transport-rejection
/// path without a real bot.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    attempts: Arc<Mutex<Vec<String>>>,
    results: Arc<Mutex<VecDeque<bool>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result for an upcoming send; unqueued sends are accepted.
    pub fn push_result(&self, accepted: bool) {
        self.results
            .lock()
            .expect("lock notifier results")
            .push_back(accepted);
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts
            .lock()
            .expect("lock notifier attempts")
            .clone()
    }

    pub fn len(&self) -> usize {
        self.attempts.lock().expect("lock notifier attempts").len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<bool, NotifyError> {
        self.attempts
            .lock()
            .expect("lock notifier attempts")
            .push(text.to_string());
        let accepted = self
            .results
            .lock()
            .expect("lock notifier results")
            .pop_front()
            .unwrap_or(true);
        Ok(accepted)
    }
}
