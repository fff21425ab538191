//! Poll loop orchestration.
//!
//! One sequential task: fetch → validate → format → deliver → sleep. Only a
//! missing-configuration error ever stops the process, and that happens
//! before this loop is even constructed; every error raised here is logged,
//! relayed to the chat best-effort, and retried after the fixed pause.

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::domain::{current_date, extract_submissions, format_status, PollState};
use crate::error::Result;
use crate::port::{Notifier, SubmissionSource};

/// The poll loop.
pub struct App;

impl App {
    /// Run the loop with the given transports until the process is
    /// terminated.
    ///
    /// The `Result` return only exists so the caller can `select!` against
    /// a shutdown signal; the loop itself never finishes.
    pub async fn run<S, N>(config: &Config, source: &S, notifier: &N) -> Result<()>
    where
        S: SubmissionSource,
        N: Notifier,
    {
        let period = Duration::from_secs(config.poll_period_secs);
        let mut state = PollState::new(Utc::now().timestamp());

        info!(
            cursor = state.cursor,
            period_secs = config.poll_period_secs,
            "Poll loop started"
        );

        loop {
            poll_once(source, notifier, &mut state).await;
            tokio::time::sleep(period).await;
        }
    }
}

/// One complete cycle including the error path.
///
/// Never fails: a cycle error is logged with context and relayed to the chat
/// as a best-effort alert, subject to the same de-duplication rule as
/// ordinary notifications.
pub async fn poll_once<S, N>(source: &S, notifier: &N, state: &mut PollState)
where
    S: SubmissionSource + ?Sized,
    N: Notifier + ?Sized,
{
    if let Err(err) = run_cycle(source, notifier, state).await {
        error!(error = %err, cursor = state.cursor, "Poll cycle failed");
        relay_error(notifier, state, &err.to_string()).await;
    }
}

/// One fetch → validate → format → deliver pass.
///
/// State is touched only after a confirmed delivery: on a rejected send
/// nothing changes, and the unchanged-message comparison retries the same
/// text verbatim next cycle.
pub async fn run_cycle<S, N>(source: &S, notifier: &N, state: &mut PollState) -> Result<()>
where
    S: SubmissionSource + ?Sized,
    N: Notifier + ?Sized,
{
    let payload = source.fetch(state.cursor).await?;
    let submissions = extract_submissions(&payload)?;

    let Some(latest) = submissions.first() else {
        info!(cursor = state.cursor, "No homework submissions in response");
        return Ok(());
    };

    let update = format_status(latest)?;

    if state.already_sent(&update.message) {
        debug!(
            status = update.status.as_str(),
            "Status unchanged, nothing to send"
        );
        return Ok(());
    }

    if notifier.send(&update.message).await? {
        state.last_seen_status = Some(update.status);
        if let Some(date) = current_date(&payload) {
            state.cursor = date;
        }
        info!(
            status = update.status.as_str(),
            cursor = state.cursor,
            "Delivered status notification"
        );
        state.last_sent_message = Some(update.message);
    }

    Ok(())
}

/// Relay a cycle error to the chat, de-duplicated against the last sent
/// message so a persistent failure is reported once, not every cycle.
async fn relay_error<N>(notifier: &N, state: &mut PollState, message: &str)
where
    N: Notifier + ?Sized,
{
    if state.already_sent(message) {
        return;
    }

    match notifier.send(message).await {
        Ok(true) => state.last_sent_message = Some(message.to_string()),
        Ok(false) => {}
        Err(err) => error!(error = %err, "Failed to relay error notification"),
    }
}
