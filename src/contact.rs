//! Background contact submission with completion polling.
//!
//! The submit handler must never block the event loop, so the POST runs on
//! a background thread that reports back over a message channel. The main
//! loop polls the channel once per tick, exactly like any other animation
//! state.

use anyhow::Result;
use serde::Serialize;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{info, warn};

/// Submission status tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// No submission started
    Idle,
    /// Request in flight, form locked
    Submitting,
    /// Last submission succeeded
    Success,
    /// Last submission failed
    Failed,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "Idle"),
            SubmissionStatus::Submitting => write!(f, "Sending..."),
            SubmissionStatus::Success => write!(f, "✓ Sent"),
            SubmissionStatus::Failed => write!(f, "✗ Failed"),
        }
    }
}

/// The JSON body posted to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
}

/// Result of a finished submission, delivered once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    /// Whether the endpoint answered with an HTTP-ok status
    pub success: bool,
    /// Optional `message` field from the response body
    pub detail: Option<String>,
}

/// Message sent from the background thread to the main thread.
#[derive(Debug, Clone)]
enum SubmissionMessage {
    Complete(SubmissionOutcome),
}

/// Submission state for tracking the in-flight contact request.
pub struct ContactState {
    /// Current submission status
    pub status: SubmissionStatus,
    /// Message channel receiver for the in-flight request
    receiver: Option<Receiver<SubmissionMessage>>,
}

impl ContactState {
    /// Creates a new idle submission state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: SubmissionStatus::Idle,
            receiver: None,
        }
    }

    /// Checks if a submission is currently in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Starts a submission in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if a submission is already in flight; the caller
    /// disables the submit button while `is_submitting()` so this is the
    /// backstop, not the primary guard.
    pub fn submit(&mut self, endpoint: String, payload: ContactPayload) -> Result<()> {
        if self.is_submitting() {
            anyhow::bail!("Submission already in progress");
        }

        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        self.status = SubmissionStatus::Submitting;

        thread::spawn(move || {
            let outcome = send_request(&endpoint, &payload);
            let _ = sender.send(SubmissionMessage::Complete(outcome));
        });

        Ok(())
    }

    /// Polls the message channel for a completed submission.
    ///
    /// Returns the outcome exactly once when the request finishes.
    pub fn poll(&mut self) -> Option<SubmissionOutcome> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(SubmissionMessage::Complete(outcome)) => {
                self.status = if outcome.success {
                    SubmissionStatus::Success
                } else {
                    SubmissionStatus::Failed
                };
                self.receiver = None;
                Some(outcome)
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => None,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                // Thread died without reporting; treat as a failed request
                self.status = SubmissionStatus::Failed;
                self.receiver = None;
                Some(SubmissionOutcome {
                    success: false,
                    detail: None,
                })
            }
        }
    }
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new()
    }
}

/// Performs the POST on the background thread.
///
/// Success is defined by the HTTP status; the body is parsed as JSON either
/// way and an optional `message` field is kept for diagnostics.
fn send_request(endpoint: &str, payload: &ContactPayload) -> SubmissionOutcome {
    let client = reqwest::blocking::Client::new();

    match client.post(endpoint).json(payload).send() {
        Ok(response) => {
            let success = response.status().is_success();
            let status = response.status();
            let detail = response
                .json::<serde_json::Value>()
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(String::from)
                });

            if success {
                info!(%status, "contact submission accepted");
            } else {
                warn!(%status, detail = detail.as_deref(), "contact submission rejected");
            }

            SubmissionOutcome { success, detail }
        }
        Err(e) => {
            warn!(error = %e, "contact submission failed");
            SubmissionOutcome {
                success: false,
                detail: Some(e.to_string()),
            }
        }
    }
}

/// Probes the site's offline-support script in the background.
///
/// The page registers a worker script on load; here that becomes a
/// fire-and-forget availability check whose result is only logged.
pub fn spawn_offline_probe(base_url: String) {
    thread::spawn(move || {
        let url = format!("{base_url}/sw.js");
        let client = reqwest::blocking::Client::new();
        match client.get(&url).send() {
            Ok(response) if response.status().is_success() => {
                info!(%url, "offline support script registered");
            }
            Ok(response) => {
                info!(%url, status = %response.status(), "offline support script unavailable");
            }
            Err(e) => {
                info!(%url, error = %e, "offline support probe failed");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_state_new() {
        let state = ContactState::new();
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert!(!state.is_submitting());
        assert!(state.receiver.is_none());
    }

    #[test]
    fn test_submit_while_in_flight_is_rejected() {
        let mut state = ContactState::new();
        state.status = SubmissionStatus::Submitting;

        let payload = ContactPayload {
            name: "a".to_string(),
            email: "a@b.c".to_string(),
            message: "hi".to_string(),
        };
        assert!(state.submit("http://localhost:1".to_string(), payload).is_err());
    }

    #[test]
    fn test_poll_without_submission_is_none() {
        let mut state = ContactState::new();
        assert!(state.poll().is_none());
        assert_eq!(state.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_disconnected_channel_reports_failure_once() {
        let mut state = ContactState::new();
        let (sender, receiver) = channel::<SubmissionMessage>();
        state.receiver = Some(receiver);
        state.status = SubmissionStatus::Submitting;
        drop(sender);

        let outcome = state.poll().expect("outcome");
        assert!(!outcome.success);
        assert_eq!(state.status, SubmissionStatus::Failed);
        assert!(state.poll().is_none());
    }

    #[test]
    fn test_payload_serializes_expected_fields() {
        let payload = ContactPayload {
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            message: "Hello!".to_string(),
        };
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Alex",
                "email": "alex@example.com",
                "message": "Hello!"
            })
        );
    }

    #[test]
    fn test_submission_status_display() {
        assert_eq!(SubmissionStatus::Idle.to_string(), "Idle");
        assert_eq!(SubmissionStatus::Submitting.to_string(), "Sending...");
        assert_eq!(SubmissionStatus::Success.to_string(), "✓ Sent");
        assert_eq!(SubmissionStatus::Failed.to_string(), "✗ Failed");
    }
}
