use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;

use crate::config;
use crate::waitlist::validation::Applicant;

/// Body posted to the waitlist webhook.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub timestamp: String,
}

impl Signup {
    pub fn new(applicant: Applicant, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name: applicant.name,
            email: applicant.email,
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Failed to encode signup: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("Webhook answered {status} {status_text}")]
    Rejected { status: u16, status_text: String },
}

/// Receives accepted signups. Delivery is fire-and-forget: implementations
/// must not report back to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait Webhook {
    fn deliver(&self, signup: Signup);
}

/// Posts signups from a detached browser task.
#[derive(Clone, Debug)]
pub struct HttpWebhook {
    url: String,
}

impl HttpWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpWebhook {
    fn default() -> Self {
        Self::new(config::get_webhook_url())
    }
}

impl Webhook for HttpWebhook {
    fn deliver(&self, signup: Signup) {
        let url = self.url.clone();
        spawn_local(async move {
            log_delivery(&post_signup(&url, &signup).await);
        });
    }
}

pub async fn post_signup(url: &str, signup: &Signup) -> Result<(), DeliveryError> {
    let body = serde_json::to_string(signup)?;
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await?;

    if response.ok() {
        Ok(())
    } else {
        Err(DeliveryError::Rejected {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

/// The only consumer of a delivery outcome.
pub fn log_delivery(outcome: &Result<(), DeliveryError>) {
    match outcome {
        Ok(()) => log::info!("Waitlist signup delivered to webhook"),
        Err(e) => log::error!("Failed to deliver waitlist signup: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn signup_serializes_to_webhook_body() {
        let submitted_at = Utc.with_ymd_and_hms(2025, 1, 15, 20, 30, 5).unwrap();
        let signup = Signup::new(
            Applicant {
                name: "Al".into(),
                email: "al@example.com".into(),
            },
            submitted_at,
        );

        let body: serde_json::Value = serde_json::to_value(&signup).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Al",
                "email": "al@example.com",
                "timestamp": "2025-01-15T20:30:05.000Z",
            })
        );
    }

    #[test]
    fn timestamp_parses_back_as_utc() {
        let submitted_at = Utc.timestamp_millis_opt(1_736_972_405_123).unwrap();
        let signup = Signup::new(
            Applicant {
                name: "Al".into(),
                email: "al@example.com".into(),
            },
            submitted_at,
        );
        assert!(signup.timestamp.ends_with('Z'));
        let parsed = DateTime::parse_from_rfc3339(&signup.timestamp).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), submitted_at);
    }

    #[test]
    fn rejected_error_names_status() {
        let err = DeliveryError::Rejected {
            status: 502,
            status_text: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "Webhook answered 502 Bad Gateway");
    }

    #[test]
    fn logging_a_failure_does_not_panic() {
        log_delivery(&Err(DeliveryError::Rejected {
            status: 500,
            status_text: "Internal Server Error".into(),
        }));
        log_delivery(&Ok(()));
    }
}
