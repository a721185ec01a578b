//! HTTP mail transport speaking the Resend send API.

use async_trait::async_trait;
use serde::Serialize;

use janconnect_core::config::EmailConfig;
use janconnect_core::{AppError, AppResult};

use super::channel::EmailTransport;

/// Mail transport posting to a Resend-style HTTP API.
pub struct ResendMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    sender: String,
}

#[derive(Serialize)]
struct SendPayload<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}

impl ResendMailer {
    /// Build the mailer from configuration. Callers check
    /// [`EmailConfig::is_configured`] first; an empty key here would be
    /// rejected by the API.
    pub fn from_config(config: &EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
            sender: config.sender.clone(),
        }
    }
}

#[async_trait]
impl EmailTransport for ResendMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        let payload = SendPayload {
            from: &self.sender,
            to: vec![to],
            subject,
            html,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    janconnect_core::error::ErrorKind::EmailChannel,
                    format!("Email API request failed: {e}"),
                    e,
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AppError::email_channel(format!(
                "Email API returned {status}: {body}"
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for ResendMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendMailer")
            .field("api_url", &self.api_url)
            .field("sender", &self.sender)
            .finish_non_exhaustive()
    }
}
