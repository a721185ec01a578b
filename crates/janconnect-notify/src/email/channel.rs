//! Channel adapter wrapping an email transport behind a uniform send
//! contract.
//!
//! The orchestrator stays channel-agnostic: absence of credentials is a
//! distinguished [`SendOutcome::Unavailable`] rather than an error, and a
//! hung transport is cut off by a bounded timeout. Retries are a policy
//! decision left to callers; the adapter makes exactly one attempt.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use janconnect_core::AppResult;
use janconnect_core::config::EmailConfig;

use super::resend::ResendMailer;

/// A mail transport capability.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// Send one email. Implementations report transport-level failure as
    /// an error; the channel adapter maps it into [`SendOutcome`].
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}

/// Result of one channel send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The transport confirmed delivery.
    Sent,
    /// The channel is not configured. Normal skip condition.
    Unavailable,
    /// The transport errored or timed out. The in-app record remains the
    /// delivered one.
    Failed(String),
}

/// The email delivery channel.
#[derive(Clone)]
pub struct EmailChannel {
    /// The configured transport, if credentials were present.
    transport: Option<Arc<dyn EmailTransport>>,
    /// Upper bound on one send attempt.
    timeout: Duration,
}

impl EmailChannel {
    /// Build the channel from configuration. Presence of credentials is
    /// checked once here and cached for the adapter's lifetime.
    pub fn from_config(config: &EmailConfig) -> Self {
        let transport: Option<Arc<dyn EmailTransport>> = if config.is_configured() {
            Some(Arc::new(ResendMailer::from_config(config)))
        } else {
            None
        };
        Self {
            transport,
            timeout: Duration::from_secs(config.send_timeout_seconds),
        }
    }

    /// Build the channel around an explicit transport.
    pub fn with_transport(transport: Arc<dyn EmailTransport>, timeout: Duration) -> Self {
        Self {
            transport: Some(transport),
            timeout,
        }
    }

    /// A channel with no transport. Every send reports `Unavailable`.
    pub fn unavailable() -> Self {
        Self {
            transport: None,
            timeout: Duration::from_secs(0),
        }
    }

    /// Whether a transport is configured.
    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    /// Attempt one send. Never returns an error; every failure mode is a
    /// [`SendOutcome`] variant.
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> SendOutcome {
        let Some(transport) = &self.transport else {
            return SendOutcome::Unavailable;
        };

        match tokio::time::timeout(self.timeout, transport.send(to, subject, html)).await {
            Ok(Ok(())) => SendOutcome::Sent,
            Ok(Err(e)) => SendOutcome::Failed(e.to_string()),
            Err(_) => SendOutcome::Failed(format!(
                "send timed out after {}s",
                self.timeout.as_secs()
            )),
        }
    }
}

impl std::fmt::Debug for EmailChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailChannel")
            .field("configured", &self.is_configured())
            .field("timeout", &self.timeout)
            .finish()
    }
}
