//! Outbound email channel configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the outbound email channel.
///
/// Presence of `api_key` decides once, at adapter construction time,
/// whether the channel is available. An absent key is a normal "channel
/// unavailable" condition, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// API key for the mail transport. `None` disables the channel.
    #[serde(default)]
    pub api_key: Option<String>,
    /// HTTP endpoint of the mail transport API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Sender identity in `Name <address>` form.
    #[serde(default = "default_sender")]
    pub sender: String,
    /// Public portal base URL, used for tracking links in email bodies.
    #[serde(default = "default_portal_url")]
    pub portal_url: String,
    /// Upper bound on a single send attempt, in seconds.
    #[serde(default = "default_send_timeout")]
    pub send_timeout_seconds: u64,
}

impl EmailConfig {
    /// Whether credentials are present and the channel can be constructed.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            sender: default_sender(),
            portal_url: default_portal_url(),
            send_timeout_seconds: default_send_timeout(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.resend.com/emails".to_string()
}

fn default_sender() -> String {
    "JanConnect+ <onboarding@resend.dev>".to_string()
}

fn default_portal_url() -> String {
    "https://janconnect.example.org".to_string()
}

fn default_send_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_by_default() {
        assert!(!EmailConfig::default().is_configured());
    }

    #[test]
    fn test_empty_key_is_unconfigured() {
        let config = EmailConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
