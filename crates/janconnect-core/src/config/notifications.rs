//! Notification dispatch configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the notification dispatch fan-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Maximum number of in-app notification writes in flight at once
    /// during a single dispatch.
    #[serde(default = "default_fanout_concurrency")]
    pub fanout_concurrency: usize,
    /// Default page size when reading a recipient's notification feed.
    #[serde(default = "default_feed_limit")]
    pub feed_limit: i64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            fanout_concurrency: default_fanout_concurrency(),
            feed_limit: default_feed_limit(),
        }
    }
}

fn default_fanout_concurrency() -> usize {
    8
}

fn default_feed_limit() -> i64 {
    50
}
