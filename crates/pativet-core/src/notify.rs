use chrono::{DateTime, Duration, Utc};

use crate::ids::{NOTIFICATION_PREFIX, new_id};
use crate::models::{Notification, Severity};

pub const DEFAULT_NOTIFY_TTL_MS: u64 = 4000;

/// A notification that has not been enqueued yet: the queue assigns the id
/// and the lifetime on push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub message: String,
    pub severity: Severity,
}

impl NotificationDraft {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

/// Arrival-ordered transient message queue. Entries expire by a periodic
/// drain over live entries rather than per-entry timers, so an early
/// `dismiss` can never leave a stale timer behind.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    ttl: Duration,
    entries: Vec<Notification>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            ttl: Duration::milliseconds(i64::try_from(ttl_ms).unwrap_or(i64::MAX)),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, draft: NotificationDraft, now: DateTime<Utc>) -> Notification {
        let entry = Notification {
            id: new_id(NOTIFICATION_PREFIX),
            message: draft.message,
            severity: draft.severity,
            created_at: now,
            expires_at: now + self.ttl,
        };
        self.entries.push(entry.clone());
        entry
    }

    /// Removes and returns every entry whose lifetime has elapsed at `now`.
    pub fn expire(&mut self, now: DateTime<Utc>) -> Vec<Notification> {
        let (expired, live) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.expires_at <= now);
        self.entries = live;
        expired
    }

    /// Early removal before expiry (manual dismissal).
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    #[must_use]
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Notification> {
        self.entries
            .iter()
            .filter(|entry| entry.expires_at > now)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFY_TTL_MS)
    }
}
