//! Link entry: the persisted binding of a short code to its destination.

use chrono::{DateTime, Utc};

/// A persisted short link.
///
/// Entries are immutable once stored. `expire_at = None` means the link never
/// expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// Opaque identifier assigned by the store on first persist.
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    /// The URL as submitted by the caller. Defaults to `long_url`.
    pub original_url: String,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expire_at: Option<DateTime<Utc>>,
}

impl LinkEntry {
    /// Returns true if the entry has an expiry strictly before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expire_at.is_some_and(|expire_at| expire_at < now)
    }

    /// Returns true if the entry has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for persisting a new link. The store fills in `id` and
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLinkEntry {
    pub short_code: String,
    pub long_url: String,
    pub original_url: String,
    pub user_id: Option<String>,
    pub expire_at: Option<DateTime<Utc>>,
}

impl NewLinkEntry {
    /// Promotes the input into a stored entry.
    pub fn into_entry(self, id: i64, created_at: DateTime<Utc>) -> LinkEntry {
        LinkEntry {
            id,
            short_code: self.short_code,
            long_url: self.long_url,
            original_url: self.original_url,
            user_id: self.user_id,
            created_at,
            expire_at: self.expire_at,
        }
    }
}
