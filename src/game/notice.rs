//! Transient user-facing messages

use std::time::{Duration, Instant};

/// How long a validation notice stays visible
pub const NOTICE_TTL: Duration = Duration::from_secs(2);

/// A message that dismisses itself after [`NOTICE_TTL`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    text: String,
    raised_at: Instant,
}

impl Notice {
    #[must_use]
    pub fn new(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            raised_at: now,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= NOTICE_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_expires_after_ttl() {
        let start = Instant::now();
        let notice = Notice::new("Not a valid word!", start);

        assert!(!notice.is_expired(start));
        assert!(!notice.is_expired(start + Duration::from_millis(1999)));
        assert!(notice.is_expired(start + NOTICE_TTL));
    }
}
