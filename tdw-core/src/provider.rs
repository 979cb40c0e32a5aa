//! Clock and identifier providers used while encoding.
//!
//! Encoding reads the current time for `DTSTAMP` and a random token for event
//! UIDs. Both sit behind traits so tests can pin them.

use chrono::{DateTime, Utc};

/// Source of the current UTC time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of the per-document UID token.
pub trait UidSource {
    fn token(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random hex token from a v4 UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUidSource;

impl UidSource for RandomUidSource {
    fn token(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct FixedUidSource(pub String);

impl UidSource for FixedUidSource {
    fn token(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_tokens_differ() {
        let source = RandomUidSource;
        let a = source.token();
        let b = source.token();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
