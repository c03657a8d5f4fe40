use std::fmt;

use time::{format_description::well_known::Rfc3339, Duration, OffsetDateTime};

/// A point in time with seconds precision (UNIX timestamp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        self.0.checked_add(duration.whole_seconds()).map(Self)
    }

    pub fn checked_sub(self, duration: Duration) -> Option<Self> {
        self.0.checked_sub(duration.whole_seconds()).map(Self)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.unix_timestamp())
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        // Only fails for timestamps outside the years +/-9999.
        OffsetDateTime::from_unix_timestamp(from.0).expect("representable UNIX timestamp")
    }
}

impl std::ops::Add<Duration> for Timestamp {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs.whole_seconds())
    }
}

impl std::ops::Sub<Duration> for Timestamp {
    type Output = Self;
    fn sub(self, rhs: Duration) -> Self {
        Self(self.0 - rhs.whole_seconds())
    }
}

impl std::ops::Sub for Timestamp {
    type Output = Duration;
    fn sub(self, rhs: Self) -> Duration {
        Duration::seconds(self.0 - rhs.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let dt = OffsetDateTime::from(*self);
        let formatted = dt.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_sub_durations() {
        let ts = Timestamp::from_secs(1_000_000);
        assert_eq!(Timestamp::from_secs(1_000_060), ts + Duration::minutes(1));
        assert_eq!(Timestamp::from_secs(913_600), ts - Duration::hours(24));
        assert_eq!(Duration::hours(24), (ts + Duration::hours(24)) - ts);
    }

    #[test]
    fn display_rfc3339() {
        let ts = Timestamp::from_secs(1_704_067_200);
        assert_eq!("2024-01-01T00:00:00Z", ts.to_string());
    }

    #[test]
    fn checked_arithmetic_detects_overflow() {
        let ts = Timestamp::from_secs(i64::MAX);
        assert!(ts.checked_add(Duration::seconds(1)).is_none());
        assert!(ts.checked_sub(Duration::seconds(1)).is_some());
    }
}
