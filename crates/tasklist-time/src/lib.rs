//! Simple wrappers to make many errors hard to make

#![warn(unused_crate_dependencies)]

use std::time::Duration;

#[cfg(test)]
use rstest as _;

/// Intended to be similar to Duration but always clear that it is in
/// milliseconds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, PartialOrd, Ord,
)]
pub struct Millis(u64);

/// Intended to be similar to Instant but keeps on ticking if the computer is
/// sleeping, only works with date/time after the unix epoch
///
/// Stored as milliseconds since the unix epoch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, PartialOrd, Ord,
)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn now() -> Self {
        Self(
            web_time::SystemTime::UNIX_EPOCH
                .elapsed()
                .expect("expected date on system to be after the epoch")
                .as_millis() as u64,
        )
    }

    pub fn as_local_datetime(&self) -> chrono::DateTime<chrono::Local> {
        chrono::DateTime::from_timestamp_millis(self.0.try_into().unwrap())
            .expect("wow this program wasn't meant to last that long")
            .into()
    }

    pub fn display_as_locale_datetime(&self) -> String {
        self.as_local_datetime().format("%c").to_string()
    }

    /// Returns the number of milliseconds since `past_time` or None if
    /// `past_time` is in the future
    pub fn millis_since(self, past_time: Self) -> Option<Millis> {
        if self.0 < past_time.0 {
            None
        } else {
            Some(self - past_time)
        }
    }
}

impl std::ops::Add<Millis> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Millis) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = Millis;

    fn sub(self, rhs: Self) -> Self::Output {
        Millis::new(self.0 - rhs.0)
    }
}

impl From<u64> for Timestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Millis {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn from_secs(value: u64) -> Self {
        Self(value * 1000)
    }

    /// Returns true if this represents zero milliseconds
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn saturating_sub(&self, elapsed: Millis) -> Millis {
        Self(self.0.saturating_sub(elapsed.0))
    }
}

impl From<Millis> for Duration {
    fn from(value: Millis) -> Self {
        Duration::from_millis(value.0)
    }
}

impl From<Duration> for Millis {
    fn from(value: Duration) -> Self {
        Self(value.as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::past(1_000, 400, Some(Millis::new(600)))]
    #[case::same_instant(1_000, 1_000, Some(Millis::new(0)))]
    #[case::future(400, 1_000, None)]
    fn millis_since_only_goes_backwards(
        #[case] now: u64,
        #[case] past: u64,
        #[case] expected: Option<Millis>,
    ) {
        let now = Timestamp::from(now);
        let past = Timestamp::from(past);
        assert_eq!(now.millis_since(past), expected);
    }

    #[test]
    fn adding_millis_moves_a_timestamp_forward() {
        let start = Timestamp::from(500u64);
        let deadline = start + Millis::from_secs(2);
        assert_eq!(deadline - start, Millis::new(2_000));
        assert!(deadline > start);
    }

    #[test]
    fn saturating_sub_stops_at_zero() {
        let remaining = Millis::new(300).saturating_sub(Millis::new(500));
        assert!(remaining.is_zero());
    }

    #[test]
    fn duration_round_trip_keeps_millis() {
        let millis = Millis::new(1_500);
        let duration: Duration = millis.into();
        assert_eq!(Millis::from(duration), millis);
    }
}
