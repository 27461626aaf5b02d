use chrono::{DateTime, FixedOffset, Local, NaiveDate};

/// Source of the current time, injectable so ids and timestamps are testable.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Calendar date in the clock's own offset.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock in the machine's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Parses an RFC 3339 timestamp, e.g. `2024-01-01T10:30:00+07:00`.
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(rfc3339).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
