use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

/// Default timezone for calendar dates.
/// The canonical timezone used to turn "now" into a calendar day; the
/// tracked listings trade on B3, so America/Sao_Paulo is the default.
pub const DEFAULT_CALENDAR_TZ: Tz = chrono_tz::America::Sao_Paulo;

/// Converts a UTC instant to a calendar date in the given timezone.
pub fn calendar_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the year containing `date`.
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// Source of the current time.
///
/// Every computation that depends on "now" (period filters, price update
/// timestamps) reads it through a `Clock` so callers can pin it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn timezone(&self) -> Tz {
        DEFAULT_CALENDAR_TZ
    }

    fn today(&self) -> NaiveDate {
        calendar_date_from_utc(self.now(), self.timezone())
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(DEFAULT_CALENDAR_TZ)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn timezone(&self) -> Tz {
        self.tz
    }
}

/// A clock pinned to one instant, read in UTC.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Noon UTC on the given day.
    pub fn on(date: NaiveDate) -> Self {
        let noon = date
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or_else(Utc::now);
        Self::new(noon)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn timezone(&self) -> Tz {
        chrono_tz::UTC
    }
}
