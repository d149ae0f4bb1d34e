use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum BucketError {
    #[error("custom range start {from} is after end {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },
    #[error("bucket request covers no time: zero trailing months and no custom range")]
    EmptyWindow,
}

/// Validated inclusive-inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, BucketError> {
        if from > to {
            return Err(BucketError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }
}

/// A single time bucket in an ordered sequence. Ranges are inclusive on both
/// ends and never overlap within one sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBucket {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeBucket {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Bucket sequence request: a trailing calendar-month window, optionally
/// overridden by an explicit custom range.
///
/// When a custom range is present it takes precedence and collapses the
/// sequence to that single bucket; callers request one or the other, never
/// both layered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketRequest {
    trailing_months: u32,
    custom_range: Option<DateRange>,
}

impl BucketRequest {
    pub fn trailing_months(n: u32) -> Self {
        Self {
            trailing_months: n,
            custom_range: None,
        }
    }

    pub fn custom(range: DateRange) -> Self {
        Self {
            trailing_months: 0,
            custom_range: Some(range),
        }
    }

    pub fn with_custom_range(mut self, range: DateRange) -> Self {
        self.custom_range = Some(range);
        self
    }

    /// Produce the ordered bucket sequence, oldest first. Trailing-month
    /// buckets span full calendar months ending with the month containing
    /// `today`, regardless of `today`'s day-of-month.
    pub fn resolve(&self, today: NaiveDate) -> Result<Vec<TimeBucket>, BucketError> {
        if let Some(range) = self.custom_range {
            return Ok(vec![TimeBucket {
                label: format!(
                    "{} - {}",
                    range.from().format("%d %b %Y"),
                    range.to().format("%d %b %Y")
                ),
                start: range.from(),
                end: range.to(),
            }]);
        }

        if self.trailing_months == 0 {
            return Err(BucketError::EmptyWindow);
        }

        let current_month = month_start(today);
        let buckets = (0..self.trailing_months)
            .rev()
            .map(|offset| {
                let start = current_month - Months::new(offset);
                TimeBucket {
                    label: start.format("%b %Y").to_string(),
                    start,
                    end: start + Months::new(1) - Days::new(1),
                }
            })
            .collect();

        Ok(buckets)
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Assign a date to the unique bucket containing it. `None` dates stay
/// unassigned and are excluded from date-bucketed aggregation.
pub fn assign_bucket(date: Option<NaiveDate>, buckets: &[TimeBucket]) -> Option<&TimeBucket> {
    let date = date?;
    buckets.iter().find(|bucket| bucket.contains(date))
}

/// Fixed aging bins for pending-action reports, in ascending order of
/// elapsed days since the record's anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingBin {
    UpToOneWeek,
    EightToFifteenDays,
    SixteenToThirtyDays,
    ThirtyOneToSixtyDays,
    BeyondSixtyDays,
}

impl AgingBin {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::UpToOneWeek,
            Self::EightToFifteenDays,
            Self::SixteenToThirtyDays,
            Self::ThirtyOneToSixtyDays,
            Self::BeyondSixtyDays,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UpToOneWeek => "0-7 days",
            Self::EightToFifteenDays => "8-15 days",
            Self::SixteenToThirtyDays => "16-30 days",
            Self::ThirtyOneToSixtyDays => "31-60 days",
            Self::BeyondSixtyDays => "61+ days",
        }
    }

    /// Pure lookup against the fixed ranges. Negative elapsed days (future
    /// anchor dates) clamp into the first bin, never a negative bucket.
    pub const fn for_days(elapsed_days: i64) -> Self {
        match elapsed_days {
            i64::MIN..=7 => Self::UpToOneWeek,
            8..=15 => Self::EightToFifteenDays,
            16..=30 => Self::SixteenToThirtyDays,
            31..=60 => Self::ThirtyOneToSixtyDays,
            _ => Self::BeyondSixtyDays,
        }
    }
}
