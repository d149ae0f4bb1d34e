use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::buckets::{assign_bucket, AgingBin, TimeBucket};
use super::domain::{DateField, InterviewRecord};
use super::scheme::ClassificationScheme;

/// Configuration for duration-since-anchor bucketing.
///
/// Pending-action categories anchor to different events: categories listed in
/// `reference_anchored` measure elapsed time from the record's reference date
/// (e.g. when the client was informed), everything else from the interview
/// date. Whichever anchor a category prefers, the other date is the fallback;
/// with both absent the record degrades to `today` (0 elapsed days) rather
/// than being dropped, since pending-action visibility matters more than
/// precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgingConfig {
    pub today: NaiveDate,
    pub reference_anchored: Vec<String>,
}

impl AgingConfig {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            reference_anchored: Vec::new(),
        }
    }

    pub fn with_reference_anchored(mut self, categories: Vec<String>) -> Self {
        self.reference_anchored = categories;
        self
    }

    fn anchor_date(&self, category: &str, record: &InterviewRecord) -> NaiveDate {
        let anchored = if self.reference_anchored.iter().any(|c| c == category) {
            record.reference_date.or(record.interview_date)
        } else {
            record.interview_date.or(record.reference_date)
        };

        match anchored {
            Some(date) => date,
            None => {
                debug!(id = %record.id.0, category, "no anchor date, degrading to today");
                self.today
            }
        }
    }

    fn elapsed_days(&self, category: &str, record: &InterviewRecord) -> i64 {
        let anchor = self.anchor_date(category, record);
        (self.today - anchor).num_days().max(0)
    }
}

/// How records are grouped before classification.
#[derive(Debug, Clone)]
pub enum Bucketing {
    /// Calendar buckets keyed by one of the record's dates. Records whose
    /// selected date is absent or outside every bucket are skipped entirely.
    Time {
        buckets: Vec<TimeBucket>,
        date_field: DateField,
    },
    /// The five fixed aging bins; every record is assigned.
    Aging(AgingConfig),
}

/// Dense bucket-by-category count matrix with stable ordering on both axes.
///
/// Bucket order follows the bucket sequence (or aging-bin order); category
/// order follows the scheme's declared order plus its catch-all. Equal inputs
/// produce an identical matrix, so reports are reproducible bit for bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountMatrix {
    bucket_labels: Vec<String>,
    categories: Vec<String>,
    counts: Vec<Vec<usize>>,
}

impl CountMatrix {
    fn new(bucket_labels: Vec<String>, categories: Vec<String>) -> Self {
        let counts = vec![vec![0; categories.len()]; bucket_labels.len()];
        Self {
            bucket_labels,
            categories,
            counts,
        }
    }

    pub fn bucket_labels(&self) -> &[String] {
        &self.bucket_labels
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn count(&self, bucket: &str, category: &str) -> usize {
        match (self.bucket_index(bucket), self.category_index(category)) {
            (Some(b), Some(c)) => self.counts[b][c],
            _ => 0,
        }
    }

    /// Number of records assigned to a bucket. Category counts always sum to
    /// exactly this value.
    pub fn bucket_total(&self, bucket: &str) -> usize {
        self.bucket_index(bucket)
            .map(|b| self.counts[b].iter().sum())
            .unwrap_or(0)
    }

    /// Sum of several categories within one bucket, for derived rollup
    /// statistics that sit outside the primary partition.
    pub fn combined_count(&self, bucket: &str, categories: &[&str]) -> usize {
        categories
            .iter()
            .map(|category| self.count(bucket, category))
            .sum()
    }

    /// Share of the bucket's records in the category, rounded half-up to a
    /// whole percent. Empty buckets yield 0 for every category. Rounding is
    /// independent per category; a bucket's percentages are not renormalized
    /// to sum to exactly 100.
    pub fn percentage(&self, bucket: &str, category: &str) -> u32 {
        let total = self.bucket_total(bucket);
        if total == 0 {
            return 0;
        }

        let count = self.count(bucket, category);
        ((count * 200 + total) / (total * 2)) as u32
    }

    fn bucket_index(&self, bucket: &str) -> Option<usize> {
        self.bucket_labels.iter().position(|label| label == bucket)
    }

    fn category_index(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|label| label == category)
    }

    fn increment(&mut self, bucket_index: usize, category: &str) {
        if let Some(category_index) = self.category_index(category) {
            self.counts[bucket_index][category_index] += 1;
        }
    }
}

/// Fold records through the classifier and bucketer into a count matrix.
///
/// Pure function of its inputs: no shared state is read or written, so
/// concurrent invocations over the same record set need no coordination.
pub fn aggregate(
    records: &[InterviewRecord],
    scheme: &ClassificationScheme,
    bucketing: &Bucketing,
) -> CountMatrix {
    let categories: Vec<String> = scheme.categories().iter().map(|c| c.to_string()).collect();

    let bucket_labels: Vec<String> = match bucketing {
        Bucketing::Time { buckets, .. } => buckets.iter().map(|b| b.label.clone()).collect(),
        Bucketing::Aging(_) => AgingBin::ordered()
            .iter()
            .map(|bin| bin.label().to_string())
            .collect(),
    };

    let mut matrix = CountMatrix::new(bucket_labels, categories);

    for record in records {
        match bucketing {
            Bucketing::Time {
                buckets,
                date_field,
            } => match assign_bucket(record.date(*date_field), buckets) {
                Some(bucket) => {
                    let category = scheme.classify(record);
                    if let Some(bucket_index) = matrix.bucket_index(&bucket.label) {
                        matrix.increment(bucket_index, category);
                    }
                }
                None => {
                    debug!(id = %record.id.0, "record outside bucket window, skipped");
                }
            },
            Bucketing::Aging(config) => {
                let category = scheme.classify(record).to_string();
                let bin = AgingBin::for_days(config.elapsed_days(&category, record));
                if let Some(bucket_index) = matrix.bucket_index(bin.label()) {
                    matrix.increment(bucket_index, &category);
                }
            }
        }
    }

    matrix
}
