//! The recruitment analytics aggregation engine: record model, classification
//! schemes, time and aging bucketers, the count-matrix aggregator, and the
//! export row shaper.

pub mod aggregate;
pub mod buckets;
pub mod domain;
pub mod intake;
pub mod scheme;
pub mod schemes;

mod export;

pub use aggregate::{aggregate, AgingConfig, Bucketing, CountMatrix};
pub use buckets::{assign_bucket, AgingBin, BucketError, BucketRequest, DateRange, TimeBucket};
pub use domain::{CandidateId, DateField, InterviewRecord, RawInterviewRecord};
pub use export::{to_rows, CellValue, ExportCell, ExportRow, ValueMode};
pub use intake::{IntakeError, RecordImporter};
pub use scheme::{ClassificationRule, ClassificationScheme, RulePredicate, SchemeError};
pub use schemes::{conversion_scheme, outcome_scheme, shortlisted_or_documentation};
