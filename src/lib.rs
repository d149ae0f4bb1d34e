//! Recruitment analytics aggregation engine.
//!
//! Turns a flat collection of interview records into categorized,
//! time-bucketed statistics for reporting views: conversion funnels, outcome
//! breakdowns, and pending-action aging. The engine is a pure in-memory
//! library; persistence, filtering, rendering, and file export live in the
//! surrounding application.

pub mod config;
pub mod reports;

pub use config::{ConfigError, ReportConfig};
pub use reports::{
    aggregate, assign_bucket, conversion_scheme, outcome_scheme, shortlisted_or_documentation,
    to_rows, AgingBin, AgingConfig, BucketError, BucketRequest, Bucketing, CandidateId, CellValue,
    ClassificationRule, ClassificationScheme, CountMatrix, DateField, DateRange, ExportCell,
    ExportRow, IntakeError, InterviewRecord, RawInterviewRecord, RecordImporter, SchemeError,
    TimeBucket, ValueMode,
};
