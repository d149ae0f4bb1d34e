//! The concrete rule sets behind the shipped report types. New report types
//! are added by defining another scheme here (or in application code), never
//! by touching the aggregator.

use super::aggregate::CountMatrix;
use super::domain::{status, InterviewRecord};
use super::scheme::{ClassificationRule, ClassificationScheme};

/// Category labels for the conversion funnel scheme.
pub mod conversion {
    pub const ATTENDED: &str = "Attended";
    pub const REJECTED: &str = "Rejected";
    pub const ADVANCED_ROUND: &str = "Advanced Round";
    pub const SELECTED_OR_OFFERED: &str = "Selected / Offered";
    pub const FEEDBACK_AWAITED: &str = "Feedback Awaited";
    pub const OTHERS: &str = "Others";
}

/// Conversion funnel scheme. Rule order is load-bearing: the advanced-round
/// rule must precede the selected/offered rule so a round-2 selection cannot
/// double-match into the coarser category.
pub fn conversion_scheme() -> ClassificationScheme {
    let rules = vec![
        ClassificationRule::new(conversion::ATTENDED, |r: &InterviewRecord| {
            r.status_primary == status::ATTENDED
        }),
        ClassificationRule::new(conversion::REJECTED, |r: &InterviewRecord| {
            r.status_secondary == status::INTERVIEW_REJECT
                || r.status_secondary == status::FINAL_REJECT
        }),
        ClassificationRule::new(conversion::ADVANCED_ROUND, |r: &InterviewRecord| {
            r.interview_round >= 2 && r.status_secondary == status::SELECTED
        }),
        ClassificationRule::new(conversion::SELECTED_OR_OFFERED, |r: &InterviewRecord| {
            (r.status_secondary == status::SELECTED && r.interview_round < 2)
                || r.status_secondary == status::OFFERED
        }),
        ClassificationRule::new(conversion::FEEDBACK_AWAITED, |r: &InterviewRecord| {
            r.status_secondary == status::FEEDBACK_AWAITED
        }),
    ];

    ClassificationScheme::from_parts("conversion", conversion::OTHERS, rules)
}

/// Outcome distribution scheme: one category per secondary status of
/// interest, catch-all for anything unrecognized.
pub fn outcome_scheme() -> ClassificationScheme {
    let categories = [
        status::DOCUMENTATION,
        status::DROP,
        status::FEEDBACK_AWAITED,
        status::FINAL_REJECT,
        status::HOLD,
        status::INTERVIEW_REJECT,
        status::JOINED,
        status::OFFERED,
        status::OFFERED_DROP,
        status::SELECTED,
        status::SHORTLISTED,
    ];

    let rules = categories
        .into_iter()
        .map(|label| {
            ClassificationRule::new(label, move |r: &InterviewRecord| r.status_secondary == label)
        })
        .collect();

    ClassificationScheme::from_parts("outcomes", conversion::OTHERS, rules)
}

/// Derived rollup reported alongside (never instead of) its constituents.
/// Computed from the matrix after primary classification, so it stays out of
/// the totals invariant.
pub fn shortlisted_or_documentation(matrix: &CountMatrix, bucket: &str) -> usize {
    matrix.combined_count(bucket, &[status::SHORTLISTED, status::DOCUMENTATION])
}
