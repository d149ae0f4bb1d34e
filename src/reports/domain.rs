use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Identifier wrapper for interview records. Used for export row identity only;
/// classification never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Known status labels compared against record fields. Records carry free-form
/// strings; anything outside these constants falls through to a scheme's
/// catch-all category.
pub mod status {
    pub const ATTENDED: &str = "Attended";

    pub const SELECTED: &str = "Selected";
    pub const SHORTLISTED: &str = "Shortlisted";
    pub const DOCUMENTATION: &str = "Documentation";
    pub const FEEDBACK_AWAITED: &str = "Feedback Awaited";
    pub const DROP: &str = "Drop";
    pub const FINAL_REJECT: &str = "Final Reject";
    pub const HOLD: &str = "Hold";
    pub const INTERVIEW_REJECT: &str = "Interview Reject";
    pub const JOINED: &str = "Joined";
    pub const OFFERED: &str = "Offered";
    pub const OFFERED_DROP: &str = "Offered Drop";
}

/// Selects which date on a record anchors time bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    Interview,
    Reference,
}

/// The canonical, normalized record the engine operates on.
///
/// `client_name`, `recruiter_name`, and `manager_name` are opaque dimension
/// labels for external pre-filtering; the engine never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRecord {
    pub id: CandidateId,
    pub status_primary: String,
    pub status_secondary: String,
    /// 1-based round number, always >= 1 after normalization.
    pub interview_round: u32,
    pub interview_date: Option<NaiveDate>,
    /// Fallback temporal anchor, e.g. the date the client was informed.
    pub reference_date: Option<NaiveDate>,
    pub client_name: String,
    pub recruiter_name: String,
    pub manager_name: String,
}

impl InterviewRecord {
    pub fn date(&self, field: DateField) -> Option<NaiveDate> {
        match field {
            DateField::Interview => self.interview_date,
            DateField::Reference => self.reference_date,
        }
    }
}

/// Boundary shape of a record before normalization: every field is optional
/// free text exactly as external suppliers hand it over.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInterviewRecord {
    pub id: String,
    pub status_primary: Option<String>,
    pub status_secondary: Option<String>,
    pub interview_round: Option<String>,
    pub interview_date: Option<String>,
    pub reference_date: Option<String>,
    pub client_name: Option<String>,
    pub recruiter_name: Option<String>,
    pub manager_name: Option<String>,
}

impl RawInterviewRecord {
    /// One-time defensive normalization at the boundary where external data
    /// enters the engine. A malformed field degrades (round clamps to 1,
    /// unparsable dates become `None`) and is logged; it never aborts a
    /// report computation.
    pub fn normalize(self) -> InterviewRecord {
        let interview_round = match self.interview_round.as_deref().map(str::trim) {
            None | Some("") => 1,
            Some(raw) => match raw.parse::<i64>() {
                Ok(round) if round >= 1 => round.min(u32::MAX as i64) as u32,
                Ok(_) | Err(_) => {
                    debug!(id = %self.id, round = raw, "interview round clamped to 1");
                    1
                }
            },
        };

        let interview_date = normalize_date(&self.id, "interview_date", self.interview_date);
        let reference_date = normalize_date(&self.id, "reference_date", self.reference_date);

        InterviewRecord {
            id: CandidateId(self.id),
            status_primary: trimmed(self.status_primary),
            status_secondary: trimmed(self.status_secondary),
            interview_round,
            interview_date,
            reference_date,
            client_name: trimmed(self.client_name),
            recruiter_name: trimmed(self.recruiter_name),
            manager_name: trimmed(self.manager_name),
        }
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn normalize_date(id: &str, field: &str, value: Option<String>) -> Option<NaiveDate> {
    let raw = value?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match parse_date(trimmed) {
        Some(date) => Some(date),
        None => {
            debug!(id, field, value = trimmed, "unparsable date treated as absent");
            None
        }
    }
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc().date());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%d/%m/%Y") {
        return Some(date);
    }

    None
}
