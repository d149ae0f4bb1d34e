//! The single boundary where external interview exports enter the engine.
//! Rows are normalized exactly once here; classification rules downstream
//! never re-parse or re-trim fields.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{InterviewRecord, RawInterviewRecord};

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read interview export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid interview CSV data: {0}")]
    Csv(#[from] csv::Error),
}

pub struct RecordImporter;

impl RecordImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<InterviewRecord>, IntakeError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<InterviewRecord>, IntakeError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<InterviewRow>() {
            records.push(row?.into_raw().normalize());
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct InterviewRow {
    #[serde(rename = "Candidate Id")]
    candidate_id: String,
    #[serde(
        rename = "Interview Status",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    interview_status: Option<String>,
    #[serde(
        rename = "Candidate Status",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    candidate_status: Option<String>,
    #[serde(
        rename = "Interview Round",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    interview_round: Option<String>,
    #[serde(
        rename = "Interview Date",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    interview_date: Option<String>,
    #[serde(
        rename = "Date Informed",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    date_informed: Option<String>,
    #[serde(rename = "Client", default, deserialize_with = "empty_string_as_none")]
    client: Option<String>,
    #[serde(
        rename = "Recruiter",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    recruiter: Option<String>,
    #[serde(
        rename = "Account Manager",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    account_manager: Option<String>,
}

impl InterviewRow {
    fn into_raw(self) -> RawInterviewRecord {
        RawInterviewRecord {
            id: self.candidate_id,
            status_primary: self.interview_status,
            status_secondary: self.candidate_status,
            interview_round: self.interview_round,
            interview_date: self.interview_date,
            reference_date: self.date_informed,
            client_name: self.client,
            recruiter_name: self.recruiter,
            manager_name: self.account_manager,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
