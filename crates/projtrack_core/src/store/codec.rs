//! Line-oriented text record codec.
//!
//! # Responsibility
//! - Serialize one entity to its fixed, ordered `key:value` line block.
//! - Parse that exact format back, reporting semantic decode errors.
//!
//! # Invariants
//! - Field order is fixed per entity type; the decoder reads positionally.
//! - Dates use the `dd/MM/yyyy` pattern, zero-padded.
//! - Values are split on `:` keeping the first two segments, so a value
//!   containing `:` is truncated at the first colon. This matches the
//!   stores already on disk and is a documented format limitation, not
//!   something the decoder may fix by changing the format.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt::Write as _;
use uuid::Uuid;

use crate::model::individual::{Individual, IndividualId};
use crate::model::meeting::{Meeting, MeetingId};
use crate::model::project::Project;

const DATE_PATTERN: &str = "%d/%m/%Y";

// chrono alone would accept unpadded day/month; the record format requires
// the exact zero-padded shape.
static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("valid date shape regex"));

/// Decode error for a single record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The expected `key:value` line was absent or had no value segment.
    MissingField(&'static str),
    /// A line was present but carried the wrong key for its position.
    UnexpectedKey {
        expected: &'static str,
        found: String,
    },
    /// An id value was not canonical UUID text.
    InvalidId {
        field: &'static str,
        value: String,
    },
    /// A date value did not match the `dd/MM/yyyy` pattern.
    InvalidDate {
        field: &'static str,
        value: String,
    },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(key) => write!(f, "missing `{key}` line"),
            Self::UnexpectedKey { expected, found } => {
                write!(f, "expected `{expected}` line, found `{found}`")
            }
            Self::InvalidId { field, value } => {
                write!(f, "invalid uuid `{value}` in `{field}`")
            }
            Self::InvalidDate { field, value } => {
                write!(f, "invalid date `{value}` in `{field}`, expected dd/MM/yyyy")
            }
        }
    }
}

impl Error for CodecError {}

/// Decoded meeting fields with the attendee references still unresolved.
///
/// Attendee ids are resolved against the project's loaded individual set by
/// the graph loader, not by the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRecord {
    pub id: MeetingId,
    pub title: String,
    pub date: NaiveDate,
    pub summary: String,
    pub attendee_ids: Vec<IndividualId>,
}

pub fn encode_project(project: &Project) -> String {
    format!(
        "id:{}\ntitle:{}\ngoal:{}\nstartDate:{}",
        project.id,
        project.title,
        project.goal,
        format_date(project.start_date)
    )
}

/// Decodes a project config record. Member lists start empty; they are
/// populated from the sibling directories by the graph loader.
pub fn decode_project(text: &str) -> Result<Project, CodecError> {
    let mut lines = RecordLines::new(text);
    let id = parse_id("id", lines.field("id")?)?;
    let title = lines.field("title")?.to_string();
    let goal = lines.field("goal")?.to_string();
    let start_date = parse_date("startDate", lines.field("startDate")?)?;
    Ok(Project {
        id,
        title,
        goal,
        start_date,
        individuals: Vec::new(),
        meetings: Vec::new(),
    })
}

pub fn encode_individual(individual: &Individual) -> String {
    format!(
        "id:{}\nname:{}\nrole:{}",
        individual.id, individual.name, individual.role
    )
}

pub fn decode_individual(text: &str) -> Result<Individual, CodecError> {
    let mut lines = RecordLines::new(text);
    let id = parse_id("id", lines.field("id")?)?;
    let name = lines.field("name")?.to_string();
    let role = lines.field("role")?.to_string();
    Ok(Individual { id, name, role })
}

pub fn encode_meeting(meeting: &Meeting) -> String {
    let mut text = format!(
        "id:{}\ntitle:{}\ndate:{}\nsummary:{}\nattendees:",
        meeting.id,
        meeting.title,
        format_date(meeting.date),
        meeting.summary
    );
    let mut first = true;
    for id in meeting.attendee_ids() {
        if !first {
            text.push(',');
        }
        let _ = write!(text, "{id}");
        first = false;
    }
    text
}

pub fn decode_meeting(text: &str) -> Result<MeetingRecord, CodecError> {
    let mut lines = RecordLines::new(text);
    let id = parse_id("id", lines.field("id")?)?;
    let title = lines.field("title")?.to_string();
    let date = parse_date("date", lines.field("date")?)?;
    let summary = lines.field("summary")?.to_string();
    let attendee_ids = parse_attendee_ids(lines.field("attendees")?);
    Ok(MeetingRecord {
        id,
        title,
        date,
        summary,
        attendee_ids,
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_PATTERN).to_string()
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, CodecError> {
    if !DATE_SHAPE_RE.is_match(value) {
        return Err(CodecError::InvalidDate {
            field,
            value: value.to_string(),
        });
    }
    NaiveDate::parse_from_str(value, DATE_PATTERN).map_err(|_| CodecError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn parse_id(field: &'static str, value: &str) -> Result<Uuid, CodecError> {
    Uuid::parse_str(value).map_err(|_| CodecError::InvalidId {
        field,
        value: value.to_string(),
    })
}

/// Attendee references are best-effort: a token that is not canonical UUID
/// text could never match a loaded individual, so it is dropped here rather
/// than failing the whole meeting record.
fn parse_attendee_ids(value: &str) -> Vec<IndividualId> {
    if value.is_empty() {
        return Vec::new();
    }
    value
        .split(',')
        .filter_map(|token| Uuid::parse_str(token).ok())
        .collect()
}

/// Positional reader over the lines of one record.
struct RecordLines<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> RecordLines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
        }
    }

    /// Reads the next line, checks its key, and returns the value segment.
    ///
    /// The value is the text between the first and second colon; anything
    /// after a second colon is discarded (colon truncation, see module doc).
    fn field(&mut self, key: &'static str) -> Result<&'a str, CodecError> {
        let line = self.lines.next().ok_or(CodecError::MissingField(key))?;
        let mut segments = line.splitn(3, ':');
        let found = segments.next().unwrap_or_default();
        if found != key {
            return Err(CodecError::UnexpectedKey {
                expected: key,
                found: found.to_string(),
            });
        }
        segments.next().ok_or(CodecError::MissingField(key))
    }
}

#[cfg(test)]
mod tests {
    use super::{format_date, parse_date, CodecError};
    use chrono::NaiveDate;

    #[test]
    fn format_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(format_date(date), "02/01/2024");
    }

    #[test]
    fn parse_date_requires_padded_shape() {
        assert_eq!(
            parse_date("date", "02/01/2024"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        );
        assert!(matches!(
            parse_date("date", "2/1/2024"),
            Err(CodecError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_date("date", "2024-01-02"),
            Err(CodecError::InvalidDate { .. })
        ));
    }

    #[test]
    fn parse_date_rejects_impossible_calendar_dates() {
        assert!(matches!(
            parse_date("date", "31/02/2024"),
            Err(CodecError::InvalidDate { .. })
        ));
    }
}
