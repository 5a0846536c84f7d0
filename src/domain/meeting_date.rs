use chrono::{DateTime, Datelike, Local, NaiveDate};

pub const MEETING_DATE_FORMAT: &str = "%Y-%m-%d";

const MONTH_NAMES: [&str; 12] = [
    "JANEIRO",
    "FEVEREIRO",
    "MARÇO",
    "ABRIL",
    "MAIO",
    "JUNHO",
    "JULHO",
    "AGOSTO",
    "SETEMBRO",
    "OUTUBRO",
    "NOVEMBRO",
    "DEZEMBRO",
];

/// Which candidate produced the meeting date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    SummaryHint,
    MessageTimestamp,
    ExecutionTime,
}

/// Calendar date printed on the minutes document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingDate {
    pub date: NaiveDate,
    pub source: DateSource,
}

/// Date split into the fields the document template expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateComponents {
    pub day: String,
    pub month: String,
    pub year: String,
    /// `DD/MM/YYYY`
    pub formatted: String,
}

impl MeetingDate {
    /// Picks the first usable source: summary hint, then message timestamp, then `now`.
    ///
    /// A hint that is not a `YYYY-MM-DD` date and a timestamp outside chrono's range
    /// are skipped rather than rejected.
    pub fn resolve(
        hint: Option<&str>,
        message_timestamp: Option<i64>,
        now: DateTime<Local>,
    ) -> Self {
        if let Some(date) = hint.and_then(parse_hint) {
            return Self {
                date,
                source: DateSource::SummaryHint,
            };
        }

        if let Some(date) = message_timestamp.and_then(local_date_of) {
            return Self {
                date,
                source: DateSource::MessageTimestamp,
            };
        }

        Self {
            date: now.date_naive(),
            source: DateSource::ExecutionTime,
        }
    }

    pub fn components(&self) -> DateComponents {
        let month_index = self.date.month0() as usize;
        DateComponents {
            day: format!("{:02}", self.date.day()),
            month: MONTH_NAMES[month_index].to_string(),
            year: self.date.year().to_string(),
            formatted: self.date.format("%d/%m/%Y").to_string(),
        }
    }
}

fn parse_hint(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, MEETING_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(hint = %trimmed, error = %e, "Ignoring unparseable meeting date hint");
            None
        }
    }
}

fn local_date_of(timestamp: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(&Local).date_naive())
}
