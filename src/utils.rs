use std::fmt;

use chrono::{DateTime, NaiveDate};

/// Maximum number of artist IDs the `artists?ids=` endpoint accepts per call.
pub const ARTIST_IDS_PER_REQUEST: usize = 50;

/// The provider's three fixed top-track time windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeRange {
    Short,
    Medium,
    Long,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Short, TimeRange::Medium, TimeRange::Long];

    /// Human-facing label for headings, e.g. "short-term".
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Short => "short-term",
            TimeRange::Medium => "medium-term",
            TimeRange::Long => "long-term",
        }
    }
}

impl fmt::Display for TimeRange {
    /// The exact `time_range` query parameter value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TimeRange::Short => "short_term",
            TimeRange::Medium => "medium_term",
            TimeRange::Long => "long_term",
        };
        write!(f, "{}", value)
    }
}

/// Parses a time range from CLI input.
///
/// Accepts the bare window name ("short"), the query-parameter form
/// ("short_term"), or the hyphenated form ("short-term"), case-insensitively.
pub fn parse_time_range(input: &str) -> Result<TimeRange, String> {
    let normalized = input.trim().to_lowercase().replace('-', "_");
    match normalized.as_str() {
        "short" | "short_term" => Ok(TimeRange::Short),
        "medium" | "medium_term" => Ok(TimeRange::Medium),
        "long" | "long_term" => Ok(TimeRange::Long),
        "" => Err("time range cannot be empty".to_string()),
        other => Err(format!(
            "invalid value '{}' (expected short, medium, or long)",
            other
        )),
    }
}

/// Splits a set of IDs into request-sized batches.
///
/// Duplicates are removed first (first occurrence wins), then the distinct
/// IDs are chunked into ceil(N / chunk_size) groups of at most `chunk_size`,
/// preserving order. The union of the batches equals the distinct input set.
pub fn chunk_ids(ids: &[String], chunk_size: usize) -> Vec<Vec<String>> {
    let mut seen = std::collections::HashSet::new();
    let distinct: Vec<String> = ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect();

    distinct
        .chunks(chunk_size.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Parses an RFC 3339 `added_at` timestamp down to its calendar date.
///
/// An unparseable value falls back to the epoch date rather than the current
/// day, so it can never win a max-date aggregation.
pub fn parse_added_at_date(added_at: &str) -> NaiveDate {
    DateTime::parse_from_rfc3339(added_at)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}
