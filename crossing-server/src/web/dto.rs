//! Data transfer objects for the closures API.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::closures::{ClosureInterval, ClosureResult};

/// Response for `GET /api/closures`.
#[derive(Debug, Serialize)]
pub struct ClosuresResponse {
    /// Closure windows in ascending order of start
    pub intervals: Vec<IntervalResult>,

    /// Parameters the windows were computed with
    pub meta: ClosuresMeta,
}

impl ClosuresResponse {
    /// Build the wire representation of a computed result.
    pub fn from_result(result: &ClosureResult) -> Self {
        Self {
            intervals: result.intervals.iter().map(IntervalResult::from_interval).collect(),
            meta: ClosuresMeta {
                station: result.station.clone(),
                date: result.date.to_string(),
                closed_before_min: result.closed_before_min,
                closed_after_min: result.closed_after_min,
            },
        }
    }
}

/// One closure window on the wire.
#[derive(Debug, Serialize)]
pub struct IntervalResult {
    /// Window start, ISO-8601 UTC
    pub start: String,

    /// Window end, ISO-8601 UTC
    pub end: String,

    /// Scheduled arrival the window is built around, ISO-8601 UTC
    pub arrival: String,

    /// Service display title
    pub title: String,

    /// Service number (may be empty)
    pub number: String,

    /// Intermediate stops description (may be empty)
    pub stops: String,

    /// Day-of-week pattern (may be empty)
    pub days: String,
}

impl IntervalResult {
    fn from_interval(interval: &ClosureInterval) -> Self {
        Self {
            start: iso_utc(interval.start),
            end: iso_utc(interval.end),
            arrival: iso_utc(interval.arrival),
            title: interval.title.clone(),
            number: interval.number.clone(),
            stops: interval.stops.clone(),
            days: interval.days.clone(),
        }
    }
}

/// Metadata block of the closures response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosuresMeta {
    /// Station identifier the schedule was queried for
    pub station: String,

    /// Date the windows cover (`YYYY-MM-DD`)
    pub date: String,

    /// Minutes the barrier closes before each arrival
    pub closed_before_min: u32,

    /// Minutes the barrier stays closed after each arrival
    pub closed_after_min: u32,
}

/// Error body for failed requests.
///
/// `status` and `body` are present for upstream provider failures,
/// `detail` for transport failures; a bare `error` means a
/// configuration problem.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: None,
            body: None,
            detail: None,
        }
    }
}

fn iso_utc(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
