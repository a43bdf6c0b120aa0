//! Closure window computation.
//!
//! Turns raw schedule entries into normalized, sorted closure
//! intervals. The barrier is modeled as closed for a fixed number of
//! minutes before and after each scheduled arrival; no train physics
//! is involved.
//!
//! Malformed entries (missing arrival, missing thread, unparsable
//! timestamp) are skipped silently rather than failing the whole
//! batch: the upstream data is allowed to contain partial records.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::debug;

use crate::rasp::{ScheduleItem, ThreadInfo};

/// Display title used when the provider supplies neither a short nor a
/// full title for a service.
const FALLBACK_TITLE: &str = "Suburban train";

/// Closure window model: how many minutes before and after each
/// arrival the barrier is treated as closed.
#[derive(Debug, Clone)]
pub struct ClosureConfig {
    pub closed_before_min: u32,
    pub closed_after_min: u32,
}

impl Default for ClosureConfig {
    fn default() -> Self {
        Self {
            closed_before_min: 3,
            closed_after_min: 2,
        }
    }
}

/// One computed time window during which the barrier is closed.
///
/// Invariant: `start <= arrival <= end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub arrival: DateTime<Utc>,

    /// Display title of the service (short title, else full title,
    /// else a fixed fallback).
    pub title: String,
    pub number: String,
    pub stops: String,
    pub days: String,
}

/// All closure windows for one station and date, with the parameters
/// used to compute them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureResult {
    /// Intervals in ascending order of start instant.
    pub intervals: Vec<ClosureInterval>,
    pub station: String,
    pub date: NaiveDate,
    pub closed_before_min: u32,
    pub closed_after_min: u32,
}

/// Compute closure windows from raw schedule entries.
///
/// Entries missing an arrival timestamp or a service descriptor, or
/// whose timestamp does not parse, are dropped. The result is sorted
/// ascending by start instant; equal-start entries retain their input
/// order. An empty schedule yields an empty list.
pub fn compute_intervals(
    schedule: &[ScheduleItem],
    before_min: u32,
    after_min: u32,
) -> Vec<ClosureInterval> {
    let before = Duration::minutes(i64::from(before_min));
    let after = Duration::minutes(i64::from(after_min));

    let mut intervals: Vec<ClosureInterval> = schedule
        .iter()
        .filter_map(|item| {
            let raw_arrival = item.arrival.as_deref()?;
            let thread = item.thread.as_ref()?;
            let arrival = DateTime::parse_from_rfc3339(raw_arrival)
                .ok()?
                .with_timezone(&Utc);

            Some(ClosureInterval {
                start: arrival - before,
                end: arrival + after,
                arrival,
                title: resolve_title(thread),
                number: thread.number.clone().unwrap_or_default(),
                stops: item.stops.clone().unwrap_or_default(),
                days: item.days.clone().unwrap_or_default(),
            })
        })
        .collect();

    let dropped = schedule.len() - intervals.len();
    if dropped > 0 {
        debug!(dropped, "skipped malformed schedule entries");
    }

    // No ordering is assumed from the provider. sort_by_key is stable,
    // so equal-start entries keep their input order.
    intervals.sort_by_key(|i| i.start);
    intervals
}

/// First non-empty of short title and full title, else the fallback.
fn resolve_title(thread: &ThreadInfo) -> String {
    [thread.short_title.as_deref(), thread.title.as_deref()]
        .into_iter()
        .flatten()
        .find(|t| !t.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| FALLBACK_TITLE.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread(short: Option<&str>, title: Option<&str>, number: Option<&str>) -> ThreadInfo {
        ThreadInfo {
            short_title: short.map(str::to_owned),
            title: title.map(str::to_owned),
            number: number.map(str::to_owned),
        }
    }

    fn item(arrival: Option<&str>, thread: Option<ThreadInfo>) -> ScheduleItem {
        ScheduleItem {
            arrival: arrival.map(str::to_owned),
            thread,
            stops: None,
            days: None,
        }
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn offsets_applied_around_arrival() {
        let schedule = vec![item(
            Some("2026-08-04T10:00:00+03:00"),
            Some(thread(Some("6602"), None, None)),
        )];

        let intervals = compute_intervals(&schedule, 3, 2);

        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].arrival, utc("2026-08-04T07:00:00Z"));
        assert_eq!(intervals[0].start, utc("2026-08-04T06:57:00Z"));
        assert_eq!(intervals[0].end, utc("2026-08-04T07:02:00Z"));
    }

    #[test]
    fn zero_offsets_collapse_to_arrival() {
        let schedule = vec![item(
            Some("2026-08-04T10:00:00Z"),
            Some(thread(Some("6602"), None, None)),
        )];

        let intervals = compute_intervals(&schedule, 0, 0);

        assert_eq!(intervals[0].start, intervals[0].arrival);
        assert_eq!(intervals[0].end, intervals[0].arrival);
    }

    #[test]
    fn invalid_entries_are_dropped() {
        let schedule = vec![
            // No arrival
            item(None, Some(thread(Some("6602"), None, None))),
            // No thread
            item(Some("2026-08-04T10:00:00Z"), None),
            // Unparsable arrival
            item(Some("not-a-timestamp"), Some(thread(Some("6604"), None, None))),
            // Valid
            item(
                Some("2026-08-04T10:00:00Z"),
                Some(thread(Some("6606"), None, None)),
            ),
        ];

        let intervals = compute_intervals(&schedule, 3, 2);

        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].title, "6606");
    }

    #[test]
    fn empty_schedule_yields_empty_list() {
        assert!(compute_intervals(&[], 3, 2).is_empty());
    }

    #[test]
    fn title_short_title_wins() {
        let schedule = vec![item(
            Some("2026-08-04T10:00:00Z"),
            Some(thread(
                Some("6602"),
                Some("Moscow — Serpukhov"),
                Some("6602"),
            )),
        )];

        let intervals = compute_intervals(&schedule, 3, 2);
        assert_eq!(intervals[0].title, "6602");
    }

    #[test]
    fn title_falls_back_to_full_title() {
        let schedule = vec![item(
            Some("2026-08-04T10:00:00Z"),
            Some(thread(Some(""), Some("Moscow — Serpukhov"), None)),
        )];

        let intervals = compute_intervals(&schedule, 3, 2);
        assert_eq!(intervals[0].title, "Moscow — Serpukhov");
    }

    #[test]
    fn title_falls_back_to_label() {
        let schedule = vec![
            item(Some("2026-08-04T10:00:00Z"), Some(thread(Some(""), Some(""), None))),
            item(Some("2026-08-04T11:00:00Z"), Some(thread(None, None, None))),
        ];

        let intervals = compute_intervals(&schedule, 3, 2);
        assert_eq!(intervals[0].title, FALLBACK_TITLE);
        assert_eq!(intervals[1].title, FALLBACK_TITLE);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let schedule = vec![item(
            Some("2026-08-04T10:00:00Z"),
            Some(thread(Some("6602"), None, None)),
        )];

        let intervals = compute_intervals(&schedule, 3, 2);
        assert_eq!(intervals[0].number, "");
        assert_eq!(intervals[0].stops, "");
        assert_eq!(intervals[0].days, "");
    }

    #[test]
    fn sorted_by_start_regardless_of_input_order() {
        let schedule = vec![
            item(
                Some("2026-08-04T10:00:00Z"),
                Some(thread(Some("later"), None, None)),
            ),
            item(
                Some("2026-08-04T09:58:00Z"),
                Some(thread(Some("earlier"), None, None)),
            ),
        ];

        let intervals = compute_intervals(&schedule, 3, 2);

        assert_eq!(intervals[0].title, "earlier");
        assert_eq!(intervals[0].start, utc("2026-08-04T09:55:00Z"));
        assert_eq!(intervals[0].end, utc("2026-08-04T10:00:00Z"));
        assert_eq!(intervals[1].title, "later");
        assert_eq!(intervals[1].start, utc("2026-08-04T09:57:00Z"));
        assert_eq!(intervals[1].end, utc("2026-08-04T10:02:00Z"));
    }

    #[test]
    fn equal_starts_keep_input_order() {
        // Same instant expressed in two offsets
        let schedule = vec![
            item(
                Some("2026-08-04T13:00:00+03:00"),
                Some(thread(Some("first"), None, None)),
            ),
            item(
                Some("2026-08-04T10:00:00Z"),
                Some(thread(Some("second"), None, None)),
            ),
        ];

        let intervals = compute_intervals(&schedule, 3, 2);

        assert_eq!(intervals[0].start, intervals[1].start);
        assert_eq!(intervals[0].title, "first");
        assert_eq!(intervals[1].title, "second");
    }

    #[test]
    fn compute_is_idempotent() {
        let schedule = vec![
            item(
                Some("2026-08-04T10:00:00+03:00"),
                Some(thread(Some("6602"), Some("Moscow — Serpukhov"), Some("6602"))),
            ),
            item(Some("bad"), Some(thread(None, None, None))),
        ];

        let first = compute_intervals(&schedule, 3, 2);
        let second = compute_intervals(&schedule, 3, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn default_config() {
        let config = ClosureConfig::default();
        assert_eq!(config.closed_before_min, 3);
        assert_eq!(config.closed_after_min, 2);
    }
}
