//! Yandex.Rasp API response DTOs.
//!
//! These types map directly to the schedule endpoint's JSON response.
//! They use `Option` liberally because the provider omits fields on
//! partial records rather than guaranteeing them.

use serde::Deserialize;

/// Response from the schedule endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleResponse {
    /// Schedule entries for the requested station and date.
    /// Missing from the payload when the station has no services.
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
}

/// One entry of the station schedule.
///
/// An entry without `arrival` or `thread` cannot be turned into a
/// closure window and is skipped downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleItem {
    /// Arrival timestamp in the requested result timezone (RFC 3339).
    pub arrival: Option<String>,

    /// The service this entry belongs to.
    pub thread: Option<ThreadInfo>,

    /// Human-readable description of intermediate stops.
    pub stops: Option<String>,

    /// Human-readable day-of-week pattern (e.g. "daily").
    pub days: Option<String>,
}

/// Provider's descriptor of one scheduled train run.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadInfo {
    /// Short display title, usually the route number.
    pub short_title: Option<String>,

    /// Full route title (origin — destination).
    pub title: Option<String>,

    /// Service number.
    pub number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_entry() {
        let json = r#"{
            "schedule": [
                {
                    "arrival": "2026-08-04T10:00:00+03:00",
                    "thread": {
                        "short_title": "6602",
                        "title": "Moscow — Serpukhov",
                        "number": "6602"
                    },
                    "stops": "everywhere",
                    "days": "daily"
                }
            ]
        }"#;

        let resp: ScheduleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.schedule.len(), 1);

        let item = &resp.schedule[0];
        assert_eq!(item.arrival.as_deref(), Some("2026-08-04T10:00:00+03:00"));
        assert_eq!(
            item.thread.as_ref().unwrap().short_title.as_deref(),
            Some("6602")
        );
        assert_eq!(item.stops.as_deref(), Some("everywhere"));
        assert_eq!(item.days.as_deref(), Some("daily"));
    }

    #[test]
    fn tolerates_partial_entries() {
        let json = r#"{
            "schedule": [
                { "thread": { "number": "6604" } },
                { "arrival": "2026-08-04T10:00:00+03:00" },
                {}
            ]
        }"#;

        let resp: ScheduleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.schedule.len(), 3);
        assert!(resp.schedule[0].arrival.is_none());
        assert!(resp.schedule[1].thread.is_none());
        assert!(resp.schedule[2].arrival.is_none());
    }

    #[test]
    fn missing_schedule_array_is_empty() {
        let resp: ScheduleResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.schedule.is_empty());
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{
            "schedule": [],
            "pagination": { "total": 0 },
            "date": "2026-08-04"
        }"#;

        let resp: ScheduleResponse = serde_json::from_str(json).unwrap();
        assert!(resp.schedule.is_empty());
    }
}
