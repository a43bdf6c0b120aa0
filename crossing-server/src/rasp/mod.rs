//! Yandex.Rasp schedule client.
//!
//! This module provides an HTTP client for the Yandex.Rasp timetable
//! API, which supplies the suburban arrival schedule the closure
//! windows are derived from.
//!
//! Key characteristics of the API:
//! - Entries may be partial: `arrival` and `thread` are optional and
//!   records lacking them must be tolerated
//! - Timestamps are returned in a requested result timezone, so they
//!   carry an explicit UTC offset and parse as RFC 3339
//! - The schedule is queried per station and calendar day

mod client;
mod error;
mod types;

pub use client::{RaspClient, RaspConfig};
pub use error::RaspError;
pub use types::{ScheduleItem, ScheduleResponse, ThreadInfo};
