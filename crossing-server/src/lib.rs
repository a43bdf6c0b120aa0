//! Level crossing closure server.
//!
//! A web application that answers: "during which time windows is the
//! level crossing barrier closed today?" Closure windows are derived
//! from the suburban arrival schedule at the station next to the
//! crossing, using a fixed before/after offset around each arrival.

pub mod cache;
pub mod closures;
pub mod rasp;
pub mod web;
