//! probeplot – offline plotting and summary statistics for Prime+Probe
//! cache-timing measurements.
//!
//! The measurement tool (out of scope here) writes one CSV row per probe
//! round with an access-time reading per monitored cache set. This crate
//! loads that CSV, renders the selected sets against the hit/miss threshold,
//! and reports per-set summary statistics.

pub mod app;
pub mod chart;
pub mod cli;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod stats;
pub mod ui;
