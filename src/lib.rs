//! Weekly working-time engine for small teams.
//!
//! This crate records planned and worked hours per employee for the five
//! weekdays of an ISO week, deducts breaks by a threshold rule, totals each
//! week against a contractual target, and carries the surplus or deficit
//! forward as a running balance. The [`store`] module keeps the roster and
//! week records in a JSON file and the [`api`] module serves them over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
