//! Core data models for the working-time engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_entry;
mod employee;
mod week_record;
mod weekly_result;

pub use day_entry::{DayEntry, DayStatus};
pub use employee::{Employee, EmployeeDraft};
pub use week_record::{WeekKey, WeekRecord, WorkWeekday};
pub use weekly_result::{AuditStep, DayCalculation, WeeklyResult};
