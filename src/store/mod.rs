//! Persistent state: the roster, stored week records and current settings.
//!
//! [`Ledger`] holds everything in memory and implements the save workflow;
//! [`JsonFileStore`] reads and writes it as a single JSON document.

mod json_file;
mod ledger;

pub use json_file::JsonFileStore;
pub use ledger::{Ledger, WeekSheet};
