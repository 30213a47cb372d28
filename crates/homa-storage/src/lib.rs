//! homa-storage
//!
//! SQLite persistence for patients, assessments and staff accounts.
//! Every statement is parameterized; column names only ever come from the
//! fixed field lists in `homa-core`.

pub mod assessments;
pub mod db;
pub mod error;
pub mod patients;
pub mod staff;

pub use db::{RecordCounts, Store};
