//! homa-core
//!
//! Pure domain types and validation rules. No storage or HTTP dependency;
//! this is the shared vocabulary of the HOMA IQ system.

pub mod error;
pub mod models;
pub mod validation;
