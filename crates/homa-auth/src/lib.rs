//! homa-auth
//!
//! Staff authentication: password hashing, session tokens, and the
//! signup/login flows built on them.

pub mod error;
pub mod flows;
pub mod jwt;
pub mod password;
