pub mod assessments;
pub mod auth;
pub mod health;
pub mod patients;
pub mod reports;
pub mod scoring;
