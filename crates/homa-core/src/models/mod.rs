pub mod assessment;
pub mod measurements;
pub mod patient;
pub mod scores;
pub mod staff;
