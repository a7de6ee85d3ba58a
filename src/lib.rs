pub mod constants;
pub mod error;
pub mod report;
pub mod runner;
pub mod transform;
