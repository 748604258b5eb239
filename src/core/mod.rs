pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod log;
pub mod report;
pub mod stats;
