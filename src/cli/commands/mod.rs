pub mod audit;
pub mod compare;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod filter;
pub mod init;
pub mod list;
pub mod log;
pub mod predict;
pub mod show;
pub mod stats;
