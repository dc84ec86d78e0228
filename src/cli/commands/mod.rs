pub mod config;
pub mod explore;
pub mod init;
pub mod report;
pub mod rows;
