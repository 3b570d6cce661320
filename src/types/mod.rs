pub mod cluster;
pub mod config;
pub mod grade;
pub mod report;
pub mod subject;
