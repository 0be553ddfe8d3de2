//! CLI command implementations

pub mod merge_all;
pub mod report;
pub mod scan;
