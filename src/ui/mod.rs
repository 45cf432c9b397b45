//! Command-line interface and result rendering.

pub mod cli;
pub mod report;
