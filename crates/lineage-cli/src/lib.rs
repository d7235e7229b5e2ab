//! Library components of the `lineage` command line tool.

pub mod config;
pub mod logging;
pub mod outline;
