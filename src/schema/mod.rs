//! Schema module - Configuration, corpus and result types for clustering runs.

mod config;
mod corpus;
mod report;

pub use config::*;
pub use corpus::*;
pub use report::*;
