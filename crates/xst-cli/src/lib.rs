//! CLI library components for XSLT Studio.

pub mod logging;
pub mod runner;
