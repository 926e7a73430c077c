//! Library entrypoint for rsb.
//!
//! The primary interface is the `rsb` binary. This lib target exists to
//! expose the logger and build metadata to integration tests.

pub mod banner;
pub mod build_info;
pub mod build_stamp;
pub mod output;
