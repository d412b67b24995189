//! Sequential latest-upload-time resolution engine.
//!
//! Given the ids of followed creators, resolves the timestamp of each
//! creator's most recent upload by loading their public upload page in an
//! isolated navigation surface, one page at a time. Outcomes are cached for
//! the session, failures are classified retryable vs. terminal, and the
//! first risk-control block page trips a one-way breaker that halts all
//! further navigation.

pub mod breaker;
pub mod cache;
pub mod config;
pub mod entity;
pub mod extract;
pub mod logging;
pub mod outcome;
pub mod page;
pub mod queue;
pub mod resolver;
pub mod surface;
pub mod timetext;
