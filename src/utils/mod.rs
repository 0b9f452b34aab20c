//! Utility modules for the studentdesk application.
//!
//! - [`datetime`] - Due date parsing and human-readable formatting

pub mod datetime;
