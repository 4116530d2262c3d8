//! Plain-text screens written to any `Write` sink.

pub mod question;
pub mod report;
pub mod review;
