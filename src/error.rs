//! Shared error contract for domain error enums.
//!
//! Every service error carries a stable machine-readable code alongside its
//! display message. Routes put the code in JSON error bodies and log fields.

pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}
