//! Built-in type helpers.

pub mod date_time;
pub mod json;

pub use date_time::DateTimeHelper;
pub use json::JsonHelper;
