pub mod humanize;
pub(crate) mod json;

pub use humanize::natural_time;
pub(crate) use json::*;
