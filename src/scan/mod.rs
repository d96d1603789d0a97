//! Source scanning: comment scrubbing and declaration matching
//!
//! One pass per source unit: the driver scrubs the raw text once, then runs
//! both matchers over the scrubbed result. Everything here is a pure
//! function of its input text; accumulation happens in [`crate::registry`].

pub mod matchers;
pub mod scrub;

pub use matchers::{match_events, match_suite};
pub use scrub::scrub;
