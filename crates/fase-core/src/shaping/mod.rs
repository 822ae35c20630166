//! Submission-record shaping: empty-value stripping and record assembly.

mod clean;
mod record;

pub use clean::clean_value;
pub use record::{shape_application, ApplicationStatus};
