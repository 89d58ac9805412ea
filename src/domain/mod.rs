pub mod submission;

pub use submission::{LogSubmission, Severity};
