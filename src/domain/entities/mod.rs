//! Domain Entities

mod report;

pub use report::{Report, ReportStatus};
