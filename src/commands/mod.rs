pub mod report;

pub use report::{ReportCommand, ReportOptions};
