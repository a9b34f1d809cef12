//! Resource reconciliation and report modelling
//!
//! This module turns two collection indexes into the data a change report is
//! rendered from.
//!
//! # Example
//!
//! ```ignore
//! use crate::diff::{reconcile, ReportMode, ReportModel};
//!
//! let records = reconcile(&source_index, &target_index);
//! let model = ReportModel::build(records, ReportMode::Diff, "before.yaml", "after.yaml");
//! ```

mod differ;
mod reconciler;
mod report;
mod types;

pub use differ::{compute_edits, fenced_diff};
pub use reconciler::reconcile;
pub use types::{ComparisonRecord, ReportMode, ReportModel};
