//! Data types for the change report
//!
//! A [`ReportModel`] is what the template renders. It only carries raw
//! per-resource fields; visibility and diff sections are derived from them.

use serde::Serialize;
use std::fmt;

use crate::manifest::ResourceIdentity;

/// Which resources appear in the summary table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Every resource found in either input
    #[default]
    Full,
    /// Only resources whose text differs
    Diff,
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportMode::Full => f.write_str("full"),
            ReportMode::Diff => f.write_str("diff"),
        }
    }
}

/// How a resource differs between the two inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
    Unchanged,
}

/// One resource, as seen from both inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRecord {
    pub identity: ResourceIdentity,
    pub in_source: bool,
    pub in_target: bool,
    /// Stored text on the source side, empty when absent
    pub source: String,
    /// Stored text on the target side, empty when absent
    pub target: String,
}

impl ComparisonRecord {
    /// Byte-for-byte comparison of the stored texts
    pub fn is_changed(&self) -> bool {
        self.source != self.target
    }

    pub fn change_kind(&self) -> ChangeKind {
        match (self.in_source, self.in_target) {
            (false, true) => ChangeKind::Added,
            (true, false) => ChangeKind::Removed,
            _ if self.is_changed() => ChangeKind::Modified,
            _ => ChangeKind::Unchanged,
        }
    }
}

/// Counts per change kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
}

impl ReportSummary {
    /// Get total number of changed resources
    pub fn total_changes(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "+{} added, -{} removed, ~{} changed, {} unchanged",
            self.added, self.removed, self.modified, self.unchanged
        )
    }
}

/// Everything the report template needs
#[derive(Debug, Clone, Serialize)]
pub struct ReportModel {
    pub mode: ReportMode,
    pub source_label: String,
    pub target_label: String,
    /// Ascending by composite key
    pub records: Vec<ComparisonRecord>,
    /// No record qualifies for the table under `mode`
    pub empty: bool,
    /// At least one record is changed
    pub has_changes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(in_source: bool, in_target: bool, source: &str, target: &str) -> ComparisonRecord {
        ComparisonRecord {
            identity: ResourceIdentity {
                group: None,
                version: "v1".to_string(),
                kind: "ConfigMap".to_string(),
                namespace: None,
                name: "a".to_string(),
            },
            in_source,
            in_target,
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn test_change_kind() {
        assert_eq!(record(false, true, "", "x\n").change_kind(), ChangeKind::Added);
        assert_eq!(record(true, false, "x\n", "").change_kind(), ChangeKind::Removed);
        assert_eq!(record(true, true, "x\n", "y\n").change_kind(), ChangeKind::Modified);
        assert_eq!(record(true, true, "x\n", "x\n").change_kind(), ChangeKind::Unchanged);
    }

    #[test]
    fn test_one_sided_record_is_changed() {
        assert!(record(false, true, "", "x\n").is_changed());
        assert!(record(true, false, "x\n", "").is_changed());
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ReportMode::Diff).unwrap(), "diff");
        assert_eq!(ReportMode::Full.to_string(), "full");
        assert_eq!(ReportMode::default(), ReportMode::Full);
    }

    #[test]
    fn test_summary_display() {
        let summary = ReportSummary {
            added: 1,
            removed: 2,
            modified: 3,
            unchanged: 4,
        };
        assert_eq!(summary.total_changes(), 6);
        assert_eq!(
            summary.to_string(),
            "+1 added, -2 removed, ~3 changed, 4 unchanged"
        );
    }
}
