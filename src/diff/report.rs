//! Assembly of the report model

use tracing::debug;

use super::types::{ChangeKind, ComparisonRecord, ReportMode, ReportModel, ReportSummary};

impl ReportModel {
    /// Assemble the report for already reconciled records
    pub fn build(
        records: Vec<ComparisonRecord>,
        mode: ReportMode,
        source_label: impl Into<String>,
        target_label: impl Into<String>,
    ) -> Self {
        let has_changes = records.iter().any(ComparisonRecord::is_changed);
        let empty = !records.iter().any(|record| is_visible(record, mode));

        debug!(%mode, records = records.len(), empty, has_changes, "Built report model");

        Self {
            mode,
            source_label: source_label.into(),
            target_label: target_label.into(),
            records,
            empty,
            has_changes,
        }
    }

    /// Records shown in the summary table
    pub fn visible_records(&self) -> impl Iterator<Item = &ComparisonRecord> {
        self.records
            .iter()
            .filter(move |record| is_visible(record, self.mode))
    }

    /// Records that get a diff section, whatever the mode
    pub fn changed_records(&self) -> impl Iterator<Item = &ComparisonRecord> {
        self.records.iter().filter(|record| record.is_changed())
    }

    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary::default();
        for record in &self.records {
            match record.change_kind() {
                ChangeKind::Added => summary.added += 1,
                ChangeKind::Removed => summary.removed += 1,
                ChangeKind::Modified => summary.modified += 1,
                ChangeKind::Unchanged => summary.unchanged += 1,
            }
        }
        summary
    }
}

fn is_visible(record: &ComparisonRecord, mode: ReportMode) -> bool {
    match mode {
        ReportMode::Full => true,
        ReportMode::Diff => record.is_changed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ResourceIdentity;

    fn record(name: &str, source: Option<&str>, target: Option<&str>) -> ComparisonRecord {
        ComparisonRecord {
            identity: ResourceIdentity {
                group: None,
                version: "v1".to_string(),
                kind: "ConfigMap".to_string(),
                namespace: Some("ops".to_string()),
                name: name.to_string(),
            },
            in_source: source.is_some(),
            in_target: target.is_some(),
            source: source.unwrap_or_default().to_string(),
            target: target.unwrap_or_default().to_string(),
        }
    }

    fn sample() -> Vec<ComparisonRecord> {
        vec![
            record("added", None, Some("a\n")),
            record("modified", Some("x\n"), Some("y\n")),
            record("removed", Some("r\n"), None),
            record("same", Some("s\n"), Some("s\n")),
        ]
    }

    fn names<'a>(records: impl Iterator<Item = &'a ComparisonRecord>) -> Vec<&'a str> {
        records.map(|r| r.identity.name.as_str()).collect()
    }

    #[test]
    fn test_full_mode_shows_every_record() {
        let model = ReportModel::build(sample(), ReportMode::Full, "a.yaml", "b.yaml");
        assert_eq!(model.visible_records().count(), 4);
        assert!(!model.empty);
        assert!(model.has_changes);
    }

    #[test]
    fn test_diff_mode_hides_unchanged_records() {
        let model = ReportModel::build(sample(), ReportMode::Diff, "a.yaml", "b.yaml");
        assert_eq!(
            names(model.visible_records()),
            vec!["added", "modified", "removed"]
        );
    }

    #[test]
    fn test_changed_records_are_visible_in_both_modes() {
        let full = ReportModel::build(sample(), ReportMode::Full, "a", "b");
        let diff = ReportModel::build(sample(), ReportMode::Diff, "a", "b");

        for changed in full.changed_records() {
            assert!(full.visible_records().any(|r| r == changed));
            assert!(diff.visible_records().any(|r| r == changed));
        }
        assert!(diff.visible_records().all(ComparisonRecord::is_changed));
    }

    #[test]
    fn test_unchanged_records_never_get_a_diff_section() {
        let model = ReportModel::build(sample(), ReportMode::Full, "a", "b");
        assert_eq!(
            names(model.changed_records()),
            vec!["added", "modified", "removed"]
        );
    }

    #[test]
    fn test_empty_detection() {
        let none = ReportModel::build(Vec::new(), ReportMode::Full, "a", "b");
        assert!(none.empty);
        assert!(!none.has_changes);

        let unchanged = vec![record("same", Some("s\n"), Some("s\n"))];
        let diff = ReportModel::build(unchanged.clone(), ReportMode::Diff, "a", "b");
        assert!(diff.empty);
        let full = ReportModel::build(unchanged, ReportMode::Full, "a", "b");
        assert!(!full.empty);
        assert!(!full.has_changes);
    }

    #[test]
    fn test_summary_counts() {
        let model = ReportModel::build(sample(), ReportMode::Diff, "a", "b");
        let summary = model.summary();
        assert_eq!(
            summary,
            ReportSummary {
                added: 1,
                removed: 1,
                modified: 1,
                unchanged: 1,
            }
        );
    }
}
