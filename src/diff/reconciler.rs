//! Merges two collection indexes into one ordered list of records

use std::collections::BTreeSet;
use tracing::debug;

use super::types::ComparisonRecord;
use crate::manifest::{CollectionIndex, ResourceKey};

/// Produce one record per key found in either index, ascending by key
pub fn reconcile(source: &CollectionIndex, target: &CollectionIndex) -> Vec<ComparisonRecord> {
    let keys: BTreeSet<&ResourceKey> = source.keys().chain(target.keys()).collect();

    let records: Vec<ComparisonRecord> = keys
        .into_iter()
        .filter_map(|key| {
            // Both sides derive the identity from the same fields, so either one will do
            let identity = source.identity(key).or_else(|| target.identity(key))?;
            let source_text = source.text(key);
            let target_text = target.text(key);

            Some(ComparisonRecord {
                identity: identity.clone(),
                in_source: source_text.is_some(),
                in_target: target_text.is_some(),
                source: source_text.unwrap_or_default().to_string(),
                target: target_text.unwrap_or_default().to_string(),
            })
        })
        .collect();

    debug!(
        source = source.len(),
        target = target.len(),
        records = records.len(),
        "Reconciled collections"
    );
    records
}
