//! Line-based text diffing

use similar::{ChangeTag, TextDiff};

/// Header names used on the `---`/`+++` lines
const SOURCE_HEADER: &str = "source";
const TARGET_HEADER: &str = "target";

/// Lines of unchanged context around each hunk
const CONTEXT_RADIUS: usize = 3;

/// Edit script between two texts
pub struct EditScript<'a> {
    diff: TextDiff<'a, 'a, 'a, str>,
}

/// Compute the line edits turning `source` into `target`
pub fn compute_edits<'a>(source: &'a str, target: &'a str) -> EditScript<'a> {
    EditScript {
        diff: TextDiff::from_lines(source, target),
    }
}

impl<'a> EditScript<'a> {
    /// Render as a unified diff
    pub fn render_unified(&'a self) -> String {
        self.diff
            .unified_diff()
            .context_radius(CONTEXT_RADIUS)
            .header(SOURCE_HEADER, TARGET_HEADER)
            .to_string()
    }

    /// Number of inserted and deleted lines
    pub fn line_counts(&self) -> (usize, usize) {
        self.diff
            .iter_all_changes()
            .fold((0, 0), |(inserted, deleted), change| match change.tag() {
                ChangeTag::Insert => (inserted + 1, deleted),
                ChangeTag::Delete => (inserted, deleted + 1),
                ChangeTag::Equal => (inserted, deleted),
            })
    }
}

/// Unified diff between two texts wrapped in a ```` ```diff ```` block
pub fn fenced_diff(source: &str, target: &str) -> String {
    let unified = compute_edits(source, target).render_unified();
    format!("```diff\n{}```", unified)
}
