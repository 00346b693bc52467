//! Textual edits and their application.
//!
//! The rewrite core only *describes* edits; this module is the host side
//! that splices them into a source buffer. Edits arrive in groups (one group
//! per diagnostic) and a group is applied atomically: if any of its edits
//! overlaps an already-accepted edit, the whole group is skipped and left
//! for a later pass.

/// A single textual edit. `start == end` is a pure insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEdit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl SourceEdit {
    pub fn deletion(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            text: String::new(),
        }
    }

    pub fn insertion(at: usize, text: impl Into<String>) -> Self {
        Self {
            start: at,
            end: at,
            text: text.into(),
        }
    }

    pub fn is_insertion(&self) -> bool {
        self.start == self.end
    }

    /// Whether two edits touch conflicting ranges. Insertions at a range
    /// boundary are fine; an insertion strictly inside a deleted range, or
    /// any range intersection, is a conflict.
    pub fn overlaps(&self, other: &SourceEdit) -> bool {
        if self.is_insertion() && other.is_insertion() {
            return false;
        }
        if self.is_insertion() {
            return other.start < self.start && self.start < other.end;
        }
        if other.is_insertion() {
            return self.start < other.start && other.start < self.end;
        }
        self.start < other.end && other.start < self.end
    }
}

#[derive(Debug, Default)]
pub struct ApplyOutcome {
    pub source: String,
    /// Number of edit groups spliced in.
    pub applied: usize,
    /// Number of edit groups skipped because of an overlap.
    pub skipped: usize,
}

/// Apply edit groups to `source`. Within the accepted set, edits are
/// spliced right-to-left so earlier offsets stay valid; insertions at the
/// same offset keep their given order (the first group's text ends up
/// leftmost).
pub fn apply_edit_groups(source: &str, groups: &[Vec<SourceEdit>]) -> ApplyOutcome {
    let mut accepted: Vec<SourceEdit> = Vec::new();
    let mut applied = 0;
    let mut skipped = 0;

    for group in groups {
        let in_bounds = group.iter().all(|edit| edit.end <= source.len());
        let conflicts = group
            .iter()
            .any(|edit| accepted.iter().any(|prior| prior.overlaps(edit)));
        if !in_bounds || conflicts {
            skipped += 1;
            continue;
        }
        accepted.extend(group.iter().cloned());
        applied += 1;
    }

    let mut order: Vec<usize> = (0..accepted.len()).collect();
    order.sort_by_key(|&i| (accepted[i].start, accepted[i].end));

    let mut result = source.to_string();
    for &i in order.iter().rev() {
        let edit = &accepted[i];
        result.replace_range(edit.start..edit.end, &edit.text);
    }

    ApplyOutcome {
        source: result,
        applied,
        skipped,
    }
}
