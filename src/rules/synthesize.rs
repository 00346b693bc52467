//! Edit-pair synthesis.
//!
//! For every match the rewriter produces exactly two edits: a deletion over
//! the resolved argument span and an insertion of the builder call one byte
//! past the construction expression's closing delimiter. The two always
//! travel together under one diagnostic so the host can apply or skip them
//! atomically.

use crate::core::edits::SourceEdit;

use super::RewriteRule;
use super::span::deletion_range;

/// The deletion and insertion produced for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPair {
    pub deletion: SourceEdit,
    pub insertion: SourceEdit,
}

impl EditPair {
    pub fn into_group(self) -> Vec<SourceEdit> {
        vec![self.deletion, self.insertion]
    }
}

/// The builder-call text for a rule and a captured argument.
pub fn builder_call(rule: &RewriteRule, captured: &str) -> String {
    if rule.carries_argument {
        format!(".{}({})", rule.method, captured)
    } else {
        format!(".{}()", rule.method)
    }
}

/// Synthesize the edit pair for one match.
///
/// `call_end` is the byte offset one past the call-site's closing
/// delimiter; `arg` is the argument's own byte range. The captured text is
/// the exact original bytes of the argument, so arbitrarily complex
/// sub-expressions carry over unchanged.
pub fn synthesize(
    rule: &RewriteRule,
    source: &str,
    call_end: usize,
    arg: (usize, usize),
) -> (EditPair, String) {
    let (del_start, del_end) = deletion_range(source, arg.0, arg.1);
    let captured = source[arg.0..arg.1].to_string();
    let insertion_text = builder_call(rule, &captured);

    let pair = EditPair {
        deletion: SourceEdit::deletion(del_start, del_end),
        insertion: SourceEdit::insertion(call_end, insertion_text),
    };
    (pair, captured)
}
