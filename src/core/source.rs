//! Byte-level access to one file's source text.
//!
//! Spans coming out of the parser are positions in the source map's global
//! address space; edits are byte ranges within one file. `SourceText` does
//! the translation and hands out verbatim snippets: the captured text of a
//! rewritten argument is always the exact original bytes, never a
//! re-serialization of the AST.

use swc_common::{BytePos, SourceFile, SourceMap, Span, sync::Lrc};

pub struct SourceText<'a> {
    source: &'a str,
    start: BytePos,
}

impl<'a> SourceText<'a> {
    pub fn new(file: &Lrc<SourceFile>, source: &'a str) -> Self {
        Self {
            source,
            start: file.start_pos,
        }
    }

    /// Byte offset of a parser position within this file.
    pub fn offset(&self, pos: BytePos) -> usize {
        (pos.0 - self.start.0) as usize
    }

    /// Half-open byte range of a span within this file.
    pub fn range(&self, span: Span) -> (usize, usize) {
        (self.offset(span.lo), self.offset(span.hi))
    }

    /// The exact original text under a span.
    pub fn snippet(&self, span: Span) -> &'a str {
        let (start, end) = self.range(span);
        &self.source[start..end]
    }
}

/// Line number (1-based), display column (1-based) and the full line of
/// text at a position, for diagnostics.
pub fn line_context(source_map: &SourceMap, pos: BytePos) -> (usize, usize, Option<String>) {
    let loc = source_map.lookup_char_pos(pos);
    let line_text = loc.file.get_line(loc.line - 1).map(|line| line.to_string());
    (loc.line, loc.col_display + 1, line_text)
}
