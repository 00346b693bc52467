//! Deletion-span resolution.
//!
//! Removing an argument must leave the surrounding argument list valid: no
//! orphaned comma, no doubled space. Every extension below probes for the
//! literal byte before consuming it; a separator is never assumed to be
//! present.

/// Resolve the byte range to delete for a matched argument at
/// `[start, end)`.
///
/// The end extends over one trailing `,` and then one trailing space, each
/// only if actually present. When there is no trailing comma the argument
/// is the last one, so the start extends backward over one space and then
/// one `,`, again each only if present. A sole argument therefore keeps
/// exactly its own bounds.
pub fn deletion_range(source: &str, start: usize, end: usize) -> (usize, usize) {
    let bytes = source.as_bytes();
    let mut start = start;
    let mut end = end;

    let trailing_comma = bytes.get(end) == Some(&b',');
    if trailing_comma {
        end += 1;
    }
    if bytes.get(end) == Some(&b' ') {
        end += 1;
    }

    if !trailing_comma {
        if start > 0 && bytes[start - 1] == b' ' {
            start -= 1;
        }
        if start > 0 && bytes[start - 1] == b',' {
            start -= 1;
        }
    }

    (start, end)
}
