//! Word-boundary arithmetic over the line content.
//!
//! The boundary index set is the sorted multiset of `{0, len}` plus the
//! offset of every whitespace character. Word motion and word deletion all
//! derive from this one set. The motions are defined by literal index
//! arithmetic rather than conventional next/previous-word jumps; see the
//! per-function rules below and test against them literally.

/// Sorted boundary index multiset: `{0, len}` plus every whitespace offset.
/// Duplicates are kept (e.g. leading whitespace duplicates the 0 entry).
fn boundaries(content: &str) -> Vec<usize> {
    let len = content.chars().count();
    let mut indices: Vec<usize> = content
        .chars()
        .enumerate()
        .filter(|(_, ch)| ch.is_whitespace())
        .map(|(i, _)| i)
        .collect();
    indices.push(0);
    indices.push(len);
    indices.sort_unstable();
    indices
}

/// Target of the next-word motion (`w`), or `None` when the cursor should
/// not move.
///
/// Within the final word-or-trailing-space span the motion wraps home to 0.
/// Otherwise, scanning interior boundaries ascending: a cursor sitting
/// exactly on a whitespace boundary advances by one; otherwise the target is
/// one past the first boundary strictly greater than the cursor.
pub fn next_word_start(content: &str, cursor: usize) -> Option<usize> {
    let idx = boundaries(content);
    let n = idx.len();
    if idx[n - 2] < cursor && cursor <= idx[n - 1] {
        return Some(0);
    }
    for &boundary in &idx[1..n - 1] {
        if boundary == cursor {
            return Some(cursor + 1);
        }
        if boundary > cursor {
            return Some(boundary + 1);
        }
    }
    None
}

/// Target of the previous-word motion (`b`), or `None` when the cursor
/// should not move.
///
/// Scanning interior boundaries ascending: a cursor exactly one past a
/// boundary jumps to one past the boundary before it (to 0 when that is the
/// line start); a cursor strictly inside a word jumps to the start of that
/// same word. A cursor inside the very first word but not at its exact
/// start is forced to 0.
pub fn prev_word_start(content: &str, cursor: usize) -> Option<usize> {
    let idx = boundaries(content);
    let n = idx.len();
    for i in 1..n - 1 {
        if idx[i] + 1 == cursor {
            if idx[i - 1] == 0 {
                return Some(0);
            }
            return Some(idx[i - 1] + 1);
        }
        if idx[i] < cursor && cursor <= idx[i + 1] {
            return Some(idx[i] + 1);
        }
    }
    if idx[0] < cursor && cursor < idx[1] {
        return Some(0);
    }
    None
}

/// Boundary pair `[begin, end)` bracketing the cursor, for word deletion.
///
/// The first pair with `idx[i] <= cursor <= idx[i + 1]` wins; a cursor at 0
/// takes the first boundary after the line start as its end.
pub fn word_span(content: &str, cursor: usize) -> (usize, usize) {
    let idx = boundaries(content);
    let n = idx.len();
    let mut begin = 0;
    let mut end = idx[n - 1];
    for i in 0..n - 1 {
        if idx[i] <= cursor && cursor <= idx[i + 1] {
            begin = idx[i];
            end = idx[i + 1];
            break;
        }
    }
    if cursor == 0 {
        end = idx[1];
    }
    (begin, end)
}
