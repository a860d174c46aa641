//! Task-marker highlighting inside comment runs.

use crate::chars::is_identifier_char;
use crate::scan::{ScanContext, ScanState};

/// Marker words recognized inside comments.
const TASK_MARKERS: [&str; 5] = ["TODO", "FIXME", "HACK", "XXX", "NOTE"];

/// Paint a task-marker word under the cursor with `marker`, then return
/// to the surrounding comment state.
///
/// Fires only on a whole marker word: the cursor sits on its first
/// letter, the previous character is not an identifier character, and
/// neither is the character after the word. On a hit the cursor lands
/// on the character after the word and the caller re-dispatches it;
/// otherwise the cursor is untouched.
pub fn highlight_task_marker<S: ScanState>(sc: &mut ScanContext<'_, S>, marker: S) -> bool {
    if !sc.ch.is_ascii_uppercase() || is_identifier_char(sc.ch_prev) {
        return false;
    }
    for word in TASK_MARKERS {
        if let Some(length) = marker_length(sc, word) {
            let comment = sc.state();
            sc.set_state(marker);
            sc.advance(length);
            sc.set_state(comment);
            return true;
        }
    }
    false
}

/// Byte length of `word` when it starts at the cursor and ends on a
/// word boundary.
fn marker_length<S: ScanState>(sc: &ScanContext<'_, S>, word: &str) -> Option<u32> {
    let mut offset = 0u32;
    for &byte in word.as_bytes() {
        if sc.byte_at(sc.pos() + offset) != byte {
            return None;
        }
        offset += 1;
    }
    if is_identifier_char(sc.char_at(sc.pos() + offset)) {
        return None;
    }
    Some(offset)
}

#[cfg(test)]
mod tests;
