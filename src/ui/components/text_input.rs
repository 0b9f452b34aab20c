//! Character-aware line editing shared by dialogs and form fields.
//!
//! The cursor is a char index, never a byte index, so multi-byte input
//! (accented names, emoji) edits cleanly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn byte_offset(buffer: &str, cursor: usize) -> usize {
    buffer.chars().take(cursor).map(|ch| ch.len_utf8()).sum()
}

/// Apply an editing key to `buffer`. Returns false when the key is not an editing key.
pub fn handle_edit_key(buffer: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    let char_count = buffer.chars().count();
    *cursor = (*cursor).min(char_count);

    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let at = byte_offset(buffer, *cursor);
            buffer.insert(at, c);
            *cursor += 1;
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                let start = byte_offset(buffer, *cursor - 1);
                buffer.remove(start);
                *cursor -= 1;
            }
        }
        KeyCode::Delete => {
            if *cursor < char_count {
                let at = byte_offset(buffer, *cursor);
                buffer.remove(at);
            }
        }
        KeyCode::Left => *cursor = cursor.saturating_sub(1),
        KeyCode::Right => *cursor = (*cursor + 1).min(char_count),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = char_count,
        _ => return false,
    }
    true
}

/// Buffer text with a block cursor drawn at `cursor`
pub fn with_cursor(buffer: &str, cursor: usize) -> String {
    let split = byte_offset(buffer, cursor.min(buffer.chars().count()));
    format!("{}█{}", &buffer[..split], &buffer[split..])
}
