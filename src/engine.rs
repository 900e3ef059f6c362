use crate::key::{KeyCode, KeyEvent, Modifiers};
use crate::resolver::{offset_for_backspace, offset_for_forward_delete};
use crate::traits::TextOps;
use crate::types::{Error, Range};

/// Resolves one press of Backspace or Delete into the range the host must
/// remove from its buffer.
///
/// `cursor` is the caret offset in code units; `selection`, when present
/// and nonempty, wins over everything else. Returns `Ok(None)` when the
/// event is not handled or there is nothing to delete, and
/// `Err(Error::OutOfRange)` when `cursor` lies outside the buffer. The
/// host applies the returned edit; this function never mutates anything.
pub fn handle_delete_key<T: TextOps + ?Sized>(
    text: &T,
    cursor: usize,
    selection: Option<Range>,
    event: KeyEvent,
) -> Result<Option<Range>, Error> {
    let len = text.len_units();
    if cursor > len {
        return Err(Error::OutOfRange { offset: cursor, len });
    }

    let mods = event.mods;
    let handled = Modifiers::ALT | Modifiers::SHIFT | Modifiers::CTRL;
    if mods.intersects(!handled) {
        return Ok(None);
    }

    if let Some(sel) = selection {
        let sel = sel.normalized();
        if !sel.is_empty() {
            return Ok(Some(sel));
        }
    }

    let forward = event.code == KeyCode::Delete;

    if mods.contains(Modifiers::CTRL) {
        // Ctrl combined with Alt or Shift is reserved for the host.
        if mods.intersects(Modifiers::ALT | Modifiers::SHIFT) {
            return Ok(None);
        }
        let range = if forward {
            Range::new(cursor, text.next_word_boundary(cursor))
        } else {
            Range::new(text.prev_word_boundary(cursor), cursor)
        };
        return Ok((!range.is_empty()).then_some(range));
    }

    if mods.contains(Modifiers::ALT)
        && let Some(line) = text.line_range(cursor)
        && !line.is_empty()
    {
        return Ok(Some(line.normalized()));
    }

    let range = if forward {
        Range::new(cursor, offset_for_forward_delete(text, cursor)?)
    } else {
        Range::new(offset_for_backspace(text, cursor)?, cursor)
    };
    Ok((!range.is_empty()).then_some(range))
}
