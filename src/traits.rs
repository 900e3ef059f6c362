use unicode_segmentation::UnicodeSegmentation;

use crate::types::Range;

/// Read access to the host's text buffer plus the boundary oracles the
/// deletion logic consults.
///
/// Offsets are UTF-16 code units throughout. Only `len_units` and `unit`
/// are required; the remaining methods have working defaults that simple
/// hosts can rely on and that hosts with their own segmentation, layout,
/// or inline-object machinery should override.
pub trait TextOps {
    /// Buffer length in code units.
    fn len_units(&self) -> usize;

    /// The code unit at `index`. Callers guarantee `index < len_units()`.
    fn unit(&self, index: usize) -> u16;

    /// Atomic inline objects (inline images and the like) intersecting
    /// `range`. Such objects are deleted or kept whole, never split.
    ///
    /// Default: the buffer carries no inline objects.
    fn atomic_spans(&self, range: Range) -> Vec<Range> {
        let _ = range;
        Vec::new()
    }

    /// The range to remove when deleting the whole line around `offset`,
    /// or `None` when line deletion is not applicable for this host.
    ///
    /// Default: `None`. Hosts with a layout engine should return the
    /// visual line; plain buffers may return the logical line.
    fn line_range(&self, offset: usize) -> Option<Range> {
        let _ = offset;
        None
    }

    /// The word boundary preceding `offset`, for Ctrl+Backspace.
    ///
    /// Default: start of the last word before `offset`, skipping any
    /// whitespace in between, per Unicode word segmentation.
    fn prev_word_boundary(&self, offset: usize) -> usize {
        let head = decode_lossy(self, 0, offset);
        let mut boundary = 0;
        let mut pos = 0;
        for segment in head.split_word_bounds() {
            if !segment.chars().all(char::is_whitespace) {
                boundary = pos;
            }
            pos += segment.encode_utf16().count();
        }
        boundary
    }

    /// The word boundary following `offset`, for Ctrl+Delete.
    ///
    /// Default: end of the first word after `offset`, including any
    /// whitespace before it.
    fn next_word_boundary(&self, offset: usize) -> usize {
        let tail = decode_lossy(self, offset, self.len_units());
        let mut pos = offset;
        for segment in tail.split_word_bounds() {
            pos += segment.encode_utf16().count();
            if !segment.chars().all(char::is_whitespace) {
                return pos;
            }
        }
        pos
    }

    /// The next grapheme cluster boundary strictly after `offset`, used by
    /// forward delete.
    ///
    /// Default: extended grapheme clusters per unicode-segmentation. Hosts
    /// backed by a text shaper should override with the shaper's cursor
    /// advance so that deletion agrees with rendering.
    fn next_cluster_boundary(&self, offset: usize) -> usize {
        let tail = decode_lossy(self, offset, self.len_units());
        match tail.graphemes(true).next() {
            Some(cluster) => offset + cluster.encode_utf16().count(),
            None => offset,
        }
    }
}

/// Plain UTF-16 slices are buffers with no spans and no layout.
impl TextOps for [u16] {
    fn len_units(&self) -> usize {
        self.len()
    }

    fn unit(&self, index: usize) -> u16 {
        self[index]
    }
}

/// Decode `[start, end)` to a `String`, mapping unpaired surrogates to
/// U+FFFD. The replacement character is one code unit wide, so offsets
/// derived from the decoded text stay aligned with the buffer.
fn decode_lossy<T: TextOps + ?Sized>(text: &T, start: usize, end: usize) -> String {
    char::decode_utf16((start..end).map(|i| text.unit(i)))
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
