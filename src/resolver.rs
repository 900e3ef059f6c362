//! Deletion-unit resolution.
//!
//! A single press of Backspace must remove one *unit* of text: usually one
//! code point, but a whole cluster for emoji sequences (skin tones, flags,
//! keycaps, ZWJ chains) and for CRLF. The backward resolver walks code
//! points preceding the cursor through a small state machine and returns
//! the offset where the unit begins; the forward resolver steps one
//! grapheme cluster ahead. Both are pure and hold no state across calls.

use crate::classify::{
    CARRIAGE_RETURN, COMBINING_ENCLOSING_KEYCAP, LINE_FEED, ZERO_WIDTH_JOINER,
    has_nonzero_combining_class, is_emoji, is_emoji_modifier, is_emoji_modifier_base,
    is_keycap_base, is_regional_indicator, is_variation_selector,
};
use crate::traits::TextOps;
use crate::types::{Error, Range};

/// States of the backward scan. The scan runs over code points in reverse
/// order, so each state describes what has already been consumed to the
/// *right* of the current position. Variants that saw a variation selector
/// carry its code-unit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Lf,
    OddRis,
    EvenRis,
    BeforeKeycap,
    BeforeVsAndKeycap { vs_units: usize },
    BeforeEmojiModifier,
    BeforeVsAndEmojiModifier { vs_units: usize },
    BeforeVs,
    BeforeEmoji,
    BeforeZwj,
    BeforeVsAndZwj { vs_units: usize },
    Finished,
}

/// Decode the code point ending at `offset`, returning it with its width
/// in code units. An unpaired surrogate decodes as itself with width 1.
fn code_point_before<T: TextOps + ?Sized>(text: &T, offset: usize) -> (u32, usize) {
    let trail = text.unit(offset - 1);
    if (0xDC00..=0xDFFF).contains(&trail) && offset >= 2 {
        let lead = text.unit(offset - 2);
        if (0xD800..=0xDBFF).contains(&lead) {
            let cp = 0x10000 + (((lead as u32 - 0xD800) << 10) | (trail as u32 - 0xDC00));
            return (cp, 2);
        }
    }
    (trail as u32, 1)
}

/// Which edge of an atomic span to move to when an offset lands inside one.
#[derive(Debug, Clone, Copy)]
enum Snap {
    Start,
    End,
}

fn snap_out_of_span<T: TextOps + ?Sized>(text: &T, mut offset: usize, snap: Snap) -> usize {
    for span in text.atomic_spans(Range::new(offset, offset)) {
        if span.start < offset && offset < span.end {
            offset = match snap {
                Snap::Start => span.start,
                Snap::End => span.end,
            };
        }
    }
    offset
}

/// Computes the start of the range a single Backspace at `offset` removes,
/// so that deleting `[start, offset)` removes exactly one unit.
///
/// Offsets at 0 or 1 trivially resolve to 0. The result never lands inside
/// an atomic span: it is moved out to the span's start edge.
pub fn offset_for_backspace<T: TextOps + ?Sized>(text: &T, offset: usize) -> Result<usize, Error> {
    let len = text.len_units();
    if offset > len {
        return Err(Error::OutOfRange { offset, len });
    }
    if offset <= 1 {
        return Ok(0);
    }

    let mut state = State::Start;
    let mut deleted = 0;
    let mut pos = offset;
    loop {
        let (cp, width) = code_point_before(text, pos);
        pos -= width;

        state = match state {
            State::Start => {
                deleted = width;
                if cp == LINE_FEED {
                    State::Lf
                } else if is_variation_selector(cp) {
                    State::BeforeVs
                } else if is_regional_indicator(cp) {
                    State::OddRis
                } else if is_emoji_modifier(cp) {
                    State::BeforeEmojiModifier
                } else if cp == COMBINING_ENCLOSING_KEYCAP {
                    State::BeforeKeycap
                } else if is_emoji(cp) {
                    State::BeforeEmoji
                } else {
                    State::Finished
                }
            }
            State::Lf => {
                // A CR immediately before the LF joins it; anything else
                // ends the scan. Terminal either way.
                if cp == CARRIAGE_RETURN {
                    deleted += 1;
                }
                State::Finished
            }
            // Flags pair up regional indicators from the front of the run,
            // so whether the cursor sits after a whole flag or a dangling
            // indicator depends on the parity of the run behind it.
            State::OddRis => {
                if is_regional_indicator(cp) {
                    deleted += 2;
                    State::EvenRis
                } else {
                    State::Finished
                }
            }
            State::EvenRis => {
                if is_regional_indicator(cp) {
                    deleted -= 2;
                    State::OddRis
                } else {
                    State::Finished
                }
            }
            State::BeforeKeycap => {
                if is_variation_selector(cp) {
                    State::BeforeVsAndKeycap { vs_units: width }
                } else {
                    if is_keycap_base(cp) {
                        deleted += width;
                    }
                    State::Finished
                }
            }
            State::BeforeVsAndKeycap { vs_units } => {
                if is_keycap_base(cp) {
                    deleted += vs_units + width;
                }
                State::Finished
            }
            State::BeforeEmojiModifier => {
                if is_variation_selector(cp) {
                    State::BeforeVsAndEmojiModifier { vs_units: width }
                } else {
                    if is_emoji_modifier_base(cp) {
                        deleted += width;
                    }
                    State::Finished
                }
            }
            State::BeforeVsAndEmojiModifier { vs_units } => {
                if is_emoji_modifier_base(cp) {
                    deleted += vs_units + width;
                }
                State::Finished
            }
            State::BeforeVs => {
                if is_emoji(cp) {
                    deleted += width;
                    State::BeforeEmoji
                } else {
                    // A lone selector after an ordinary base character
                    // deletes with it, but not after another selector or
                    // a reordering combining mark.
                    if !is_variation_selector(cp) && !has_nonzero_combining_class(cp) {
                        deleted += width;
                    }
                    State::Finished
                }
            }
            State::BeforeEmoji => {
                if cp == ZERO_WIDTH_JOINER {
                    State::BeforeZwj
                } else {
                    State::Finished
                }
            }
            State::BeforeZwj => {
                if is_emoji(cp) {
                    deleted += width + 1;
                    if is_emoji_modifier(cp) {
                        State::BeforeEmojiModifier
                    } else {
                        State::BeforeEmoji
                    }
                } else if is_variation_selector(cp) {
                    State::BeforeVsAndZwj { vs_units: width }
                } else {
                    State::Finished
                }
            }
            State::BeforeVsAndZwj { vs_units } => {
                if is_emoji(cp) {
                    deleted += vs_units + 1 + width;
                    State::BeforeEmoji
                } else {
                    State::Finished
                }
            }
            State::Finished => unreachable!("scan continued past terminal state"),
        };

        if state == State::Finished || pos == 0 {
            break;
        }
    }

    Ok(snap_out_of_span(text, offset - deleted, Snap::Start))
}

/// Computes the end of the range a single forward Delete at `offset`
/// removes, so that deleting `[offset, end)` removes exactly one unit.
///
/// Within one unit of the buffer end there is nothing to analyze and the
/// result is the buffer length. The result never lands inside an atomic
/// span: it is moved out to the span's end edge.
pub fn offset_for_forward_delete<T: TextOps + ?Sized>(
    text: &T,
    offset: usize,
) -> Result<usize, Error> {
    let len = text.len_units();
    if offset > len {
        return Err(Error::OutOfRange { offset, len });
    }
    if offset + 1 >= len {
        return Ok(len);
    }
    let end = text.next_cluster_boundary(offset);
    Ok(snap_out_of_span(text, end, Snap::End))
}
