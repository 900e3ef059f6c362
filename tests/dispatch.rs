use rubout::{KeyCode, KeyEvent, Modifiers, Range, handle_delete_key};
use rubout::types::Error;

mod support;
use support::mock_buffer::MockBuffer;

fn u16s(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

fn backspace(mods: Modifiers) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Backspace,
        mods,
    }
}

fn forward(mods: Modifiers) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Delete,
        mods,
    }
}

#[test]
fn plain_backspace_deletes_one_unit() {
    let buf = u16s("abc");
    let got = handle_delete_key(&buf[..], 2, None, KeyEvent::plain(KeyCode::Backspace)).unwrap();
    assert_eq!(got, Some(Range::new(1, 2)));
}

#[test]
fn plain_backspace_at_start_does_nothing() {
    let buf = u16s("abc");
    let got = handle_delete_key(&buf[..], 0, None, KeyEvent::plain(KeyCode::Backspace)).unwrap();
    assert_eq!(got, None);
}

#[test]
fn forward_delete_at_end_does_nothing() {
    let buf = u16s("abc");
    let got = handle_delete_key(&buf[..], 3, None, KeyEvent::plain(KeyCode::Delete)).unwrap();
    assert_eq!(got, None);
}

#[test]
fn plain_backspace_takes_whole_emoji_cluster() {
    let buf = u16s("a\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}");
    let got = handle_delete_key(&buf[..], 9, None, KeyEvent::plain(KeyCode::Backspace)).unwrap();
    assert_eq!(got, Some(Range::new(1, 9)));
}

#[test]
fn unknown_modifier_is_not_handled() {
    let buf = u16s("abc");
    let got = handle_delete_key(&buf[..], 2, None, backspace(Modifiers::META)).unwrap();
    assert_eq!(got, None);

    let got = handle_delete_key(
        &buf[..],
        2,
        None,
        backspace(Modifiers::META | Modifiers::CTRL),
    )
    .unwrap();
    assert_eq!(got, None);
}

#[test]
fn selection_wins_over_everything_else() {
    let buf = u16s("abcdef");
    let sel = Some(Range::new(4, 1)); // reversed on purpose
    let got = handle_delete_key(&buf[..], 4, sel, backspace(Modifiers::CTRL)).unwrap();
    assert_eq!(got, Some(Range::new(1, 4)));
}

#[test]
fn empty_selection_is_ignored() {
    let buf = u16s("abc");
    let sel = Some(Range::new(2, 2));
    let got = handle_delete_key(&buf[..], 2, sel, KeyEvent::plain(KeyCode::Backspace)).unwrap();
    assert_eq!(got, Some(Range::new(1, 2)));
}

#[test]
fn ctrl_backspace_deletes_to_previous_word_start() {
    let buf = u16s("hello world");
    let got = handle_delete_key(&buf[..], 11, None, backspace(Modifiers::CTRL)).unwrap();
    assert_eq!(got, Some(Range::new(6, 11)));

    let got = handle_delete_key(&buf[..], 5, None, backspace(Modifiers::CTRL)).unwrap();
    assert_eq!(got, Some(Range::new(0, 5)));
}

#[test]
fn ctrl_delete_deletes_to_next_word_end() {
    let buf = u16s("hello world");
    let got = handle_delete_key(&buf[..], 5, None, forward(Modifiers::CTRL)).unwrap();
    assert_eq!(got, Some(Range::new(5, 11)));
}

#[test]
fn ctrl_backspace_at_start_does_nothing() {
    let buf = u16s("hello");
    let got = handle_delete_key(&buf[..], 0, None, backspace(Modifiers::CTRL)).unwrap();
    assert_eq!(got, None);
}

#[test]
fn ctrl_with_alt_or_shift_is_not_handled() {
    let buf = u16s("hello world");
    for extra in [Modifiers::ALT, Modifiers::SHIFT, Modifiers::ALT | Modifiers::SHIFT] {
        let got = handle_delete_key(&buf[..], 11, None, backspace(Modifiers::CTRL | extra)).unwrap();
        assert_eq!(got, None);
    }
}

#[test]
fn alt_backspace_deletes_the_line() {
    let buf = MockBuffer::new("one\ntwo\nthree");
    let got = handle_delete_key(&buf, 5, None, backspace(Modifiers::ALT)).unwrap();
    assert_eq!(got, Some(Range::new(4, 8)));
}

#[test]
fn alt_falls_through_when_line_delete_is_inapplicable() {
    // Plain slices report no line range, so Alt degrades to the grapheme
    // resolution path.
    let buf = u16s("ab");
    let got = handle_delete_key(&buf[..], 2, None, backspace(Modifiers::ALT)).unwrap();
    assert_eq!(got, Some(Range::new(1, 2)));
}

#[test]
fn shift_backspace_behaves_like_plain() {
    let buf = u16s("abc");
    let got = handle_delete_key(&buf[..], 2, None, backspace(Modifiers::SHIFT)).unwrap();
    assert_eq!(got, Some(Range::new(1, 2)));
}

#[test]
fn cursor_out_of_range_is_rejected() {
    let buf = u16s("ab");
    assert_eq!(
        handle_delete_key(&buf[..], 9, None, KeyEvent::plain(KeyCode::Backspace)),
        Err(Error::OutOfRange { offset: 9, len: 2 })
    );
}
