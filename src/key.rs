/// Key codes for the two deletion keys.
///
/// This enum provides a platform-agnostic representation of the keys.
/// Hosts should map their platform-specific key events to these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// The Backspace key: deletes backward from the cursor.
    Backspace,
    /// The Delete key: deletes forward from the cursor.
    Delete,
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// A key press event with optional modifiers.
///
/// This represents a single press of a deletion key, including any
/// modifier keys held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

impl KeyEvent {
    /// A plain (unmodified) press of `code`.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: Modifiers::empty(),
        }
    }
}
