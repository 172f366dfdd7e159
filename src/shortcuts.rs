//! Keyboard shortcuts of the roulette page.

/// What a key press asks the page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Spin,
    FocusEditor,
}

/// The parts of a `KeyboardEvent` the shortcuts depend on.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub code: &'a str,
    pub ctrl: bool,
    pub meta: bool,
    /// Focus is inside the item editor.
    pub in_editor: bool,
}

impl Shortcut {
    /// `Space` or `Ctrl/Cmd+Enter` spins, `/` jumps to the editor.
    ///
    /// Plain `Space` and `/` are text while typing in the editor, so only the
    /// modified `Enter` works from there.
    pub fn classify(press: &KeyPress<'_>) -> Option<Self> {
        if press.key == "Enter" && (press.ctrl || press.meta) {
            return Some(Shortcut::Spin);
        }
        if press.in_editor {
            return None;
        }
        match (press.code, press.key) {
            ("Space", _) => Some(Shortcut::Spin),
            (_, "/") => Some(Shortcut::FocusEditor),
            _ => None,
        }
    }
}
