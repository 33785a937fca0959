use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// Append a character to the focused field.
    Insert(char),
    /// Line break; only the body field accepts one.
    Newline,
    Backspace,
    NextField,
    PrevField,
}

impl Intent for FormIntent {}
