//! Memento.
//!
//! The editor exposes snapshots as opaque tokens; only the editor can
//! look inside one. A history stack restores them in LIFO order.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Cannot undo: No previous states")]
    NoPreviousState,
}

/// Opaque snapshot. The captured text is private; callers can only hand
/// it back to an editor.
pub struct EditorMemento {
    content: String,
}

#[derive(Default)]
pub struct TextEditor {
    content: String,
}

impl TextEditor {
    pub fn new() -> Self {
        TextEditor::default()
    }

    pub fn type_text(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn save(&self) -> EditorMemento {
        EditorMemento {
            content: self.content.clone(),
        }
    }

    pub fn restore(&mut self, memento: &EditorMemento) {
        self.content = memento.content.clone();
    }
}

/// Caretaker. Stores snapshots without inspecting them.
#[derive(Default)]
pub struct History {
    snapshots: Vec<EditorMemento>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    pub fn push(&mut self, memento: EditorMemento) {
        self.snapshots.push(memento);
    }

    pub fn pop(&mut self) -> Result<EditorMemento, HistoryError> {
        self.snapshots.pop().ok_or(HistoryError::NoPreviousState)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_rewinds_to_the_saved_state() {
        let mut editor = TextEditor::new();
        let mut history = History::new();

        editor.type_text("Hello");
        history.push(editor.save());
        editor.type_text(", world");
        assert_eq!(editor.content(), "Hello, world");

        let snapshot = history.pop().unwrap();
        editor.restore(&snapshot);
        assert_eq!(editor.content(), "Hello");
    }

    #[test]
    fn undo_is_last_in_first_out() {
        let mut editor = TextEditor::new();
        let mut history = History::new();

        for text in ["a", "b", "c"] {
            editor.type_text(text);
            history.push(editor.save());
        }
        editor.type_text("d");

        editor.restore(&history.pop().unwrap());
        assert_eq!(editor.content(), "abc");
        editor.restore(&history.pop().unwrap());
        assert_eq!(editor.content(), "ab");
    }

    #[test]
    fn undo_past_the_beginning_is_diagnosed() {
        let mut history = History::new();
        assert_eq!(history.pop().err(), Some(HistoryError::NoPreviousState));
    }

    #[test]
    fn snapshots_are_unaffected_by_later_edits() {
        let mut editor = TextEditor::new();
        editor.type_text("stable");
        let snapshot = editor.save();
        editor.type_text(" changed");
        editor.restore(&snapshot);
        assert_eq!(editor.content(), "stable");
    }
}
