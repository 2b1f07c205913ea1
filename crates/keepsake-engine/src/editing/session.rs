use crate::editing::commands::{self, StyleKind};
use crate::editing::history::{DEFAULT_UNDO_DEPTH, EditSnapshot, History};
use crate::editing::{Cmd, Document, EditError, EditorCommand, Patch, Pos, Selection};
use crate::markdown;

/// Whether the session's document has diverged from the last committed
/// (persisted) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Clean,
    Dirty,
}

/// The mutable editing context for one field instance: one document, one
/// undo stack, and the current selection.
///
/// A session is created when a field enters edit mode and discarded (or
/// committed) when edit mode exits. Each editable field owns exactly one
/// session; sessions never share state, so a quiz answer's undo history can
/// never bleed into the letter body's.
///
/// Any mutating operation moves the session [`SessionState::Dirty`];
/// [`EditorSession::commit`] serializes back to markdown and moves it
/// [`SessionState::Clean`]. Persistence failures are the storage
/// collaborator's concern, not the session's.
#[derive(Debug, Clone)]
pub struct EditorSession {
    doc: Document,
    history: History,
    selection: Selection,
    state: SessionState,
    version: u64,
}

impl EditorSession {
    /// Opens a session on a document, with the caret at the end of the text.
    pub fn new(doc: Document) -> Self {
        let last_line = doc.lines().len() - 1;
        let end = Pos::new(last_line, doc.lines()[last_line].char_len());
        Self {
            doc,
            history: History::new(DEFAULT_UNDO_DEPTH),
            selection: Selection::caret(end),
            state: SessionState::Clean,
            version: 0,
        }
    }

    /// Opens a session on a persisted markdown string.
    pub fn from_markdown(text: &str) -> Self {
        Self::new(markdown::decode(text))
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Updates the selection as reported by the editing-surface host.
    pub fn set_selection(&mut self, selection: Selection) -> Result<(), EditError> {
        commands::check_pos(&self.doc, selection.start)?;
        commands::check_pos(&self.doc, selection.end)?;
        self.selection = selection;
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == SessionState::Dirty
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of undo steps currently available.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Applies a command. The pre-edit document is pushed onto the undo stack
    /// only once the command has validated, so a failed command leaves the
    /// session untouched.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        let before = EditSnapshot {
            doc: self.doc.clone(),
            selection: self.selection,
        };

        let (changed_lines, new_selection) = match &cmd {
            Cmd::ToggleBold { range } => {
                commands::apply_toggle(&mut self.doc, *range, StyleKind::Bold)?;
                let ordered = range.ordered();
                (ordered.start.line..ordered.end.line + 1, *range)
            }
            Cmd::ToggleItalic { range } => {
                commands::apply_toggle(&mut self.doc, *range, StyleKind::Italic)?;
                let ordered = range.ordered();
                (ordered.start.line..ordered.end.line + 1, *range)
            }
            Cmd::InsertText { at, text } => {
                let caret = commands::apply_insert(&mut self.doc, *at, text)?;
                (at.line..caret.line + 1, Selection::caret(caret))
            }
        };

        self.history.record(before);
        self.selection = new_selection;
        self.state = SessionState::Dirty;
        self.version += 1;

        Ok(Patch {
            changed_lines,
            new_selection,
            version: self.version,
        })
    }

    /// Restores the most recent snapshot. A no-op returning `None` when the
    /// history is empty; never an error.
    pub fn undo(&mut self) -> Option<Patch> {
        let snapshot = self.history.pop()?;
        self.doc = snapshot.doc;
        self.selection = snapshot.selection;
        self.state = SessionState::Dirty;
        self.version += 1;

        Some(Patch {
            changed_lines: 0..self.doc.lines().len(),
            new_selection: self.selection,
            version: self.version,
        })
    }

    /// Dispatches a named host command against the current selection.
    /// Returns `Ok(None)` for an undo with nothing to undo.
    pub fn run(&mut self, command: EditorCommand) -> Result<Option<Patch>, EditError> {
        match command {
            EditorCommand::ToggleBold => self
                .apply(Cmd::ToggleBold {
                    range: self.selection,
                })
                .map(Some),
            EditorCommand::ToggleItalic => self
                .apply(Cmd::ToggleItalic {
                    range: self.selection,
                })
                .map(Some),
            EditorCommand::Undo => Ok(self.undo()),
        }
    }

    /// Serializes the document back to its persisted markdown form and marks
    /// the session clean. The caller hands the string to the persistence
    /// collaborator.
    pub fn commit(&mut self) -> String {
        self.state = SessionState::Clean;
        markdown::encode(&self.doc)
    }
}
