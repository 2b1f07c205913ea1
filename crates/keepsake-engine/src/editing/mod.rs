/*!
 * # Editing core
 *
 * One rich-text editing model shared by every editable card field (letter
 * body, slide captions, quiz questions and answers, gift titles and
 * messages). The previous generation of the app duplicated this logic per
 * page with imperative handles into each page's editing surface; here each
 * field owns an explicit [`EditorSession`] value instead.
 *
 * ## Architecture
 *
 * - **[`Document`]** is the single in-memory form: lines of styled runs,
 *   pure data, normalized so adjacent same-style runs are always merged.
 * - **Commands** ([`Cmd`]) are the only way a document changes. A session
 *   validates a command, snapshots the pre-edit state for undo, applies the
 *   mutation, and returns a [`Patch`] describing what moved.
 * - **Undo** is a bounded linear stack of [`EditSnapshot`]s per session.
 *   Sessions are fully isolated; there is no cross-field undo.
 * - **Serialization** lives outside this module: [`crate::markdown`] is the
 *   persisted form, [`crate::surface`] the live editing form, and
 *   [`crate::render`] the escaped read-only display form.
 *
 * All operations here are synchronous and single-threaded; a session is
 * exclusively owned by the UI control that created it, so there is nothing
 * to lock. Talking to the (possibly asynchronous) document store happens
 * only at the commit/load boundary, with plain strings.
 */

pub mod commands;
pub mod document;
pub mod history;
pub mod patch;
pub mod session;

// Public API re-exports
pub use commands::{Cmd, EditError, EditorCommand};
pub use document::{Document, Line, Run};
pub use history::{EditSnapshot, History};
pub use patch::Patch;
pub use session::{EditorSession, SessionState};

use serde::{Deserialize, Serialize};

/// A caret position as (line index, character offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub line: usize,
    pub offset: usize,
}

impl Pos {
    pub fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }
}

/// A selection between two caret positions. `start` and `end` follow the
/// host's anchor/focus order, so `start` may come after `end` in the
/// document; operations call [`Selection::ordered`] before using the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: Pos,
    pub end: Pos,
}

impl Selection {
    pub fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    /// A collapsed selection (just a caret).
    pub fn caret(pos: Pos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// The same selection with `start` ≤ `end`.
    pub fn ordered(self) -> Self {
        if self.start > self.end {
            Self {
                start: self.end,
                end: self.start,
            }
        } else {
            self
        }
    }
}
