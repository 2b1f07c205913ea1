use serde::{Deserialize, Serialize};

/// A maximal span of text sharing one set of style flags.
///
/// Invariants (maintained by [`Line::from_runs`] and [`Document::normalize`]):
/// - adjacent runs within a line never share identical style flags (they are
///   merged into one run)
/// - a run's text is never empty unless it is the sole run of an empty line
/// - bold and italic are mutually exclusive; the persisted format has no
///   representation for combined styling, so every operation that turns one
///   flag on clears the other
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }

    /// Length in characters (positions are character offsets, not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn same_style(&self, other: &Run) -> bool {
        self.bold == other.bold && self.italic == other.italic
    }
}

/// One row of a multi-line field, an ordered sequence of [`Run`]s.
///
/// An empty line is represented as a line with a single empty run, so that a
/// blank row is distinguishable from the absence of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    runs: Vec<Run>,
}

impl Line {
    /// A blank line: one empty plain run.
    pub fn empty() -> Self {
        Self {
            runs: vec![Run::plain("")],
        }
    }

    /// Builds a line from runs, restoring the model invariants: empty runs are
    /// dropped, adjacent same-style runs are merged, and a line left with no
    /// runs becomes a blank line.
    pub fn from_runs(runs: Vec<Run>) -> Self {
        let mut line = Self { runs };
        line.normalize();
        line
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// True for a blank line (a single empty run).
    pub fn is_empty(&self) -> bool {
        self.runs.len() == 1 && self.runs[0].is_empty()
    }

    /// Total length of the line in characters.
    pub fn char_len(&self) -> usize {
        self.runs.iter().map(Run::char_len).sum()
    }

    /// The line's text with styling dropped.
    pub fn to_plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub(crate) fn normalize(&mut self) {
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.same_style(&run) => last.text.push_str(&run.text),
                _ => merged.push(run),
            }
        }
        if merged.is_empty() {
            merged.push(Run::plain(""));
        }
        self.runs = merged;
    }
}

/// The full styled-text value of one editable field: an ordered sequence of
/// [`Line`]s, never empty.
///
/// `Document` is pure data. All mutation flows through the command engine in
/// [`crate::editing::commands`]; the codecs in [`crate::markdown`] and
/// [`crate::surface`] convert it to and from its two serialized forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// A document holding a single blank line.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::empty()],
        }
    }

    /// Builds a document from lines, normalizing each and guaranteeing at
    /// least one line.
    pub fn from_lines(lines: Vec<Line>) -> Self {
        let mut doc = Self { lines };
        doc.normalize();
        doc
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<Line> {
        &mut self.lines
    }

    /// True iff every line is blank.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(Line::is_empty)
    }

    /// Restores the model invariants after bulk construction or mutation.
    pub fn normalize(&mut self) {
        for line in &mut self.lines {
            line.normalize();
        }
        if self.lines.is_empty() {
            self.lines.push(Line::empty());
        }
    }

    /// The document's text with styling dropped, lines joined with `\n`.
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(Line::to_plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_is_single_empty_run() {
        let line = Line::empty();
        assert!(line.is_empty());
        assert_eq!(line.runs().len(), 1);
        assert_eq!(line.char_len(), 0);
    }

    #[test]
    fn from_runs_merges_adjacent_same_style() {
        let line = Line::from_runs(vec![
            Run::plain("Hello "),
            Run::plain("world"),
            Run::bold("!"),
        ]);
        assert_eq!(
            line.runs(),
            &[Run::plain("Hello world"), Run::bold("!")],
        );
    }

    #[test]
    fn from_runs_drops_empty_runs() {
        let line = Line::from_runs(vec![Run::plain(""), Run::bold("x"), Run::italic("")]);
        assert_eq!(line.runs(), &[Run::bold("x")]);
    }

    #[test]
    fn from_runs_merges_across_dropped_empty_run() {
        // the empty italic run between the two plain runs must not keep them apart
        let line = Line::from_runs(vec![Run::plain("a"), Run::italic(""), Run::plain("b")]);
        assert_eq!(line.runs(), &[Run::plain("ab")]);
    }

    #[test]
    fn from_runs_of_nothing_is_blank_line() {
        let line = Line::from_runs(vec![]);
        assert!(line.is_empty());
    }

    #[test]
    fn document_always_has_a_line() {
        let doc = Document::from_lines(vec![]);
        assert_eq!(doc.lines().len(), 1);
        assert!(doc.is_empty());
        assert_eq!(doc, Document::new());
    }

    #[test]
    fn blank_lines_are_preserved_not_collapsed() {
        let doc = Document::from_lines(vec![
            Line::from_runs(vec![Run::plain("one")]),
            Line::empty(),
            Line::from_runs(vec![Run::plain("three")]),
        ]);
        assert_eq!(doc.lines().len(), 3);
        assert!(doc.lines()[1].is_empty());
        assert!(!doc.is_empty());
    }

    #[test]
    fn char_len_counts_characters_not_bytes() {
        let line = Line::from_runs(vec![Run::plain("héllo"), Run::bold("💛")]);
        assert_eq!(line.char_len(), 6);
    }

    #[test]
    fn plain_text_joins_lines_with_newline() {
        let doc = Document::from_lines(vec![
            Line::from_runs(vec![Run::plain("Happy "), Run::bold("Birthday")]),
            Line::empty(),
            Line::from_runs(vec![Run::italic("love")]),
        ]);
        assert_eq!(doc.to_plain_text(), "Happy Birthday\n\nlove");
    }
}
