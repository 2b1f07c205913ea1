use thiserror::Error;

use crate::editing::{Document, Line, Pos, Run, Selection};

/// Commands that can be applied to a session's document.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    ToggleBold { range: Selection },
    ToggleItalic { range: Selection },
    InsertText { at: Pos, text: String },
}

/// The three logical commands a host maps its keyboard shortcuts onto.
///
/// The core exposes them by name so hosts can bind any key combination
/// without the engine knowing about keyboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    ToggleBold,
    ToggleItalic,
    Undo,
}

impl EditorCommand {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "toggle-bold" => Some(Self::ToggleBold),
            "toggle-italic" => Some(Self::ToggleItalic),
            "undo" => Some(Self::Undo),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ToggleBold => "toggle-bold",
            Self::ToggleItalic => "toggle-italic",
            Self::Undo => "undo",
        }
    }
}

/// Precondition violations. An out-of-bounds position means the caller's view
/// of the document has drifted from the session's; the engine refuses to
/// guess rather than silently clamping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("line {line} out of bounds ({line_count} lines)")]
    LineOutOfBounds { line: usize, line_count: usize },
    #[error("offset {offset} past end of line {line} ({char_len} chars)")]
    OffsetOutOfBounds {
        line: usize,
        offset: usize,
        char_len: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StyleKind {
    Bold,
    Italic,
}

pub(crate) fn check_pos(doc: &Document, pos: Pos) -> Result<(), EditError> {
    let line_count = doc.lines().len();
    if pos.line >= line_count {
        return Err(EditError::LineOutOfBounds {
            line: pos.line,
            line_count,
        });
    }
    let char_len = doc.lines()[pos.line].char_len();
    if pos.offset > char_len {
        return Err(EditError::OffsetOutOfBounds {
            line: pos.line,
            offset: pos.offset,
            char_len,
        });
    }
    Ok(())
}

/// Flips `style` on every run overlapping `range`, splitting runs at the
/// range boundaries and re-merging afterwards. Turning a style on clears the
/// opposing flag (the model has no combined styling).
pub(crate) fn apply_toggle(
    doc: &mut Document,
    range: Selection,
    style: StyleKind,
) -> Result<(), EditError> {
    let range = range.ordered();
    check_pos(doc, range.start)?;
    check_pos(doc, range.end)?;

    for index in range.start.line..=range.end.line {
        let line = &mut doc.lines_mut()[index];
        let seg_start = if index == range.start.line {
            range.start.offset
        } else {
            0
        };
        let seg_end = if index == range.end.line {
            range.end.offset
        } else {
            line.char_len()
        };
        if seg_start < seg_end {
            toggle_span(line, seg_start, seg_end, style);
        }
    }
    Ok(())
}

fn toggle_span(line: &mut Line, start: usize, end: usize, style: StyleKind) {
    let mut out: Vec<Run> = Vec::with_capacity(line.runs().len() + 2);
    let mut cursor = 0usize;
    for run in line.runs() {
        let run_len = run.char_len();
        let run_start = cursor;
        let run_end = cursor + run_len;
        cursor = run_end;

        if run_len == 0 || run_end <= start || run_start >= end {
            out.push(run.clone());
            continue;
        }

        let from = start.saturating_sub(run_start);
        let to = (end - run_start).min(run_len);
        let split_a = byte_of_char(&run.text, from);
        let split_b = byte_of_char(&run.text, to);

        if split_a > 0 {
            out.push(Run {
                text: run.text[..split_a].to_string(),
                ..run.clone()
            });
        }
        let mut toggled = Run {
            text: run.text[split_a..split_b].to_string(),
            ..run.clone()
        };
        match style {
            StyleKind::Bold => {
                toggled.bold = !toggled.bold;
                if toggled.bold {
                    toggled.italic = false;
                }
            }
            StyleKind::Italic => {
                toggled.italic = !toggled.italic;
                if toggled.italic {
                    toggled.bold = false;
                }
            }
        }
        out.push(toggled);
        if split_b < run.text.len() {
            out.push(Run {
                text: run.text[split_b..].to_string(),
                ..run.clone()
            });
        }
    }
    *line = Line::from_runs(out);
}

/// Inserts literal text at `at`, splitting the containing run; newlines in
/// `text` split the line. Inserted text inherits the style at the insertion
/// point. Returns the caret position after the inserted text.
pub(crate) fn apply_insert(doc: &mut Document, at: Pos, text: &str) -> Result<Pos, EditError> {
    check_pos(doc, at)?;

    let (left, right, (bold, italic)) = split_line(&doc.lines()[at.line], at.offset);
    let make_run = |seg: &str| Run {
        text: seg.to_string(),
        bold,
        italic,
    };

    let segments: Vec<&str> = text.split('\n').collect();
    if segments.len() == 1 {
        let mut runs = left;
        runs.push(make_run(segments[0]));
        runs.extend(right);
        doc.lines_mut()[at.line] = Line::from_runs(runs);
        return Ok(Pos::new(at.line, at.offset + segments[0].chars().count()));
    }

    let mut new_lines = Vec::with_capacity(segments.len());
    let mut first_runs = left;
    first_runs.push(make_run(segments[0]));
    new_lines.push(Line::from_runs(first_runs));
    for seg in &segments[1..segments.len() - 1] {
        new_lines.push(Line::from_runs(vec![make_run(seg)]));
    }
    let last_seg = segments[segments.len() - 1];
    let caret = Pos::new(at.line + segments.len() - 1, last_seg.chars().count());
    let mut last_runs = vec![make_run(last_seg)];
    last_runs.extend(right);
    new_lines.push(Line::from_runs(last_runs));

    doc.lines_mut().splice(at.line..=at.line, new_lines);
    Ok(caret)
}

/// Splits a line's runs at a character offset, reporting the style at the
/// split point (the run the caret sits in, or the one ending there, so typed
/// text continues the preceding styling).
fn split_line(line: &Line, offset: usize) -> (Vec<Run>, Vec<Run>, (bool, bool)) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut style: Option<(bool, bool)> = None;
    let mut cursor = 0usize;

    for run in line.runs() {
        let run_end = cursor + run.char_len();
        if run_end <= offset {
            if run_end == offset {
                style = Some((run.bold, run.italic));
            }
            left.push(run.clone());
        } else if cursor >= offset {
            if style.is_none() {
                style = Some((run.bold, run.italic));
            }
            right.push(run.clone());
        } else {
            let split = byte_of_char(&run.text, offset - cursor);
            left.push(Run {
                text: run.text[..split].to_string(),
                ..run.clone()
            });
            right.push(Run {
                text: run.text[split..].to_string(),
                ..run.clone()
            });
            style = Some((run.bold, run.italic));
        }
        cursor = run_end;
    }

    (left, right, style.unwrap_or((false, false)))
}

/// Byte index of the `n`th character (or the string's end).
fn byte_of_char(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&[Run]]) -> Document {
        Document::from_lines(lines.iter().map(|runs| Line::from_runs(runs.to_vec())).collect())
    }

    fn sel(start: (usize, usize), end: (usize, usize)) -> Selection {
        Selection::new(Pos::new(start.0, start.1), Pos::new(end.0, end.1))
    }

    #[test]
    fn toggle_bold_splits_run_at_boundaries() {
        let mut d = doc(&[&[Run::plain("Happy Birthday!")]]);
        apply_toggle(&mut d, sel((0, 6), (0, 14)), StyleKind::Bold).unwrap();
        assert_eq!(
            d.lines()[0].runs(),
            &[
                Run::plain("Happy "),
                Run::bold("Birthday"),
                Run::plain("!"),
            ],
        );
    }

    #[test]
    fn toggle_bold_twice_restores_plain_text() {
        let mut d = doc(&[&[Run::plain("Happy Birthday!")]]);
        let range = sel((0, 6), (0, 14));
        apply_toggle(&mut d, range, StyleKind::Bold).unwrap();
        apply_toggle(&mut d, range, StyleKind::Bold).unwrap();
        assert_eq!(d.lines()[0].runs(), &[Run::plain("Happy Birthday!")]);
    }

    #[test]
    fn toggle_accepts_reversed_range() {
        let mut d = doc(&[&[Run::plain("abc")]]);
        apply_toggle(&mut d, sel((0, 3), (0, 0)), StyleKind::Italic).unwrap();
        assert_eq!(d.lines()[0].runs(), &[Run::italic("abc")]);
    }

    #[test]
    fn toggle_spans_multiple_lines() {
        let mut d = doc(&[&[Run::plain("first")], &[Run::plain("second")]]);
        apply_toggle(&mut d, sel((0, 2), (1, 3)), StyleKind::Bold).unwrap();
        assert_eq!(
            d.lines()[0].runs(),
            &[Run::plain("fi"), Run::bold("rst")],
        );
        assert_eq!(
            d.lines()[1].runs(),
            &[Run::bold("sec"), Run::plain("ond")],
        );
    }

    #[test]
    fn toggle_skips_blank_line_inside_range() {
        let mut d = doc(&[&[Run::plain("a")], &[], &[Run::plain("b")]]);
        apply_toggle(&mut d, sel((0, 0), (2, 1)), StyleKind::Bold).unwrap();
        assert_eq!(d.lines()[0].runs(), &[Run::bold("a")]);
        assert!(d.lines()[1].is_empty());
        assert_eq!(d.lines()[2].runs(), &[Run::bold("b")]);
    }

    #[test]
    fn toggling_bold_on_clears_italic() {
        let mut d = doc(&[&[Run::italic("soon")]]);
        apply_toggle(&mut d, sel((0, 0), (0, 4)), StyleKind::Bold).unwrap();
        assert_eq!(d.lines()[0].runs(), &[Run::bold("soon")]);
    }

    #[test]
    fn toggle_merges_with_adjacent_same_style_runs() {
        let mut d = doc(&[&[Run::bold("Happy "), Run::plain("Birthday")]]);
        apply_toggle(&mut d, sel((0, 6), (0, 14)), StyleKind::Bold).unwrap();
        assert_eq!(d.lines()[0].runs(), &[Run::bold("Happy Birthday")]);
    }

    #[test]
    fn toggle_rejects_out_of_bounds_line() {
        let mut d = doc(&[&[Run::plain("a")]]);
        let err = apply_toggle(&mut d, sel((0, 0), (3, 0)), StyleKind::Bold).unwrap_err();
        assert_eq!(
            err,
            EditError::LineOutOfBounds {
                line: 3,
                line_count: 1
            },
        );
    }

    #[test]
    fn toggle_rejects_out_of_bounds_offset() {
        let mut d = doc(&[&[Run::plain("ab")]]);
        let err = apply_toggle(&mut d, sel((0, 0), (0, 7)), StyleKind::Bold).unwrap_err();
        assert_eq!(
            err,
            EditError::OffsetOutOfBounds {
                line: 0,
                offset: 7,
                char_len: 2
            },
        );
    }

    #[test]
    fn toggle_offsets_are_characters_not_bytes() {
        let mut d = doc(&[&[Run::plain("héllo")]]);
        apply_toggle(&mut d, sel((0, 1), (0, 2)), StyleKind::Bold).unwrap();
        assert_eq!(
            d.lines()[0].runs(),
            &[Run::plain("h"), Run::bold("é"), Run::plain("llo")],
        );
    }

    #[test]
    fn insert_splits_containing_run() {
        let mut d = doc(&[&[Run::plain("Hello world")]]);
        let caret = apply_insert(&mut d, Pos::new(0, 5), " there").unwrap();
        assert_eq!(d.lines()[0].runs(), &[Run::plain("Hello there world")]);
        assert_eq!(caret, Pos::new(0, 11));
    }

    #[test]
    fn insert_inherits_style_of_containing_run() {
        let mut d = doc(&[&[Run::plain("be "), Run::bold("bold")]]);
        apply_insert(&mut d, Pos::new(0, 5), "XX").unwrap();
        assert_eq!(
            d.lines()[0].runs(),
            &[Run::plain("be "), Run::bold("boXXld")],
        );
    }

    #[test]
    fn insert_at_run_boundary_continues_preceding_style() {
        let mut d = doc(&[&[Run::bold("bold"), Run::plain(" tail")]]);
        apply_insert(&mut d, Pos::new(0, 4), "er").unwrap();
        assert_eq!(
            d.lines()[0].runs(),
            &[Run::bold("bolder"), Run::plain(" tail")],
        );
    }

    #[test]
    fn insert_with_newline_splits_line() {
        let mut d = doc(&[&[Run::plain("ab"), Run::bold("cd")]]);
        let caret = apply_insert(&mut d, Pos::new(0, 2), "X\nY").unwrap();
        assert_eq!(d.lines().len(), 2);
        assert_eq!(d.lines()[0].runs(), &[Run::plain("abX")]);
        assert_eq!(d.lines()[1].runs(), &[Run::plain("Y"), Run::bold("cd")]);
        assert_eq!(caret, Pos::new(1, 1));
    }

    #[test]
    fn insert_blank_interior_line() {
        let mut d = doc(&[&[Run::plain("ab")]]);
        apply_insert(&mut d, Pos::new(0, 1), "\n\n").unwrap();
        assert_eq!(d.lines().len(), 3);
        assert_eq!(d.lines()[0].runs(), &[Run::plain("a")]);
        assert!(d.lines()[1].is_empty());
        assert_eq!(d.lines()[2].runs(), &[Run::plain("b")]);
    }

    #[test]
    fn insert_into_empty_document() {
        let mut d = Document::new();
        let caret = apply_insert(&mut d, Pos::new(0, 0), "hi").unwrap();
        assert_eq!(d.lines()[0].runs(), &[Run::plain("hi")]);
        assert_eq!(caret, Pos::new(0, 2));
    }

    #[test]
    fn insert_rejects_out_of_bounds_position() {
        let mut d = Document::new();
        assert!(apply_insert(&mut d, Pos::new(1, 0), "x").is_err());
        assert!(apply_insert(&mut d, Pos::new(0, 1), "x").is_err());
    }

    #[test]
    fn editor_command_names_round_trip() {
        for cmd in [
            EditorCommand::ToggleBold,
            EditorCommand::ToggleItalic,
            EditorCommand::Undo,
        ] {
            assert_eq!(EditorCommand::from_name(cmd.name()), Some(cmd));
        }
        assert_eq!(EditorCommand::from_name("toggle-underline"), None);
    }
}
