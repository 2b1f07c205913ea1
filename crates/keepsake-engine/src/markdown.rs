//! The persisted form: a constrained markdown dialect with exactly two
//! markers, `**bold**` and `*italic*`.
//!
//! Decoding is a two-phase scan per line. Double-asterisk spans are located
//! first, left to right, consuming their delimiters; single-asterisk spans
//! are then located within the remaining gaps. The ordering is mandatory:
//! parsing single asterisks first would eat into double-asterisk sequences
//! (`**a*b*c**` is one bold span with literal stars inside, not italics
//! nested in bold). Spans require a non-empty payload, and unmatched or
//! unbalanced markers are kept as literal text rather than failing; a
//! persisted string can come from anywhere, so the parser absorbs anything
//! into a best-effort valid document.

use crate::editing::{Document, Line, Run};

/// Parses a persisted markdown string into a normalized [`Document`].
/// Blank lines are preserved; this function never fails.
pub fn decode(text: &str) -> Document {
    Document::from_lines(text.split('\n').map(parse_line).collect())
}

/// Serializes a document back to its persisted markdown form, wrapping bold
/// runs in `**...**` and italic runs in `*...*` and joining lines with `\n`.
pub fn encode(doc: &Document) -> String {
    doc.lines()
        .iter()
        .map(encode_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn encode_line(line: &Line) -> String {
    let mut out = String::new();
    for run in line.runs() {
        if run.bold {
            out.push_str("**");
            out.push_str(&run.text);
            out.push_str("**");
        } else if run.italic {
            out.push('*');
            out.push_str(&run.text);
            out.push('*');
        } else {
            out.push_str(&run.text);
        }
    }
    out
}

fn parse_line(s: &str) -> Line {
    let mut runs = Vec::new();
    let mut gap_start = 0;
    while let Some((open, close)) = find_bold_span(s, gap_start) {
        parse_italic_spans(&s[gap_start..open], &mut runs);
        runs.push(Run::bold(&s[open + 2..close]));
        gap_start = close + 2;
    }
    parse_italic_spans(&s[gap_start..], &mut runs);
    Line::from_runs(runs)
}

/// Locates the next `**...**` span at or after `from`, returning the byte
/// offsets of the opening and closing delimiter pairs. The payload must be
/// non-empty; an opener with no closer is left for the caller to treat as
/// literal text.
fn find_bold_span(s: &str, from: usize) -> Option<(usize, usize)> {
    let mut at = from;
    loop {
        let open = at + s[at..].find("**")?;
        if open + 5 > s.len() {
            // not enough room left for delimiters plus payload
            return None;
        }
        match s[open + 2..].find("**") {
            // the adjacent pair can't close an empty span, but a later pair
            // still can: "*****" closes around a literal star
            Some(0) => {
                if let Some(rel) = s[open + 3..].find("**") {
                    return Some((open, open + 3 + rel));
                }
            }
            Some(rel) => return Some((open, open + 2 + rel)),
            None => {}
        }
        at = open + 1;
    }
}

fn parse_italic_spans(gap: &str, runs: &mut Vec<Run>) {
    let mut plain_start = 0;
    while let Some((open, close)) = find_italic_span(gap, plain_start) {
        if open > plain_start {
            runs.push(Run::plain(&gap[plain_start..open]));
        }
        runs.push(Run::italic(&gap[open + 1..close]));
        plain_start = close + 1;
    }
    if plain_start < gap.len() {
        runs.push(Run::plain(&gap[plain_start..]));
    }
}

/// Single-asterisk twin of [`find_bold_span`], applied only to the gaps the
/// bold phase left unconsumed.
fn find_italic_span(s: &str, from: usize) -> Option<(usize, usize)> {
    let mut at = from;
    loop {
        let open = at + s[at..].find('*')?;
        if open + 3 > s.len() {
            return None;
        }
        match s[open + 1..].find('*') {
            Some(0) => {
                if let Some(rel) = s[open + 2..].find('*') {
                    return Some((open, open + 2 + rel));
                }
            }
            Some(rel) => return Some((open, open + 1 + rel)),
            None => {}
        }
        at = open + 1;
    }
}
