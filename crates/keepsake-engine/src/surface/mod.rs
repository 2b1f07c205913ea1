//! The live editing representation: an HTML-like tree the editing-surface
//! host (a `contenteditable` region or equivalent) displays and mutates.
//!
//! The surface is an *input* as much as an output. The host control is a
//! live, externally-influenced area, so [`from_surface`] never trusts it to
//! emit only the expected vocabulary: any node outside
//! block/bold/italic/line-break is stripped while its inner text is kept.
//! That closure over unknown markup is what replaced the old per-page
//! ordered string substitutions, which silently passed anything they didn't
//! recognize straight through.
//!
//! Text nodes hold literal, already-decoded text; the [`html`] module applies
//! entity decoding when parsing host markup and escaping when writing it.

pub mod html;

use crate::editing::{Document, Line, Run};

/// One node of the editable surface tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceNode {
    /// Literal text (entity decoding already applied).
    Text(String),
    /// Bold inline container (`<strong>`/`<b>` in an HTML host).
    Strong(Vec<SurfaceNode>),
    /// Italic inline container (`<em>`/`<i>` in an HTML host).
    Em(Vec<SurfaceNode>),
    /// Explicit line-break marker (`<br>`); keeps empty rows visible.
    LineBreak,
    /// Anything outside the vocabulary. Preserved in the tree so the host
    /// round-trips faithfully, stripped on conversion to a document.
    Unknown {
        tag: String,
        children: Vec<SurfaceNode>,
    },
}

/// A block-level node: one visual row group of the editing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceBlock {
    pub children: Vec<SurfaceNode>,
}

/// The whole editable surface for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub blocks: Vec<SurfaceBlock>,
}

/// Renders a document as an editable surface: one block per line, runs as
/// styled inline nodes, and an explicit line-break marker for an empty line
/// so the surface shows a visible empty row instead of collapsing it.
pub fn to_surface(doc: &Document) -> Surface {
    let blocks = doc
        .lines()
        .iter()
        .map(|line| {
            if line.is_empty() {
                SurfaceBlock {
                    children: vec![SurfaceNode::LineBreak],
                }
            } else {
                SurfaceBlock {
                    children: line.runs().iter().map(run_to_node).collect(),
                }
            }
        })
        .collect();
    Surface { blocks }
}

fn run_to_node(run: &Run) -> SurfaceNode {
    let text = SurfaceNode::Text(run.text.clone());
    if run.bold {
        SurfaceNode::Strong(vec![text])
    } else if run.italic {
        SurfaceNode::Em(vec![text])
    } else {
        text
    }
}

/// Walks an editing surface back into a normalized [`Document`].
///
/// Unknown nodes are stripped with their inner text retained. A line-break
/// marker inside a block splits the row (a trailing one just terminates it,
/// matching how editing surfaces render `<div>a<br></div>`). Styling comes
/// from `Strong`/`Em` ancestry; if markup implies both, bold wins, matching
/// the codec's single-level styling.
pub fn from_surface(surface: &Surface) -> Document {
    let mut lines = Vec::new();
    for block in &surface.blocks {
        let mut segments: Vec<Vec<Run>> = vec![Vec::new()];
        collect_runs(&block.children, false, false, &mut segments);
        if segments.len() > 1 && segments.last().is_some_and(|seg| seg.is_empty()) {
            segments.pop();
        }
        lines.extend(segments.into_iter().map(Line::from_runs));
    }
    Document::from_lines(lines)
}

fn collect_runs(
    nodes: &[SurfaceNode],
    bold: bool,
    italic: bool,
    segments: &mut Vec<Vec<Run>>,
) {
    for node in nodes {
        match node {
            SurfaceNode::Text(text) => {
                // raw newlines in surface text behave like line breaks; runs
                // never contain them
                for (i, piece) in text.split('\n').enumerate() {
                    if i > 0 {
                        segments.push(Vec::new());
                    }
                    if piece.is_empty() {
                        continue;
                    }
                    let run = if bold {
                        Run::bold(piece)
                    } else if italic {
                        Run::italic(piece)
                    } else {
                        Run::plain(piece)
                    };
                    if let Some(last) = segments.last_mut() {
                        last.push(run);
                    }
                }
            }
            SurfaceNode::Strong(children) => collect_runs(children, true, italic, segments),
            SurfaceNode::Em(children) => collect_runs(children, bold, true, segments),
            SurfaceNode::LineBreak => segments.push(Vec::new()),
            SurfaceNode::Unknown { children, .. } => collect_runs(children, bold, italic, segments),
        }
    }
}

/// Parses host markup straight into a document: the load half of the
/// editing-surface boundary.
pub fn from_markup(markup: &str) -> Document {
    from_surface(&html::parse(markup))
}

/// Writes a document as host markup: the display half of the editing-surface
/// boundary.
pub fn to_markup(doc: &Document) -> String {
    html::serialize(&to_surface(doc))
}
