//! The markup-string boundary of the editing surface.
//!
//! A browser-style host hands over its editable region as an HTML fragment
//! and accepts one back. [`parse`] is a lenient reader for the vocabulary
//! such a region emits: `div`/`p` row blocks, `strong`/`b`, `em`/`i`, `br`,
//! bare text before the first block, attributes (skipped), HTML entities
//! (decoded), and arbitrary unknown tags (kept as [`SurfaceNode::Unknown`]
//! for [`super::from_surface`] to strip). Malformed tag syntax, a `<` that
//! never becomes a tag, degrades to literal text instead of failing.
//! [`serialize`] writes the inverse form with every text node escaped and
//! never re-emits a tag outside the vocabulary.

use super::{Surface, SurfaceBlock, SurfaceNode};

/// Reads host markup into a [`Surface`]. Never fails; everything the tag
/// scanner rejects is kept as text.
pub fn parse(input: &str) -> Surface {
    Parser::new(input).run()
}

/// Writes a [`Surface`] as host markup, escaping all text content.
pub fn serialize(surface: &Surface) -> String {
    let mut out = String::new();
    for block in &surface.blocks {
        out.push_str("<div>");
        write_nodes(&mut out, &block.children);
        out.push_str("</div>");
    }
    out
}

fn write_nodes(out: &mut String, nodes: &[SurfaceNode]) {
    for node in nodes {
        match node {
            SurfaceNode::Text(text) => out.push_str(&html_escape::encode_text(text)),
            SurfaceNode::Strong(children) => {
                out.push_str("<strong>");
                write_nodes(out, children);
                out.push_str("</strong>");
            }
            SurfaceNode::Em(children) => {
                out.push_str("<em>");
                write_nodes(out, children);
                out.push_str("</em>");
            }
            SurfaceNode::LineBreak => out.push_str("<br>"),
            // tags outside the vocabulary are never written back out
            SurfaceNode::Unknown { children, .. } => write_nodes(out, children),
        }
    }
}

struct Tag {
    name: String,
    closing: bool,
}

enum InlineTag {
    Strong,
    Em,
    Unknown(String),
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    blocks: Vec<SurfaceBlock>,
    /// Open inline containers, innermost last.
    stack: Vec<(InlineTag, Vec<SurfaceNode>)>,
    /// Children of the block being built (below any open inline container).
    current: Vec<SurfaceNode>,
    in_block: bool,
    /// Pending raw text, entities not yet decoded.
    text: String,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            blocks: Vec::new(),
            stack: Vec::new(),
            current: Vec::new(),
            in_block: false,
            text: String::new(),
        }
    }

    fn run(mut self) -> Surface {
        while self.pos < self.src.len() {
            if self.src.as_bytes()[self.pos] == b'<' {
                match self.scan_tag() {
                    Some(tag) => {
                        self.flush_text();
                        self.dispatch(tag);
                    }
                    None => {
                        self.text.push('<');
                        self.pos += 1;
                    }
                }
            } else {
                let rest = &self.src[self.pos..];
                let end = rest.find('<').unwrap_or(rest.len());
                self.text.push_str(&rest[..end]);
                self.pos += end;
            }
        }

        self.flush_text();
        self.unwind_stack();
        if self.in_block || !self.current.is_empty() {
            self.finish_block();
        }
        Surface {
            blocks: self.blocks,
        }
    }

    /// Scans a tag at `pos` (which holds `<`). On success advances past the
    /// closing `>`; on failure leaves `pos` untouched so the `<` stays text.
    fn scan_tag(&mut self) -> Option<Tag> {
        let bytes = self.src.as_bytes();
        let mut i = self.pos + 1;
        let closing = if bytes.get(i) == Some(&b'/') {
            i += 1;
            true
        } else {
            false
        };

        let name_start = i;
        while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
            i += 1;
        }
        if i == name_start || !bytes[name_start].is_ascii_alphabetic() {
            return None;
        }
        let name = self.src[name_start..i].to_ascii_lowercase();

        // skip attributes up to '>', respecting quoted values
        let mut quote: Option<u8> = None;
        while i < bytes.len() {
            let b = bytes[i];
            match quote {
                Some(q) => {
                    if b == q {
                        quote = None;
                    }
                }
                None => match b {
                    b'"' | b'\'' => quote = Some(b),
                    b'>' => {
                        self.pos = i + 1;
                        return Some(Tag { name, closing });
                    }
                    b'<' => return None,
                    _ => {}
                },
            }
            i += 1;
        }
        None
    }

    fn dispatch(&mut self, tag: Tag) {
        match (tag.name.as_str(), tag.closing) {
            ("div" | "p", false) => return self.start_block(),
            ("div" | "p", true) => return self.end_block(),
            ("br", _) => return self.push_node(SurfaceNode::LineBreak),
            ("strong" | "b", false) => return self.stack.push((InlineTag::Strong, Vec::new())),
            ("em" | "i", false) => return self.stack.push((InlineTag::Em, Vec::new())),
            ("strong" | "b", true) => {
                return self.close_inline(|t| matches!(t, InlineTag::Strong));
            }
            ("em" | "i", true) => return self.close_inline(|t| matches!(t, InlineTag::Em)),
            _ => {}
        }
        // anything outside the vocabulary
        if tag.closing {
            self.close_inline(|t| matches!(t, InlineTag::Unknown(n) if *n == tag.name));
        } else {
            self.stack.push((InlineTag::Unknown(tag.name), Vec::new()));
        }
    }

    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let decoded = html_escape::decode_html_entities(&self.text).into_owned();
        self.text.clear();
        self.push_node(SurfaceNode::Text(decoded));
    }

    fn push_node(&mut self, node: SurfaceNode) {
        match self.stack.last_mut() {
            Some((_, children)) => children.push(node),
            None => self.current.push(node),
        }
    }

    /// Closes the nearest matching open inline container, closing anything
    /// opened inside it along the way. A close with no matching open is a
    /// stray and is ignored.
    fn close_inline<F>(&mut self, matches_tag: F)
    where
        F: Fn(&InlineTag) -> bool,
    {
        if !self.stack.iter().any(|(t, _)| matches_tag(t)) {
            return;
        }
        while let Some((tag, children)) = self.stack.pop() {
            let done = matches_tag(&tag);
            let node = wrap(tag, children);
            self.push_node(node);
            if done {
                break;
            }
        }
    }

    /// Flattens all open inline containers; block boundaries close them.
    fn unwind_stack(&mut self) {
        while let Some((tag, children)) = self.stack.pop() {
            let node = wrap(tag, children);
            self.push_node(node);
        }
    }

    fn start_block(&mut self) {
        self.unwind_stack();
        // bare text before the first explicit block is its own implicit row
        if self.in_block || !self.current.is_empty() {
            self.finish_block();
        }
        self.in_block = true;
    }

    fn end_block(&mut self) {
        self.unwind_stack();
        if self.in_block || !self.current.is_empty() {
            self.finish_block();
        }
        self.in_block = false;
    }

    fn finish_block(&mut self) {
        self.blocks.push(SurfaceBlock {
            children: std::mem::take(&mut self.current),
        });
    }
}

fn wrap(tag: InlineTag, children: Vec<SurfaceNode>) -> SurfaceNode {
    match tag {
        InlineTag::Strong => SurfaceNode::Strong(children),
        InlineTag::Em => SurfaceNode::Em(children),
        InlineTag::Unknown(name) => SurfaceNode::Unknown {
            tag: name,
            children,
        },
    }
}
