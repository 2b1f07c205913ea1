//! Read-only display rendering.
//!
//! A document shown outside edit mode may have been decoded from any
//! persisted string, so run text is never trusted as markup: everything is
//! escaped before embedding. This replaced the old pages' habit of
//! interpolating converted strings straight into the display markup.

use crate::editing::Document;

/// Renders a document as display markup: one paragraph per line, bold and
/// italic runs as `<strong>`/`<em>`, all text escaped. A blank line becomes
/// an empty paragraph.
pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    for line in doc.lines() {
        out.push_str("<p>");
        if !line.is_empty() {
            for run in line.runs() {
                let escaped = html_escape::encode_text(&run.text);
                if run.bold {
                    out.push_str("<strong>");
                    out.push_str(&escaped);
                    out.push_str("</strong>");
                } else if run.italic {
                    out.push_str("<em>");
                    out.push_str(&escaped);
                    out.push_str("</em>");
                } else {
                    out.push_str(&escaped);
                }
            }
        }
        out.push_str("</p>");
    }
    out
}
