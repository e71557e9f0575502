use std::fmt::Write;

use tagcloud_core::{FontBounds, RankedEntry};

/// Everything a renderer needs to lay out one tag cloud.
#[derive(Debug, Clone, Copy)]
pub struct CloudDocument<'a> {
    /// Input file name as the user gave it.
    pub source_name: &'a str,
    /// Number of words the user asked for.
    pub requested: usize,
    /// Entries in display order.
    pub entries: &'a [RankedEntry],
    pub font: FontBounds,
}

impl CloudDocument<'_> {
    pub fn title(&self) -> String {
        format!("Top {} words in {}", self.requested, self.source_name)
    }
}

pub trait Renderer: Send + Sync {
    fn render(&self, doc: &CloudDocument<'_>) -> String;
}

/// Stylesheet link kept for users who ship their own `tagcloud.css`.
const STYLESHEET_HREF: &str = "tagcloud.css";

/// Renders a standalone HTML page with one `<span>` per word.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &CloudDocument<'_>) -> String {
        let title = escape_html(&doc.title());
        let mut out = String::new();

        out.push_str("<html>\n<head>\n");
        let _ = writeln!(out, "<title>{title}</title>");
        let _ = writeln!(
            out,
            "<link href=\"{STYLESHEET_HREF}\" rel=\"stylesheet\" type=\"text/css\">"
        );
        out.push_str(&style_block(doc.font));
        out.push_str("</head>\n<body>\n");
        let _ = writeln!(out, "<h2>{title}</h2>");
        out.push_str("<hr>\n<div class=\"cdiv\">\n<p class=\"cbox\">\n");
        for entry in doc.entries {
            let _ = writeln!(
                out,
                "<span style=\"cursor:default\" class=\"f{}\" title=\"count: {}\">{}</span>",
                entry.font_size,
                entry.count,
                escape_html(&entry.word)
            );
        }
        out.push_str("</p>\n</div>\n</body>\n</html>\n");
        out
    }
}

fn style_block(font: FontBounds) -> String {
    let mut css = String::from("<style>\n");
    css.push_str(".cdiv { margin: 0 auto; width: 800px; }\n");
    css.push_str(
        ".cbox { border: 1px solid #ccc; padding: 10px; line-height: 1.4; text-align: center; }\n",
    );
    css.push_str(".cbox span { margin: 0 4px; }\n");
    for size in font.sizes() {
        let _ = writeln!(css, ".f{size} {{ font-size: {size}px; }}");
    }
    css.push_str("</style>\n");
    css
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
