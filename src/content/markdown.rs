//! Line-oriented markdown rendering
//!
//! This is deliberately a small subset of markdown: every source line maps to
//! at most one HTML fragment, and the only multi-line structure is grouping
//! consecutive list items into `<ul>`/`<ol>` containers.

use lazy_static::lazy_static;
use regex::Regex;

use crate::helpers::html_escape;

lazy_static! {
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref LINK: Regex = Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap();
    static ref ORDERED_ITEM: Regex = Regex::new(r"^\d+\.\s+").unwrap();
}

const LINK_CLASS: &str = "text-cyan-300 underline";
const FIGURE_CLASS: &str = "my-6 overflow-hidden rounded-xl border border-slate-700/70";
const CAPTION_CLASS: &str = "px-4 py-2 text-sm text-slate-400";

/// How a raw line participates in list grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    UnorderedItem,
    OrderedItem,
    Other,
}

impl LineKind {
    fn classify(line: &str) -> Self {
        if line.starts_with("- ") {
            LineKind::UnorderedItem
        } else if ORDERED_ITEM.is_match(line) {
            LineKind::OrderedItem
        } else {
            LineKind::Other
        }
    }
}

/// Open list container while assembling a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    None,
    Unordered,
    Ordered,
}

impl ListState {
    fn for_line(kind: LineKind) -> Self {
        match kind {
            LineKind::UnorderedItem => ListState::Unordered,
            LineKind::OrderedItem => ListState::Ordered,
            LineKind::Other => ListState::None,
        }
    }

    fn open_tag(self) -> Option<&'static str> {
        match self {
            ListState::None => None,
            ListState::Unordered => Some("<ul>"),
            ListState::Ordered => Some("<ol>"),
        }
    }

    fn close_tag(self) -> Option<&'static str> {
        match self {
            ListState::None => None,
            ListState::Unordered => Some("</ul>"),
            ListState::Ordered => Some("</ol>"),
        }
    }
}

/// Render a whole markdown body to HTML, one fragment per output line.
pub fn render(markdown: &str) -> String {
    let mut output: Vec<String> = Vec::new();
    let mut state = ListState::None;

    for line in split_lines(markdown) {
        let next = ListState::for_line(LineKind::classify(line));

        if next != state {
            output.extend(state.close_tag().map(str::to_string));
            output.extend(next.open_tag().map(str::to_string));
            state = next;
        }

        if let Some(fragment) = render_line(line) {
            output.push(fragment);
        }
    }

    output.extend(state.close_tag().map(str::to_string));

    output.join("\n")
}

/// Split on `\n`, `\r\n` and lone `\r`; a trailing terminator adds no line
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let text = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix(['\n', '\r']))
        .unwrap_or(text);
    let mut rest = (!text.is_empty()).then_some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\n', '\r']) {
            Some(end) => {
                let skip = if current[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[end + skip..]);
                Some(&current[..end])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Render a single line. Blank lines yield `None`.
///
/// Headings are escaped from the raw text and do not get bold/link
/// processing.
pub fn render_line(line: &str) -> Option<String> {
    let line = line.trim_end();
    if line.is_empty() {
        return None;
    }

    if let Some(figure) = render_image(line) {
        return Some(figure);
    }

    let escaped = render_inline(&html_escape(line));

    if let Some(rest) = line.strip_prefix("### ") {
        return Some(format!("<h3>{}</h3>", html_escape(rest)));
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Some(format!("<h2>{}</h2>", html_escape(rest)));
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return Some(format!("<h1>{}</h1>", html_escape(rest)));
    }

    // "- " survives escaping untouched, so the prefix length carries over.
    if line.starts_with("- ") {
        return Some(format!("<li>{}</li>", &escaped[2..]));
    }
    if ORDERED_ITEM.is_match(line) {
        return Some(format!("<li>{}</li>", ORDERED_ITEM.replace(&escaped, "")));
    }

    Some(format!("<p>{}</p>", escaped))
}

/// `![alt](src)` occupying the whole line
fn render_image(line: &str) -> Option<String> {
    if !(line.starts_with("![") && line.contains("](") && line.ends_with(')')) {
        return None;
    }

    let alt_end = line.find(']')?;
    let src_start = line.find('(')? + 1;
    let src_end = line.len() - 1;
    if src_start > src_end {
        return None;
    }

    let alt = html_escape(&line[2..alt_end]);
    let src = html_escape(&line[src_start..src_end]);

    Some(format!(
        r#"<figure class="{}"><img src="{}" alt="{}" class="w-full" /><figcaption class="{}">{}</figcaption></figure>"#,
        FIGURE_CLASS, src, alt, CAPTION_CLASS, alt
    ))
}

/// Bold and link spans over already-escaped text
fn render_inline(escaped: &str) -> String {
    let bolded = BOLD.replace_all(escaped, "<strong>${1}</strong>");
    LINK.replace_all(
        &bolded,
        format!(r#"<a class="{}" href="${{2}}">${{1}}</a>"#, LINK_CLASS).as_str(),
    )
    .into_owned()
}
