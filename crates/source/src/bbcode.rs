//! BBCode to HTML conversion for article bodies.
//!
//! Text is HTML-escaped before any tag is translated, so the only markup in
//! the output is what the translation emits. Unknown or unbalanced tags are
//! left as literal text.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Simple paired tags and the HTML they become.
const SIMPLE_TAGS: &[(&str, &str, &str)] = &[
    ("b", "<strong>", "</strong>"),
    ("i", "<em>", "</em>"),
    ("u", "<u>", "</u>"),
    ("s", "<s>", "</s>"),
];

/// Block tags; their content is split into paragraphs of its own.
const BLOCK_TAGS: &[(&str, &str, &str)] = &[
    ("quote", "<blockquote>", "</blockquote>"),
    ("center", "<div class=\"center\">", "</div>"),
];

static SIMPLE_RES: LazyLock<Vec<(Regex, &'static str, &'static str)>> = LazyLock::new(|| {
    SIMPLE_TAGS
        .iter()
        .map(|(tag, open, close)| {
            let re = Regex::new(&format!(r"(?is)\[{tag}\](.*?)\[/{tag}\]")).unwrap();
            (re, *open, *close)
        })
        .collect()
});

/// `[url]https://…[/url]`
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[url\]\s*(.*?)\s*\[/url\]").unwrap());

/// `[url=https://…]label[/url]`
static URL_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[url=([^\]]+)\](.*?)\[/url\]").unwrap());

static IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[img\]\s*(.*?)\s*\[/img\]").unwrap());

static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[color=([^\]]+)\](.*?)\[/color\]").unwrap());

static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[size=([^\]]+)\](.*?)\[/size\]").unwrap());

static LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[list(=1)?\](.*?)\[/list\]").unwrap());

static COLOR_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#[0-9a-fA-F]{3}|#[0-9a-fA-F]{6}|[a-zA-Z]{3,20})$").unwrap());

static BLOCK_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[(/?)(quote|center)\]").unwrap());

static PARAGRAPH_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

/// Paired tags nested inside themselves need one pass per level.
const MAX_NESTING: usize = 8;

const BLOCK_PREFIXES: &[&str] = &["<ul", "<ol"];

/// Converts a BBCode body into sanitized HTML paragraphs.
pub fn to_html(source: &str) -> String {
    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");
    let mut html = escape(normalized.trim());

    html = LIST_RE.replace_all(&html, render_list).into_owned();
    html = IMG_RE
        .replace_all(&html, |c: &Captures| match safe_url(&c[1]) {
            Some(url) => format!("<img src=\"{url}\" alt=\"\">"),
            None => String::new(),
        })
        .into_owned();
    html = URL_LABEL_RE
        .replace_all(&html, |c: &Captures| match safe_url(&c[1]) {
            Some(url) => format!("<a href=\"{url}\">{}</a>", &c[2]),
            None => c[2].to_string(),
        })
        .into_owned();
    html = URL_RE
        .replace_all(&html, |c: &Captures| match safe_url(&c[1]) {
            Some(url) => format!("<a href=\"{url}\">{url}</a>"),
            None => c[1].to_string(),
        })
        .into_owned();

    for _ in 0..MAX_NESTING {
        let before = html.clone();
        for (re, open, close) in SIMPLE_RES.iter() {
            html = re
                .replace_all(&html, |c: &Captures| format!("{open}{}{close}", &c[1]))
                .into_owned();
        }
        html = COLOR_RE
            .replace_all(&html, |c: &Captures| {
                let value = c[1].trim();
                if COLOR_VALUE_RE.is_match(value) {
                    format!("<span style=\"color: {value}\">{}</span>", &c[2])
                } else {
                    c[2].to_string()
                }
            })
            .into_owned();
        html = SIZE_RE
            .replace_all(&html, |c: &Captures| match c[1].trim().parse::<u8>() {
                Ok(px) if (6..=72).contains(&px) => {
                    format!("<span style=\"font-size: {px}px\">{}</span>", &c[2])
                }
                _ => c[2].to_string(),
            })
            .into_owned();
        if html == before {
            break;
        }
    }

    render_blocks(&html)
}

/// A block tag found in the text: byte range and its index in `BLOCK_TAGS`.
struct BlockTag {
    start: usize,
    end: usize,
    kind: usize,
    closing: bool,
}

fn block_tags(text: &str, from: usize) -> impl Iterator<Item = BlockTag> + '_ {
    BLOCK_TAG_RE.captures_iter(&text[from..]).filter_map(move |c| {
        let whole = c.get(0)?;
        let name = c[2].to_ascii_lowercase();
        let kind = BLOCK_TAGS.iter().position(|(tag, _, _)| *tag == name)?;
        Some(BlockTag {
            start: from + whole.start(),
            end: from + whole.end(),
            kind,
            closing: !c[1].is_empty(),
        })
    })
}

/// The closing tag that balances an opening tag ending at `from`.
fn matching_close(text: &str, from: usize, kind: usize) -> Option<BlockTag> {
    let mut depth = 1usize;
    for tag in block_tags(text, from).filter(|t| t.kind == kind) {
        if tag.closing {
            depth -= 1;
            if depth == 0 {
                return Some(tag);
            }
        } else {
            depth += 1;
        }
    }
    None
}

/// Wraps balanced block tags around their own paragraphs. Unbalanced block
/// tags stay literal inside the surrounding paragraph.
fn render_blocks(text: &str) -> String {
    let mut pieces = Vec::new();
    let mut plain_start = 0;
    let mut search = 0;

    while let Some(open) = block_tags(text, search).find(|t| !t.closing) {
        match matching_close(text, open.end, open.kind) {
            Some(close) => {
                let (_, open_html, close_html) = BLOCK_TAGS[open.kind];
                pieces.push(paragraphs(&text[plain_start..open.start]));
                pieces.push(format!(
                    "{open_html}{}{close_html}",
                    render_blocks(&text[open.end..close.start])
                ));
                plain_start = close.end;
                search = close.end;
            }
            None => search = open.end,
        }
    }
    pieces.push(paragraphs(&text[plain_start..]));
    pieces.retain(|piece| !piece.is_empty());
    pieces.join("\n")
}

fn paragraphs(text: &str) -> String {
    PARAGRAPH_BREAK_RE
        .split(text)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let inner = chunk.replace('\n', "<br>\n");
            if BLOCK_PREFIXES.iter().any(|p| chunk.starts_with(p)) {
                inner
            } else {
                format!("<p>{inner}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_list(c: &Captures) -> String {
    let tag = if c.get(1).is_some() { "ol" } else { "ul" };
    let items: String = c[2]
        .split("[*]")
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| format!("<li>{}</li>", item.replace('\n', " ")))
        .collect();
    format!("<{tag}>{items}</{tag}>")
}

/// Only web and mail links survive; the input is already escaped.
fn safe_url(raw: &str) -> Option<&str> {
    let url = raw.trim();
    let lower = url.to_ascii_lowercase();
    let allowed = ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme));
    (allowed && !url.contains(char::is_whitespace)).then_some(url)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_and_line_breaks() {
        let html = to_html("Primeira linha\nsegunda linha\n\nOutro parágrafo");
        assert_eq!(
            html,
            "<p>Primeira linha<br>\nsegunda linha</p>\n<p>Outro parágrafo</p>"
        );
    }

    #[test]
    fn inline_tags_nest() {
        assert_eq!(
            to_html("[b]negrito [i]itálico[/i][/b]"),
            "<p><strong>negrito <em>itálico</em></strong></p>"
        );
        assert_eq!(to_html("[B]caixa[/B]"), "<p><strong>caixa</strong></p>");
    }

    #[test]
    fn escapes_raw_html() {
        assert_eq!(
            to_html("<script>alert(1)</script> & co"),
            "<p>&lt;script&gt;alert(1)&lt;/script&gt; &amp; co</p>"
        );
    }

    #[test]
    fn links_and_images() {
        assert_eq!(
            to_html("[url=https://exemplo.org]site[/url]"),
            "<p><a href=\"https://exemplo.org\">site</a></p>"
        );
        assert_eq!(
            to_html("[url]https://exemplo.org[/url]"),
            "<p><a href=\"https://exemplo.org\">https://exemplo.org</a></p>"
        );
        assert_eq!(
            to_html("[img]https://exemplo.org/a.png[/img]"),
            "<p><img src=\"https://exemplo.org/a.png\" alt=\"\"></p>"
        );
    }

    #[test]
    fn unsafe_urls_are_dropped() {
        assert_eq!(to_html("[url=javascript:alert(1)]x[/url]"), "<p>x</p>");
        assert_eq!(to_html("[img]javascript:x[/img]"), "");
    }

    #[test]
    fn color_and_size_are_validated() {
        assert_eq!(
            to_html("[color=#d62839]vermelho[/color]"),
            "<p><span style=\"color: #d62839\">vermelho</span></p>"
        );
        assert_eq!(to_html("[color=red;x:y]a[/color]"), "<p>a</p>");
        assert_eq!(
            to_html("[size=14]a[/size]"),
            "<p><span style=\"font-size: 14px\">a</span></p>"
        );
        assert_eq!(to_html("[size=900]a[/size]"), "<p>a</p>");
    }

    #[test]
    fn lists() {
        assert_eq!(
            to_html("[list]\n[*]um\n[*]dois\n[/list]"),
            "<ul><li>um</li><li>dois</li></ul>"
        );
        assert_eq!(to_html("[list=1][*]a[/list]"), "<ol><li>a</li></ol>");
    }

    #[test]
    fn quote_is_a_block() {
        assert_eq!(
            to_html("[quote]citação[/quote]"),
            "<blockquote><p>citação</p></blockquote>"
        );
    }

    #[test]
    fn blank_line_inside_a_quote_stays_inside_it() {
        assert_eq!(
            to_html("[quote]primeiro\n\nsegundo[/quote]"),
            "<blockquote><p>primeiro</p>\n<p>segundo</p></blockquote>"
        );
        assert_eq!(
            to_html("antes\n[center]a\n\nb[/center]\ndepois"),
            "<p>antes</p>\n<div class=\"center\"><p>a</p>\n<p>b</p></div>\n<p>depois</p>"
        );
    }

    #[test]
    fn nested_quotes_balance() {
        assert_eq!(
            to_html("[quote]a[QUOTE]b[/quote]c[/quote]"),
            "<blockquote><p>a</p>\n<blockquote><p>b</p></blockquote>\n<p>c</p></blockquote>"
        );
    }

    #[test]
    fn unbalanced_block_tag_stays_literal() {
        assert_eq!(to_html("[quote]sem fim"), "<p>[quote]sem fim</p>");
    }

    #[test]
    fn unbalanced_tags_stay_literal() {
        assert_eq!(to_html("[b]sem fim"), "<p>[b]sem fim</p>");
    }

    #[test]
    fn empty_input() {
        assert_eq!(to_html(""), "");
        assert_eq!(to_html("  \n\n  "), "");
    }
}
