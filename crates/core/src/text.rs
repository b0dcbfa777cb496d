//! Visible text measurements of pre-rendered article bodies.

use log::warn;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

/// Tags after which the following text starts a new paragraph.
const BREAKING_TAGS: &[&str] = &[
    "p", "br", "div", "li", "blockquote", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "hr",
];

fn is_breaking(tag: &str) -> bool {
    BREAKING_TAGS.contains(&tag)
}

fn should_skip_tag(tag: &str) -> bool {
    matches!(tag, "script" | "style" | "head" | "noscript")
}

fn tag_name(raw: &[u8]) -> String {
    let name = String::from_utf8_lossy(raw);
    let local = name.rsplit(':').next().unwrap_or(name.as_ref());
    local.to_ascii_lowercase()
}

/// Running state of one measurement pass.
#[derive(Default)]
struct Measure {
    lengths: Vec<usize>,
    current: usize,
    pending_space: bool,
}

impl Measure {
    fn text(&mut self, text: &str) {
        for c in text.chars() {
            if c.is_whitespace() {
                if self.current > 0 {
                    self.pending_space = true;
                }
            } else {
                self.glyph();
            }
        }
    }

    fn glyph(&mut self) {
        if self.pending_space {
            self.current += 1;
            self.pending_space = false;
        }
        self.current += 1;
    }

    fn flush(&mut self) {
        if self.current > 0 {
            self.lengths.push(self.current);
        }
        self.current = 0;
        self.pending_space = false;
    }
}

/// Visible character count of each paragraph in an HTML fragment.
///
/// Markup is skipped, as is the content of `script` and `style` elements.
/// An entity counts as one character, runs of whitespace count as one, and
/// block-level tags separate paragraphs. Empty paragraphs are dropped.
///
/// The fragment is tokenized leniently: unclosed and unmatched tags are
/// accepted. On a tokenizer error the text measured so far is returned.
pub fn paragraph_lengths(html: &str) -> Vec<usize> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut measure = Measure::default();
    let mut skip_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let tag = tag_name(e.name().as_ref());
                if should_skip_tag(&tag) {
                    skip_depth += 1;
                } else if skip_depth == 0 && is_breaking(&tag) {
                    measure.flush();
                }
            }
            Ok(Event::Empty(e)) => {
                let tag = tag_name(e.name().as_ref());
                if skip_depth == 0 && is_breaking(&tag) {
                    measure.flush();
                }
            }
            Ok(Event::End(e)) => {
                let tag = tag_name(e.name().as_ref());
                if should_skip_tag(&tag) {
                    skip_depth = skip_depth.saturating_sub(1);
                } else if skip_depth == 0 && is_breaking(&tag) {
                    measure.flush();
                }
            }
            Ok(Event::Text(e)) if skip_depth == 0 => match e.decode() {
                Ok(text) => measure.text(&text),
                Err(err) => warn!("Skipping undecodable text run: {:?}", err),
            },
            Ok(Event::CData(e)) if skip_depth == 0 => {
                measure.text(&String::from_utf8_lossy(&e));
            }
            Ok(Event::GeneralRef(_)) if skip_depth == 0 => measure.glyph(),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                warn!(
                    "Body markup could not be tokenized at byte {}: {:?}",
                    reader.buffer_position(),
                    err
                );
                break;
            }
        }
    }
    measure.flush();
    measure.lengths
}
