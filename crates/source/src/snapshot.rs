//! Curation of the next edition out of exported content snapshots.
//!
//! The content store is exported as timestamped JSON files,
//! `editions_<stamp>.json` and `articles_<stamp>.json`. Field names follow the
//! store's Portuguese schema (`numero`, `titulo`, `tipo`, `conteudo`, ...);
//! English names are accepted as well.

use crate::bbcode;
use crate::calendar::edition_subtitle;
use crate::error::SourceError;
use chrono::NaiveDate;
use folio_types::{Article, AssetRef, Author, Edition, Highlight};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const EDITIONS_PREFIX: &str = "editions";
pub const ARTICLES_PREFIX: &str = "articles";

/// Only articles in this state are published.
pub const APPROVED_STATUS: &str = "Aprovado";
/// Articles of this type open the edition and are never highlighted.
pub const EDITORIAL_TYPE: &str = "Editorial";
pub const MAX_HIGHLIGHTS: usize = 3;
/// Longer titles do not fit the cover.
pub const MAX_HIGHLIGHT_TITLE_CHARS: usize = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct EditionRecord {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "numero", deserialize_with = "number_or_string")]
    pub number: u32,
    #[serde(default, alias = "titulo")]
    pub title: Option<String>,
    #[serde(default, alias = "capa", alias = "coverImage")]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleRecord {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default, alias = "titulo")]
    pub title: String,
    #[serde(default, rename = "type", alias = "tipo")]
    pub article_type: String,
    /// BBCode source of the body.
    #[serde(default, alias = "conteudo")]
    pub content: String,
    #[serde(default)]
    pub status: Value,
    #[serde(default, alias = "edicao")]
    pub edition: Value,
    #[serde(default, alias = "autor_nome", alias = "authorName")]
    pub author_name: Option<String>,
    #[serde(default, alias = "autor_bio", alias = "authorBio")]
    pub author_bio: Option<String>,
    #[serde(default, alias = "autor_foto", alias = "authorPhoto")]
    pub author_photo: Option<String>,
}

impl ArticleRecord {
    fn is_approved(&self) -> bool {
        display_text(&self.status).as_deref() == Some(APPROVED_STATUS)
    }

    fn into_article(self) -> Article {
        let author = Author {
            name: self.author_name.unwrap_or_default(),
            bio: self.author_bio.filter(|b| !b.trim().is_empty()),
            photo_url: self
                .author_photo
                .filter(|p| !p.trim().is_empty())
                .map(|p| AssetRef::new(absolute_url(p))),
        };
        Article::new(self.title, self.article_type, bbcode::to_html(&self.content))
            .with_author(author)
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberDef {
        Int(u32),
        Float(f64),
        Str(String),
    }

    match NumberDef::deserialize(deserializer)? {
        NumberDef::Int(n) => Ok(n),
        NumberDef::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) => {
            Ok(f as u32)
        }
        NumberDef::Float(f) => Err(serde::de::Error::custom(format!("invalid edition number {f}"))),
        NumberDef::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// The store exports some image URLs protocol-relative (`//host/path`).
fn absolute_url(url: String) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url
    }
}

/// Normalizes a reference to another record to its id.
///
/// The export writes references as a plain id, a list of ids, a list
/// serialized into a string, or an embedded object.
pub fn reference_id(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            if s.starts_with('[') && s.ends_with(']') {
                let parsed = serde_json::from_str::<Value>(s)
                    .or_else(|_| serde_json::from_str::<Value>(&s.replace('\'', "\"")));
                if let Ok(list @ Value::Array(_)) = parsed {
                    return reference_id(&list);
                }
            }
            Some(s.to_string())
        }
        Value::Array(items) => items.first().and_then(reference_id),
        Value::Object(map) => ["unique_id", "_id", "id"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
    }
}

/// Display text of an option-set value: a plain string or `{display|text|label}`.
fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Object(map) => ["display", "text", "label"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(|s| s.trim().to_string()),
        _ => None,
    }
}

/// Inputs of curation that do not come from the snapshots.
#[derive(Debug, Clone)]
pub struct CurateOptions {
    /// Date used for the cover subtitle.
    pub date: NaiveDate,
    /// Used when the edition record has no cover of its own.
    pub cover_image: AssetRef,
    pub back_cover_image: AssetRef,
    pub logo: Option<AssetRef>,
}

/// A directory of exported snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The newest snapshot with `prefix`: the lexicographically last
    /// `<prefix>_*.json`, which is the newest for timestamped names.
    pub fn latest(&self, prefix: &str) -> Result<PathBuf, SourceError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| SourceError::io(&self.dir, e))?;
        let wanted = format!("{prefix}_");
        let mut newest: Option<PathBuf> = None;
        for entry in entries {
            let path = entry.map_err(|e| SourceError::io(&self.dir, e))?.path();
            let matches = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(&wanted) && n.ends_with(".json"));
            if matches && newest.as_ref().is_none_or(|current| path > *current) {
                newest = Some(path);
            }
        }
        newest.ok_or_else(|| SourceError::NoSnapshot {
            dir: self.dir.clone(),
            prefix: prefix.to_string(),
        })
    }

    fn read_records<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, SourceError> {
        let file = File::open(path).map_err(|e| SourceError::io(path, e))?;
        let records: Vec<T> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| SourceError::json(path, e))?;
        log::debug!("Read {} record(s) from {}", records.len(), path.display());
        Ok(records)
    }

    pub fn editions(&self) -> Result<Vec<EditionRecord>, SourceError> {
        Self::read_records(&self.latest(EDITIONS_PREFIX)?)
    }

    pub fn articles(&self) -> Result<Vec<ArticleRecord>, SourceError> {
        Self::read_records(&self.latest(ARTICLES_PREFIX)?)
    }

    /// Builds the edition with the highest number from the latest snapshots.
    pub fn curate(&self, options: &CurateOptions) -> Result<Edition, SourceError> {
        curate(self.editions()?, self.articles()?, options)
    }
}

/// Selects the newest edition and its approved articles, and dresses the cover.
pub fn curate(
    editions: Vec<EditionRecord>,
    articles: Vec<ArticleRecord>,
    options: &CurateOptions,
) -> Result<Edition, SourceError> {
    let latest = editions
        .into_iter()
        .max_by_key(|e| e.number)
        .ok_or(SourceError::NoEditions)?;

    let total = articles.len();
    let mut selected: Vec<Article> = articles
        .into_iter()
        .filter(|a| a.is_approved() && reference_id(&a.edition).as_deref() == Some(latest.id.as_str()))
        .map(ArticleRecord::into_article)
        .collect();
    // Stable: editorials first, everything else keeps its export order.
    selected.sort_by_key(|a| a.article_type != EDITORIAL_TYPE);
    log::info!(
        "Edition {}: {} of {} article(s) approved",
        latest.number,
        selected.len(),
        total
    );

    let cover = latest
        .cover_image
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| AssetRef::new(absolute_url(c.to_string())))
        .unwrap_or_else(|| options.cover_image.clone());

    let mut edition = Edition::new(latest.number, cover, options.back_cover_image.clone())
        .with_subtitle(edition_subtitle(latest.number, options.date));
    if let Some(title) = latest.title.filter(|t| !t.trim().is_empty()) {
        edition = edition.with_title(title);
    }
    if let Some(logo) = &options.logo {
        edition = edition.with_logo(logo.clone());
    }
    for highlight in pick_highlights(&selected, latest.number) {
        edition = edition.with_highlight(highlight);
    }
    for article in selected {
        edition = edition.with_article(article);
    }
    Ok(edition)
}

/// Up to three non-editorial articles with short titles, drawn with a
/// generator seeded by the edition number so reruns agree.
pub fn pick_highlights(articles: &[Article], edition_number: u32) -> Vec<Highlight> {
    let candidates: Vec<&Article> = articles
        .iter()
        .filter(|a| {
            a.article_type != EDITORIAL_TYPE
                && a.title.chars().count() <= MAX_HIGHLIGHT_TITLE_CHARS
        })
        .collect();
    let mut rng = StdRng::seed_from_u64(u64::from(edition_number));
    candidates
        .choose_multiple(&mut rng, MAX_HIGHLIGHTS)
        .map(|a| Highlight::new(a.title.clone()).with_page_reference("?"))
        .collect()
}
