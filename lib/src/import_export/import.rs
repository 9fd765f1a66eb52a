use super::csv;
use crate::error::{LinkVaultError, Result};
use crate::models::{CandidateLink, Category, Link};
use crate::store::LinkStore;
use crate::utils::unescape_html;
use crate::validate::{extract_title_from_url, is_valid_link};
use chrono::Utc;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// Trait for turning raw text of some format into candidate links.
///
/// Parsers never fail: malformed entries are skipped and an unreadable
/// document yields an empty list.
pub trait LinkParser {
    fn parse(&self, content: &str) -> Vec<CandidateLink>;

    /// Human-readable name of the source, used in import messages
    fn source_name(&self) -> &'static str;
}

/// HTML/Netscape Bookmark File parser
pub struct HtmlBookmarkParser;

impl LinkParser for HtmlBookmarkParser {
    fn parse(&self, content: &str) -> Vec<CandidateLink> {
        let dom = match tl::parse(content, tl::ParserOptions::default()) {
            Ok(dom) => dom,
            Err(e) => {
                log::debug!("Error parsing bookmark HTML: {}", e);
                return Vec::new();
            }
        };
        let parser = dom.parser();
        let mut links = Vec::new();

        for node in dom.nodes() {
            let Some(tag) = node.as_tag() else {
                continue;
            };
            if !tag.name().as_utf8_str().eq_ignore_ascii_case("a") {
                continue;
            }

            let href = tag
                .attributes()
                .get("HREF")
                .or_else(|| tag.attributes().get("href"))
                .flatten()
                .map(|h| unescape_html(h.as_utf8_str().trim()))
                .unwrap_or_default();
            let title = unescape_html(tag.inner_text(parser).trim());

            if !href.starts_with("http") || title.is_empty() || !is_valid_link(&href) {
                log::debug!("Skipping anchor {:?}", href);
                continue;
            }

            links.push(CandidateLink {
                title,
                url: href,
                ..Default::default()
            });
        }

        links
    }

    fn source_name(&self) -> &'static str {
        "bookmarks"
    }
}

/// JSON parser: a bare array, or an object holding a `links` or `bookmarks` array
pub struct JsonParser;

impl JsonParser {
    fn string_field<'a>(item: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
        keys.iter()
            .filter_map(|k| item.get(*k).and_then(Value::as_str))
            .map(str::trim)
            .find(|s| !s.is_empty())
    }

    fn candidate(item: &Map<String, Value>) -> Option<CandidateLink> {
        let url = Self::string_field(item, &["url", "link", "href"])?;
        if !is_valid_link(url) {
            return None;
        }

        let title = Self::string_field(item, &["title", "name"])
            .map(str::to_string)
            .unwrap_or_else(|| extract_title_from_url(url));
        let category = Self::string_field(item, &["category", "type"])
            .map(Category::normalize)
            .unwrap_or_default();
        let description = Self::string_field(item, &["description", "desc"])
            .unwrap_or_default()
            .to_string();
        let favorite = item.get("favorite").and_then(Value::as_bool) == Some(true);

        Some(CandidateLink {
            title,
            url: url.to_string(),
            category,
            description,
            favorite,
        })
    }
}

impl LinkParser for JsonParser {
    fn parse(&self, content: &str) -> Vec<CandidateLink> {
        let data: Value = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(e) => {
                log::debug!("Error parsing JSON: {}", e);
                return Vec::new();
            }
        };

        let items = match &data {
            Value::Array(items) => items.as_slice(),
            Value::Object(obj) => ["links", "bookmarks"]
                .iter()
                .find_map(|k| obj.get(*k).and_then(Value::as_array))
                .map(Vec::as_slice)
                .unwrap_or_default(),
            _ => &[],
        };

        items
            .iter()
            .filter_map(Value::as_object)
            .filter_map(Self::candidate)
            .collect()
    }

    fn source_name(&self) -> &'static str {
        "JSON"
    }
}

/// CSV parser with an optional header row and heuristic column detection
pub struct CsvParser;

impl CsvParser {
    fn is_header(line: &str) -> bool {
        let lower = line.to_lowercase();
        lower.contains("title") || lower.contains("url") || lower.contains("link")
    }

    /// Classify the fields of one row. Column order is not fixed, so this is best-effort.
    fn candidate(fields: Vec<String>) -> Option<CandidateLink> {
        let mut url: Option<String> = None;
        let mut category: Option<Category> = None;
        let mut title: Option<String> = None;
        let mut description: Option<String> = None;

        for field in fields {
            if is_valid_link(&field) {
                if url.is_none() {
                    url = Some(field);
                }
            } else if let Some(c) = Category::from_name(&field) {
                category.get_or_insert(c);
            } else if title.is_none() {
                if !field.is_empty() {
                    title = Some(field);
                }
            } else if description.is_none() {
                description = Some(field);
            }
        }

        let url = url?;
        Some(CandidateLink {
            title: title.unwrap_or_else(|| extract_title_from_url(&url)),
            url,
            category: category.unwrap_or_default(),
            description: description.unwrap_or_default(),
            favorite: false,
        })
    }
}

impl LinkParser for CsvParser {
    fn parse(&self, content: &str) -> Vec<CandidateLink> {
        let rows = csv::records(content);
        let skip = rows.first().is_some_and(|first| Self::is_header(first)) as usize;

        rows.iter()
            .skip(skip)
            .map(|row| csv::split_line(row))
            .filter_map(Self::candidate)
            .collect()
    }

    fn source_name(&self) -> &'static str {
        "CSV"
    }
}

/// One URL per line; anything that does not validate is dropped
pub struct TextParser;

impl LinkParser for TextParser {
    fn parse(&self, content: &str) -> Vec<CandidateLink> {
        csv::non_blank_lines(content)
            .map(str::trim)
            .filter(|line| is_valid_link(line))
            .map(|url| CandidateLink::from_url(url, Category::Personal))
            .collect()
    }

    fn source_name(&self) -> &'static str {
        "text file"
    }
}

/// Freeform pasted URLs. Lines without a scheme get `https://`; every link
/// gets the same category.
pub struct PastedUrlParser {
    pub category: Category,
}

impl PastedUrlParser {
    pub fn new(category: Category) -> Self {
        Self { category }
    }

    fn with_scheme(line: &str) -> String {
        if line.starts_with("http://") || line.starts_with("https://") {
            line.to_string()
        } else {
            format!("https://{}", line)
        }
    }
}

impl LinkParser for PastedUrlParser {
    fn parse(&self, content: &str) -> Vec<CandidateLink> {
        csv::non_blank_lines(content)
            .map(|line| Self::with_scheme(line.trim()))
            .filter(|url| is_valid_link(url))
            .map(|url| CandidateLink::from_url(&url, self.category))
            .collect()
    }

    fn source_name(&self) -> &'static str {
        "pasted URLs"
    }
}

/// File formats accepted for import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Bookmarks,
    Json,
    Csv,
    Text,
}

impl ImportFormat {
    /// Pick a format from the file extension; unknown extensions are read as text
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "html" | "htm" => ImportFormat::Bookmarks,
            "json" => ImportFormat::Json,
            "csv" => ImportFormat::Csv,
            _ => ImportFormat::Text,
        }
    }

    pub fn parser(self) -> Box<dyn LinkParser> {
        match self {
            ImportFormat::Bookmarks => Box::new(HtmlBookmarkParser),
            ImportFormat::Json => Box::new(JsonParser),
            ImportFormat::Csv => Box::new(CsvParser),
            ImportFormat::Text => Box::new(TextParser),
        }
    }
}

impl FromStr for ImportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bookmarks" | "html" | "htm" => Ok(ImportFormat::Bookmarks),
            "json" => Ok(ImportFormat::Json),
            "csv" => Ok(ImportFormat::Csv),
            "text" | "txt" => Ok(ImportFormat::Text),
            _ => Err(format!("Unsupported import format: {}", s)),
        }
    }
}

/// Outcome of one import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub source: String,
    /// Candidates the parser produced
    pub parsed: usize,
    /// Candidates that survived deduplication and were stored
    pub imported: usize,
}

impl ImportReport {
    pub fn message(&self) -> String {
        if self.parsed == 0 {
            format!("No valid links found in {}.", self.source)
        } else if self.imported == 0 {
            "No new links to import (duplicates skipped).".to_string()
        } else {
            format!(
                "Successfully imported {} link(s) from {}!",
                self.imported, self.source
            )
        }
    }
}

/// Merge candidates into the store, skipping URLs already present
/// (case-insensitive), including repeats within `candidates`.
///
/// Survivors are prepended in order, so the last candidate ends up first.
/// Does not persist; returns the number added.
pub fn import_candidates(store: &mut LinkStore, candidates: Vec<CandidateLink>) -> usize {
    let mut seen: HashSet<String> = store.links().iter().map(|l| l.url.to_lowercase()).collect();
    let now = Utc::now();
    let mut imported = 0;

    for candidate in candidates {
        if !seen.insert(candidate.url.to_lowercase()) {
            continue;
        }
        store.prepend(Link::from_candidate(candidate, now));
        imported += 1;
    }

    imported
}

/// Parse `content` and merge the result, persisting when anything was added
pub fn import_content(store: &mut LinkStore, parser: &dyn LinkParser, content: &str) -> ImportReport {
    let candidates = parser.parse(content);
    let parsed = candidates.len();
    let imported = import_candidates(store, candidates);
    log::debug!(
        "Import from {}: {} parsed, {} new",
        parser.source_name(),
        parsed,
        imported
    );

    if imported > 0 {
        store.persist();
    }

    ImportReport {
        source: parser.source_name().to_string(),
        parsed,
        imported,
    }
}

/// Read a whole file and import it with the given format
pub fn import_file(store: &mut LinkStore, path: &Path, format: ImportFormat) -> Result<ImportReport> {
    let content = read_file(path)?;
    Ok(import_content(store, format.parser().as_ref(), &content))
}

/// Read a whole file, naming it in the error
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        log::debug!("Error reading {}: {}", path.display(), source);
        LinkVaultError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    })
}
