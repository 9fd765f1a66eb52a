use super::csv::quote_field;
use crate::error::{LinkVaultError, Result};
use crate::models::{Category, Link};
use crate::utils::escape_html;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Trait for rendering the collection in an external format
pub trait LinkExporter {
    fn render(&self, links: &[Link], now: DateTime<Utc>) -> Result<String>;
    fn file_prefix(&self) -> &'static str {
        "linkvault-export"
    }
    fn extension(&self) -> &'static str;
    fn mime_type(&self) -> &'static str;
}

/// A rendered export ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub content: String,
    pub filename: String,
    pub mime_type: &'static str,
}

impl ExportPayload {
    /// Write the payload to `dir/filename`, returning the full path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::create_dir_all(dir)
            .and_then(|_| std::fs::write(&path, &self.content))
            .map_err(|source| {
                log::debug!("Error writing {}: {}", path.display(), source);
                LinkVaultError::FileWrite {
                    path: path.clone(),
                    source,
                }
            })?;
        Ok(path)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    export_date: DateTime<Utc>,
    total_links: usize,
    links: Vec<JsonExportLink<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExportLink<'a> {
    title: &'a str,
    url: &'a str,
    category: Category,
    description: &'a str,
    created_at: DateTime<Utc>,
    favorite: bool,
}

pub struct JsonExporter;

impl LinkExporter for JsonExporter {
    fn render(&self, links: &[Link], now: DateTime<Utc>) -> Result<String> {
        let export = JsonExport {
            export_date: now,
            total_links: links.len(),
            links: links
                .iter()
                .map(|l| JsonExportLink {
                    title: &l.title,
                    url: &l.url,
                    category: l.category,
                    description: &l.description,
                    created_at: l.created_at,
                    favorite: l.favorite,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }
}

pub struct CsvExporter;

impl LinkExporter for CsvExporter {
    fn render(&self, links: &[Link], _now: DateTime<Utc>) -> Result<String> {
        let mut out = String::from("Title,URL,Category,Description,Created At\n");
        for link in links {
            let row = [
                quote_field(&link.title),
                quote_field(&link.url),
                quote_field(link.category.as_str()),
                quote_field(&link.description),
                quote_field(&link.created_at.to_rfc3339()),
            ];
            out.push_str(&row.join(","));
            out.push('\n');
        }
        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn mime_type(&self) -> &'static str {
        "text/csv"
    }
}

/// Links of one category in store order
fn in_category(links: &[Link], category: Category) -> impl Iterator<Item = &Link> {
    links.iter().filter(move |l| l.category == category)
}

/// Human-readable report grouped by category
pub struct TextExporter;

impl LinkExporter for TextExporter {
    fn render(&self, links: &[Link], now: DateTime<Utc>) -> Result<String> {
        let mut out = String::new();
        let local_date = now.with_timezone(&Local).format("%-m/%-d/%Y");
        writeln!(out, "LinkVault Export - {}", local_date).ok();
        writeln!(out, "Total Links: {}", links.len()).ok();
        writeln!(out, "{}\n", "=".repeat(50)).ok();

        for category in Category::ALL {
            let mut group = in_category(links, category).peekable();
            if group.peek().is_none() {
                continue;
            }

            writeln!(out, "[{}]", category.as_str().to_uppercase()).ok();
            writeln!(out, "{}", "-".repeat(30)).ok();
            for link in group {
                writeln!(out, "{}", link.title).ok();
                writeln!(out, "  URL: {}", link.url).ok();
                if !link.description.is_empty() {
                    writeln!(out, "  Description: {}", link.description).ok();
                }
                out.push('\n');
            }
            out.push('\n');
        }

        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }
}

/// HTML/Netscape Bookmark File exporter, one folder per category
pub struct HtmlExporter;

impl LinkExporter for HtmlExporter {
    fn render(&self, links: &[Link], _now: DateTime<Utc>) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "<!DOCTYPE NETSCAPE-Bookmark-file-1>").ok();
        writeln!(out, "<!-- This is an automatically generated file.").ok();
        writeln!(out, "     It will be read and overwritten.").ok();
        writeln!(out, "     DO NOT EDIT! -->").ok();
        writeln!(
            out,
            "<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">"
        )
        .ok();
        writeln!(out, "<TITLE>Bookmarks</TITLE>").ok();
        writeln!(out, "<H1>LinkVault Export</H1>").ok();
        writeln!(out, "<DL><p>").ok();

        for category in Category::ALL {
            let mut group = in_category(links, category).peekable();
            if group.peek().is_none() {
                continue;
            }

            writeln!(out, "    <DT><H3>{}</H3>", category.display_name()).ok();
            writeln!(out, "    <DL><p>").ok();
            for link in group {
                writeln!(
                    out,
                    "        <DT><A HREF=\"{}\" ADD_DATE=\"{}\">{}</A>",
                    escape_html(&link.url),
                    link.created_at.timestamp(),
                    escape_html(&link.title)
                )
                .ok();
            }
            writeln!(out, "    </DL><p>").ok();
        }

        out.push_str("</DL><p>");
        Ok(out)
    }

    fn file_prefix(&self) -> &'static str {
        "linkvault-bookmarks"
    }

    fn extension(&self) -> &'static str {
        "html"
    }

    fn mime_type(&self) -> &'static str {
        "text/html"
    }
}

/// Formats available for export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Text,
    Html,
}

impl ExportFormat {
    pub fn exporter(self) -> Box<dyn LinkExporter> {
        match self {
            ExportFormat::Json => Box::new(JsonExporter),
            ExportFormat::Csv => Box::new(CsvExporter),
            ExportFormat::Text => Box::new(TextExporter),
            ExportFormat::Html => Box::new(HtmlExporter),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "text" | "txt" => Ok(ExportFormat::Text),
            "html" | "bookmarks" => Ok(ExportFormat::Html),
            _ => Err(format!("Unsupported export format: {}", s)),
        }
    }
}

/// Render `links` at time `now`. An empty collection is [`LinkVaultError::NothingToExport`].
pub fn export_links_at(
    links: &[Link],
    format: ExportFormat,
    now: DateTime<Utc>,
) -> Result<ExportPayload> {
    if links.is_empty() {
        return Err(LinkVaultError::NothingToExport);
    }

    let exporter = format.exporter();
    Ok(ExportPayload {
        content: exporter.render(links, now)?,
        filename: format!(
            "{}-{}.{}",
            exporter.file_prefix(),
            now.format("%Y-%m-%d"),
            exporter.extension()
        ),
        mime_type: exporter.mime_type(),
    })
}

pub fn export_links(links: &[Link], format: ExportFormat) -> Result<ExportPayload> {
    export_links_at(links, format, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import_export::import::{CsvParser, LinkParser};
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        "2024-06-09T08:30:00Z".parse().unwrap()
    }

    fn link(title: &str, url: &str, category: Category, desc: &str) -> Link {
        Link {
            id: format!("id-{}", title),
            title: title.to_string(),
            url: url.to_string(),
            category,
            description: desc.to_string(),
            created_at: "2024-01-01T00:00:10Z".parse().unwrap(),
            favorite: false,
        }
    }

    fn sample() -> Vec<Link> {
        vec![
            link("Home \"sweet\" home", "https://home.example", Category::Personal, ""),
            link("Jira", "https://jira.example", Category::Work, "tickets, bugs"),
            link("Rust Book", "https://doc.rust-lang.org/book", Category::Learning, "the book"),
            link("Slack", "https://slack.example", Category::Work, ""),
        ]
    }

    #[rstest]
    #[case(ExportFormat::Json)]
    #[case(ExportFormat::Csv)]
    #[case(ExportFormat::Text)]
    #[case(ExportFormat::Html)]
    fn test_empty_collection_exports_nothing(#[case] format: ExportFormat) {
        let err = export_links_at(&[], format, now()).unwrap_err();
        assert!(matches!(err, LinkVaultError::NothingToExport));
        assert_eq!(err.to_string(), "No links to export.");
    }

    #[rstest]
    #[case(ExportFormat::Json, "linkvault-export-2024-06-09.json", "application/json")]
    #[case(ExportFormat::Csv, "linkvault-export-2024-06-09.csv", "text/csv")]
    #[case(ExportFormat::Text, "linkvault-export-2024-06-09.txt", "text/plain")]
    #[case(ExportFormat::Html, "linkvault-bookmarks-2024-06-09.html", "text/html")]
    fn test_filenames_and_mime(
        #[case] format: ExportFormat,
        #[case] filename: &str,
        #[case] mime: &str,
    ) {
        let payload = export_links_at(&sample(), format, now()).unwrap();
        assert_eq!(payload.filename, filename);
        assert_eq!(payload.mime_type, mime);
    }

    #[test]
    fn test_json_export_shape() {
        let payload = export_links_at(&sample(), ExportFormat::Json, now()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload.content).unwrap();

        assert_eq!(value["totalLinks"], 4);
        assert_eq!(value["exportDate"], "2024-06-09T08:30:00Z");
        assert_eq!(value["links"][1]["title"], "Jira");
        assert_eq!(value["links"][1]["category"], "work");
        assert_eq!(value["links"][1]["favorite"], false);
        assert!(value["links"][0].get("id").is_none());
        assert!(payload.content.contains("\n  \"links\""));
    }

    #[test]
    fn test_json_export_reimports() {
        let payload = export_links_at(&sample(), ExportFormat::Json, now()).unwrap();
        let back = crate::import_export::import::JsonParser.parse(&payload.content);
        assert_eq!(back.len(), 4);
        assert_eq!(back[2].category, Category::Learning);
    }

    #[test]
    fn test_csv_export_quoting() {
        let payload = export_links_at(&sample(), ExportFormat::Csv, now()).unwrap();
        let mut lines = payload.content.lines();
        assert_eq!(lines.next(), Some("Title,URL,Category,Description,Created At"));
        assert_eq!(
            lines.next(),
            Some(r#""Home ""sweet"" home","https://home.example","personal","","2024-01-01T00:00:10+00:00""#)
        );
    }

    #[test]
    fn test_csv_round_trip() {
        let mut links = sample();
        links.push(link(
            "Notes",
            "https://notes.example",
            Category::Personal,
            "line one\nline two, with \"quotes\"",
        ));
        let payload = export_links_at(&links, ExportFormat::Csv, now()).unwrap();
        let parsed = CsvParser.parse(&payload.content);

        let expected: Vec<_> = links
            .iter()
            .map(|l| (l.title.clone(), l.url.clone(), l.category, l.description.clone()))
            .collect();
        let actual: Vec<_> = parsed
            .into_iter()
            .map(|c| (c.title, c.url, c.category, c.description))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_text_header_uses_local_date_and_filename_uses_utc() {
        let late: DateTime<Utc> = "2024-06-09T23:59:30Z".parse().unwrap();
        let payload = export_links_at(&sample(), ExportFormat::Text, late).unwrap();

        let local = late.with_timezone(&Local).format("%-m/%-d/%Y").to_string();
        assert!(payload.content.starts_with(&format!("LinkVault Export - {}\n", local)));
        assert_eq!(payload.filename, "linkvault-export-2024-06-09.txt");
    }

    #[test]
    fn test_text_export_groups_in_fixed_order() {
        let payload = export_links_at(&sample(), ExportFormat::Text, now()).unwrap();
        let text = payload.content;

        let header = format!(
            "LinkVault Export - {}\nTotal Links: 4\n",
            now().with_timezone(&Local).format("%-m/%-d/%Y")
        );
        assert!(text.starts_with(&header));
        let learning = text.find("[LEARNING]").unwrap();
        let work = text.find("[WORK]").unwrap();
        let personal = text.find("[PERSONAL]").unwrap();
        assert!(learning < work && work < personal);

        // store order within a group
        assert!(text.find("Jira").unwrap() < text.find("Slack").unwrap());
        assert!(text.contains("  Description: tickets, bugs\n"));
        assert_eq!(text.matches("  URL: ").count(), 4);
    }

    #[test]
    fn test_text_export_omits_empty_groups() {
        let links = vec![link("Only", "https://only.example", Category::Work, "")];
        let text = export_links_at(&links, ExportFormat::Text, now()).unwrap().content;
        assert!(text.contains("[WORK]"));
        assert!(!text.contains("[LEARNING]"));
        assert!(!text.contains("[PERSONAL]"));
        assert!(!text.contains("Description:"));
    }

    #[test]
    fn test_html_export_sections() {
        let payload = export_links_at(&sample(), ExportFormat::Html, now()).unwrap();
        let html = payload.content;

        assert!(html.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>"));
        let sections: Vec<usize> = ["<H3>Learning</H3>", "<H3>Work</H3>", "<H3>Personal</H3>"]
            .iter()
            .map(|h| html.find(h).unwrap())
            .collect();
        assert!(sections.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("<DT><A ").count(), 4);
        assert!(html.contains(
            r#"<DT><A HREF="https://jira.example" ADD_DATE="1704067210">Jira</A>"#
        ));
        assert!(html.contains("Home &quot;sweet&quot; home"));
        assert!(html.ends_with("</DL><p>"));
    }

    #[test]
    fn test_html_export_reimports() {
        let payload = export_links_at(&sample(), ExportFormat::Html, now()).unwrap();
        let back = crate::import_export::import::HtmlBookmarkParser.parse(&payload.content);
        let mut titles: Vec<String> = back.into_iter().map(|c| c.title).collect();
        titles.sort();
        assert_eq!(
            titles,
            vec!["Home \"sweet\" home", "Jira", "Rust Book", "Slack"]
        );
    }

    #[test]
    fn test_write_to() {
        let temp_dir = tempfile::tempdir().unwrap();
        let payload = export_links_at(&sample(), ExportFormat::Csv, now()).unwrap();
        let path = payload.write_to(&temp_dir.path().join("out")).unwrap();
        assert_eq!(path.file_name().unwrap(), "linkvault-export-2024-06-09.csv");
        assert_eq!(std::fs::read_to_string(path).unwrap(), payload.content);
    }

    #[test]
    fn test_write_to_unwritable_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let payload = export_links_at(&sample(), ExportFormat::Json, now()).unwrap();
        let err = payload.write_to(&blocker).unwrap_err();
        assert!(matches!(err, LinkVaultError::FileWrite { .. }));
        assert!(err.to_string().starts_with("Error writing file "));
    }
}
