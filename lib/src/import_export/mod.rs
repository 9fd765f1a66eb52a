pub mod csv;
pub mod export;
pub mod import;

// Re-export main functions for convenience
pub use export::{export_links, export_links_at, ExportFormat, ExportPayload, LinkExporter};
pub use import::{
    import_candidates, import_content, import_file, read_file, CsvParser, HtmlBookmarkParser,
    ImportFormat, ImportReport, JsonParser, LinkParser, PastedUrlParser, TextParser,
};
