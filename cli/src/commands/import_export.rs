use super::helpers::report_save_failure;
use super::{AppContext, VaultCommand};
use linkvault::error::{LinkVaultError, Result};
use linkvault::import_export::{self, ExportFormat, ImportFormat, ImportReport, PastedUrlParser};
use linkvault::models::Category;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::PathBuf;

fn finish_import(ctx: &AppContext, report: &ImportReport) {
    eprintln!("{}", report.message());
    if report.imported > 0 {
        report_save_failure(&*ctx.store);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportCommand {
    pub file: PathBuf,
    /// Detected from the file extension when absent
    pub format: Option<String>,
}

impl ImportCommand {
    fn resolve_format(&self) -> Result<ImportFormat> {
        match self.format.as_deref() {
            None | Some("auto") => Ok(ImportFormat::from_path(&self.file)),
            Some(f) => f.parse().map_err(LinkVaultError::InvalidInput),
        }
    }
}

impl VaultCommand for ImportCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let format = self.resolve_format()?;
        log::debug!("Importing {} as {:?}", self.file.display(), format);
        let report = import_export::import_file(ctx.store, &self.file, format)?;
        finish_import(ctx, &report);
        Ok(())
    }
}

/// Import freeform pasted URLs from a file or stdin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasteCommand {
    pub file: Option<PathBuf>,
    pub category: Option<String>,
}

impl VaultCommand for PasteCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let content = match &self.file {
            Some(path) => import_export::read_file(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        if content.trim().is_empty() {
            eprintln!("Please enter at least one URL");
            return Ok(());
        }

        let category = self
            .category
            .as_deref()
            .map(Category::normalize)
            .unwrap_or(ctx.config.default_category);
        let parser = PastedUrlParser::new(category);
        let report = import_export::import_content(ctx.store, &parser, &content);
        finish_import(ctx, &report);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportCommand {
    pub format: String,
    pub dir: Option<PathBuf>,
}

impl VaultCommand for ExportCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let format: ExportFormat = self.format.parse().map_err(LinkVaultError::InvalidInput)?;

        let payload = match import_export::export_links(ctx.store.links(), format) {
            Ok(payload) => payload,
            Err(LinkVaultError::NothingToExport) => {
                eprintln!("No links to export.");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let dir = self
            .dir
            .clone()
            .unwrap_or_else(|| ctx.config.export_dir());
        let path = payload.write_to(&dir)?;
        eprintln!(
            "Exported {} links as {} to {}",
            ctx.store.len(),
            payload.mime_type,
            path.display()
        );
        Ok(())
    }
}
