use super::helpers::{report_save_failure, resolve_id};
use super::{AppContext, VaultCommand};
use linkvault::error::{LinkVaultError, Result};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCommand {
    pub id: String,
    pub force: bool,
}

impl DeleteCommand {
    fn confirm(&self, title: &str, url: &str) -> Result<bool> {
        print!("Delete \"{}\" ({})? [y/N]: ", title, url);
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().lock().read_line(&mut response)?;
        Ok(is_yes(&response))
    }
}

fn is_yes(response: &str) -> bool {
    let response = response.trim().to_lowercase();
    response == "y" || response == "yes"
}

impl VaultCommand for DeleteCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let id = resolve_id(ctx.store, &self.id)?;
        let link = ctx
            .store
            .get(&id)
            .ok_or_else(|| LinkVaultError::LinkNotFound(id.clone()))?;

        if !self.force && !self.confirm(&link.title, &link.url)? {
            eprintln!("Deletion cancelled.");
            return Ok(());
        }

        let removed = ctx.store.delete_link(&id)?;
        eprintln!("Link deleted successfully! ({})", removed.title);
        report_save_failure(ctx.store);
        Ok(())
    }
}
