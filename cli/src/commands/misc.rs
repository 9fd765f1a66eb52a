use super::helpers::{report_save_failure, resolve_id};
use super::{AppContext, VaultCommand};
use linkvault::browser;
use linkvault::error::{LinkVaultError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteCommand {
    pub id: String,
}

impl VaultCommand for FavoriteCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let id = resolve_id(ctx.store, &self.id)?;
        if ctx.store.toggle_favorite(&id)? {
            eprintln!("Added to favorites!");
        } else {
            eprintln!("Removed from favorites");
        }
        report_save_failure(ctx.store);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenCommand {
    pub id: String,
}

impl VaultCommand for OpenCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let id = resolve_id(ctx.store, &self.id)?;
        let link = ctx
            .store
            .get(&id)
            .ok_or_else(|| LinkVaultError::LinkNotFound(id.clone()))?;

        eprintln!("Opening: {}", link.url);
        browser::open_link_safely(&link.url)
    }
}
