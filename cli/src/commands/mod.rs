use linkvault::config::Config;
use linkvault::error::Result;
use linkvault::LinkStore;

pub struct AppContext<'a> {
    pub store: &'a mut LinkStore,
    pub config: &'a Config,
    pub no_color: bool,
}

pub mod add;
pub mod delete;
pub mod helpers;
pub mod import_export;
pub mod list;
pub mod misc;

pub trait VaultCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn VaultCommand>)
pub enum CommandEnum {
    Add(add::AddCommand),
    Edit(add::EditCommand),
    Delete(delete::DeleteCommand),
    Favorite(misc::FavoriteCommand),
    List(list::ListCommand),
    Stats(list::StatsCommand),
    Open(misc::OpenCommand),
    Import(import_export::ImportCommand),
    Paste(import_export::PasteCommand),
    Export(import_export::ExportCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        match self {
            Self::Add(cmd) => cmd.execute(ctx),
            Self::Edit(cmd) => cmd.execute(ctx),
            Self::Delete(cmd) => cmd.execute(ctx),
            Self::Favorite(cmd) => cmd.execute(ctx),
            Self::List(cmd) => cmd.execute(ctx),
            Self::Stats(cmd) => cmd.execute(ctx),
            Self::Open(cmd) => cmd.execute(ctx),
            Self::Import(cmd) => cmd.execute(ctx),
            Self::Paste(cmd) => cmd.execute(ctx),
            Self::Export(cmd) => cmd.execute(ctx),
        }
    }
}
