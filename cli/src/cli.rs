use crate::commands::{add, delete, import_export, list, misc, CommandEnum};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Organize, search, import and export your links", long_about = None)]
pub struct Cli {
    /// Optional custom storage file path
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug")]
    pub debug: bool,

    /// Search keywords (when no subcommand is provided)
    #[arg(value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new link
    Add {
        /// URL to save (must start with http:// or https://)
        url: String,

        /// Link title (defaults to the host name)
        #[arg(short, long)]
        title: Option<String>,

        /// learning, work or personal (synonyms like "study" or "job" are accepted)
        #[arg(short, long)]
        category: Option<String>,

        /// Notes or description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Edit an existing link
    Edit {
        /// Link ID or unique ID prefix
        id: String,

        /// New URL
        #[arg(long)]
        url: Option<String>,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a link
    Delete {
        /// Link ID or unique ID prefix
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Toggle the favorite flag of a link
    Favorite {
        /// Link ID or unique ID prefix
        id: String,
    },

    /// List links, optionally filtered by tab and search text
    List {
        /// all, favorites, learning, work or personal
        #[arg(short, long, default_value = "all")]
        view: String,

        /// Show at most N links (newest first)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Search in title, URL and description
        keywords: Vec<String>,
    },

    /// Show link counts
    Stats,

    /// Open a link in the browser
    Open {
        /// Link ID or unique ID prefix
        id: String,
    },

    /// Import links from a file
    Import {
        /// File path to import from
        file: PathBuf,

        /// bookmarks (HTML), json, csv, text or auto (by extension)
        #[arg(short, long, default_value = "auto")]
        format: String,
    },

    /// Import pasted URLs, one per line (reads stdin when no file is given)
    Paste {
        /// File containing the pasted text
        file: Option<PathBuf>,

        /// Category applied to every imported link
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Export all links
    Export {
        /// json, csv, text or html
        format: String,

        /// Directory to write the export into
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

impl Cli {
    /// Map parsed arguments onto a command
    pub fn into_command(self) -> CommandEnum {
        match self.command {
            Some(Commands::Add {
                url,
                title,
                category,
                description,
            }) => CommandEnum::Add(add::AddCommand {
                url,
                title,
                category,
                description,
            }),
            Some(Commands::Edit {
                id,
                url,
                title,
                category,
                description,
            }) => CommandEnum::Edit(add::EditCommand {
                id,
                url,
                title,
                category,
                description,
            }),
            Some(Commands::Delete { id, force }) => {
                CommandEnum::Delete(delete::DeleteCommand { id, force })
            }
            Some(Commands::Favorite { id }) => {
                CommandEnum::Favorite(misc::FavoriteCommand { id })
            }
            Some(Commands::List {
                view,
                limit,
                keywords,
            }) => CommandEnum::List(list::ListCommand {
                view,
                keywords,
                limit,
            }),
            Some(Commands::Stats) => CommandEnum::Stats(list::StatsCommand),
            Some(Commands::Open { id }) => CommandEnum::Open(misc::OpenCommand { id }),
            Some(Commands::Import { file, format }) => {
                CommandEnum::Import(import_export::ImportCommand {
                    file,
                    format: Some(format),
                })
            }
            Some(Commands::Paste { file, category }) => {
                CommandEnum::Paste(import_export::PasteCommand { file, category })
            }
            Some(Commands::Export { format, dir }) => {
                CommandEnum::Export(import_export::ExportCommand { format, dir })
            }
            None => CommandEnum::List(list::ListCommand {
                view: "all".to_string(),
                keywords: self.keywords,
                limit: None,
            }),
        }
    }
}
