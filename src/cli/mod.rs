pub mod backup;
pub mod browse;
pub mod entry;
pub mod export;
pub mod init;
pub mod load;
pub mod options;
pub mod records;
pub mod status;

use clap::{Args, Parser, Subcommand};
use rusqlite::Connection;

use crate::db::get_connection;
use crate::error::Result;
use crate::models::{FormData, OptionCategory};
use crate::search::SearchQuery;
use crate::settings::db_path;

pub(crate) fn open_db() -> Result<Connection> {
    get_connection(&db_path()?)
}

#[derive(Parser)]
#[command(
    name = "mqbill",
    version,
    about = "Log music-licensing billing entries and track payment and invoice status."
)]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a data directory and initialize the database.
    Init {
        /// Path for data (default: ~/Documents/mqbill)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Switch to an existing data directory.
    Load {
        /// Path to data directory containing mqbill.db
        path: String,
    },
    /// Submit a billing record.
    Add(AddArgs),
    /// Fill in records interactively with type-ahead suggestions.
    Entry,
    /// Print records, optionally filtered.
    List(SearchArgs),
    /// Interactively browse, search and update records.
    Browse(SearchArgs),
    /// Toggle a record's paid status.
    Paid {
        /// Record ID (shown in `mqbill list`)
        id: i64,
    },
    /// Toggle a record's invoiced status.
    Invoiced {
        /// Record ID (shown in `mqbill list`)
        id: i64,
    },
    /// Delete a record.
    Delete {
        /// Record ID (shown in `mqbill list`)
        id: i64,
    },
    /// Copy a record's text to the clipboard.
    Copy {
        /// Record ID (shown in `mqbill list`)
        id: i64,
        /// Copy the QuickBooks line instead of the summary
        #[arg(long, short = 'b')]
        quickbooks: bool,
    },
    /// Manage autocomplete suggestions.
    Options {
        #[command(subcommand)]
        command: OptionsCommands,
    },
    /// Write records to a CSV file.
    Export {
        #[command(flatten)]
        search: SearchArgs,
        /// Output path (default: <data_dir>/exports/records-YYYY-MM-DD.csv)
        #[arg(long)]
        output: Option<String>,
    },
    /// Back up the database.
    Backup {
        /// Output path (default: <data_dir>/backups/mqbill-YYYYMMDD-HHMMSS.db)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the current data directory and record counts.
    Status,
    /// Print a shell completion script.
    Completions {
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Date: YYYY-MM-DD (required to submit)
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub station: Option<String>,
    #[arg(long)]
    pub amount: Option<String>,
    #[arg(long)]
    pub prefix: Option<String>,
    #[arg(long)]
    pub suffix: Option<String>,
    #[arg(long)]
    pub artist: Option<String>,
    #[arg(long)]
    pub song: Option<String>,
    #[arg(long)]
    pub label1: Option<String>,
    #[arg(long)]
    pub label2: Option<String>,
    #[arg(long)]
    pub contact1: Option<String>,
    #[arg(long)]
    pub contact2: Option<String>,
    /// Special instructions
    #[arg(long)]
    pub instructions: Option<String>,
}

impl AddArgs {
    pub fn into_form(self) -> FormData {
        FormData {
            station: self.station.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            amount: self.amount.unwrap_or_default(),
            prefix: self.prefix.unwrap_or_default(),
            suffix: self.suffix.unwrap_or_default(),
            artist: self.artist.unwrap_or_default(),
            song: self.song.unwrap_or_default(),
            label1: self.label1.unwrap_or_default(),
            label2: self.label2.unwrap_or_default(),
            contact1: self.contact1.unwrap_or_default(),
            contact2: self.contact2.unwrap_or_default(),
            special_instructions: self.instructions.unwrap_or_default(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Exact date: YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// Case-insensitive text to look for in the record summary
    #[arg(long, short = 'k')]
    pub keyword: Option<String>,
}

impl SearchArgs {
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(self.date.as_deref(), self.keyword.as_deref())
    }
}

#[derive(Subcommand)]
pub enum OptionsCommands {
    /// List suggestions, for one category or all.
    List {
        category: Option<OptionCategory>,
    },
    /// Add a suggestion.
    Add {
        category: OptionCategory,
        value: String,
    },
    /// Remove a suggestion.
    Remove {
        category: OptionCategory,
        value: String,
    },
    /// Restore the built-in suggestion lists.
    Reset,
}
