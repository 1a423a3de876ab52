pub mod export;
pub mod generate;
pub mod history;
pub mod validate;

use std::path::PathBuf;

use aliasguard_common::config::{Config, Storage};
use aliasguard_common::method::AliasMethod;
use aliasguard_common::store::KeyValueStore;
use aliasguard_core::History;
use aliasguard_core::store::{FileStore, MemoryStore};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

pub const DEFAULT_EXPORT_FILE: &str = "aliasguard_history.csv";

#[derive(Parser)]
#[command(name = "aliasguard")]
#[command(about = "Generate and keep track of Gmail aliases.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat (-qq) to print bare aliases only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Directory the alias history is stored in
    #[arg(long, env = "ALIASGUARD_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep the history in memory only; overrides --data-dir
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive aliases from a Gmail address
    #[command(alias = "g")]
    Generate {
        address: String,
        /// Derivation method: plus, dot or random
        #[arg(short, long, default_value = "plus")]
        method: AliasMethod,
        /// Tag appended after '+' (plus method)
        #[arg(short, long, default_value = "")]
        tag: String,
        /// How many aliases to produce (dot and random methods, 1-50)
        #[arg(short, long, default_value_t = 5)]
        count: usize,
        /// Store every generated alias in the history
        #[arg(short, long)]
        save: bool,
    },
    /// Check whether an address is a valid Gmail address
    #[command(alias = "v")]
    Validate { address: String },
    /// List saved aliases, newest first
    #[command(alias = "h")]
    History,
    /// Store an alias in the history
    Save { alias: String },
    /// Delete an alias from the history
    #[command(alias = "rm")]
    Remove { alias: String },
    /// Delete every alias from the history
    Clear,
    /// Export the history as CSV
    #[command(alias = "e")]
    Export {
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Opens the history backing the current invocation.
pub fn open_history(cfg: &Config) -> anyhow::Result<History> {
    let store: Box<dyn KeyValueStore> = match cfg.storage()? {
        Storage::Directory(dir) => {
            debug!(dir = %dir.display(), "using file store");
            Box::new(FileStore::new(dir))
        }
        Storage::Ephemeral => {
            debug!("using in-memory store");
            Box::new(MemoryStore::new())
        }
    };
    History::load(store)
}
