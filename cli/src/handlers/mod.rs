pub mod printing;
pub mod utils;

#[cfg(test)]
mod smoke_tests;

use std::path::PathBuf;

use clap::Subcommand;
use log::warn;
use musadora_core::{
    config::{CliSettings, OutputFormat},
    library::{LibrarySummary, find_item, load_library_items},
};

use utils::resolve_library_path;

pub trait CommandHandler {
    type Output;

    fn handle<W1: std::fmt::Write, W2: std::fmt::Write>(
        &self,
        settings: &CliSettings,
        stdout: &mut W1,
        stderr: &mut W2,
    ) -> Self::Output;
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the items of a library response
    #[clap(alias = "ls")]
    List {
        /// The library response to read (defaults to `library` from the config file)
        #[clap(value_hint = clap::ValueHint::FilePath)]
        path: Option<PathBuf>,
    },
    /// Count the items of a library response by kind
    Summary {
        /// The library response to read (defaults to `library` from the config file)
        #[clap(value_hint = clap::ValueHint::FilePath)]
        path: Option<PathBuf>,
    },
    /// Get an item of a library response by its id
    Get {
        /// The id of the item
        id: String,
        /// The library response to read (defaults to `library` from the config file)
        #[clap(value_hint = clap::ValueHint::FilePath)]
        path: Option<PathBuf>,
    },
}

impl CommandHandler for Command {
    type Output = anyhow::Result<()>;

    fn handle<W1: std::fmt::Write, W2: std::fmt::Write>(
        &self,
        settings: &CliSettings,
        stdout: &mut W1,
        stderr: &mut W2,
    ) -> Self::Output {
        match self {
            Self::List { path } => {
                let path = resolve_library_path(path.as_ref(), settings)?;
                let items = load_library_items(&path)?;
                match settings.format {
                    OutputFormat::Plain => {
                        write!(stdout, "{}", printing::item_list("Items", items.as_slice())?)?;
                    }
                    OutputFormat::Json => {
                        writeln!(stdout, "{}", printing::records_json(items.as_slice())?)?;
                    }
                }
                if let Some(next) = items.next_href() {
                    writeln!(stderr, "More items are available at: {next}")?;
                }
                Ok(())
            }
            Self::Summary { path } => {
                let path = resolve_library_path(path.as_ref(), settings)?;
                let items = load_library_items(&path)?;
                let summary = LibrarySummary::from(&items);
                match settings.format {
                    OutputFormat::Plain => write!(stdout, "{}", printing::summary(&summary)?)?,
                    OutputFormat::Json => {
                        writeln!(stdout, "{}", serde_json::to_string_pretty(&summary)?)?;
                    }
                }
                Ok(())
            }
            Self::Get { id, path } => {
                let path = resolve_library_path(path.as_ref(), settings)?;
                let items = load_library_items(&path)?;
                match (find_item(&items, id), settings.format) {
                    (Some(item), OutputFormat::Plain) => {
                        write!(stdout, "{}", printing::item_detail(item)?)?;
                    }
                    (Some(item), OutputFormat::Json) => {
                        let record = printing::record_json(item)?;
                        writeln!(stdout, "{}", serde_json::to_string_pretty(&record)?)?;
                    }
                    (None, _) => {
                        warn!("{} has no item with id {id}", path.display());
                        writeln!(stderr, "No item with id \"{id}\"")?;
                    }
                }
                Ok(())
            }
        }
    }
}
