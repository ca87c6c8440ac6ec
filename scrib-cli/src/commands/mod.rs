use std::path::PathBuf;

use crate::app;

use scrib::ast::{Biblio, RecordKind};

use clap::Subcommand;
use log::trace;

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Import records from a delimited text file into the bibliography
    ///
    /// Each non-blank line of the file holds `year;author;title` values and
    /// becomes a techreport entry.
    #[clap(arg_required_else_help = true)]
    Import {
        /// Path of the delimited text file to import
        #[clap(parse(from_os_str))]
        path: PathBuf,
    },

    /// Add a new entry manually
    ///
    /// Prompts for the primary fields of the entry kind.
    #[clap(arg_required_else_help = true)]
    New {
        /// The kind of the entry to add
        ///
        /// The following are known entry kinds:
        ///
        /// - article
        ///
        /// - book
        ///
        /// - booklet
        ///
        /// - inbook
        ///
        /// - incollection
        ///
        /// - inproceedings
        ///
        /// - manual
        ///
        /// - mastersthesis
        ///
        /// - phdthesis
        ///
        /// - proceedings
        ///
        /// - techreport
        ///
        /// - unpublished
        ///
        /// Any other kind is accepted as a custom entry with no primary
        /// fields.
        #[clap(parse(from_str))]
        kind: RecordKind<'static>,
        /// Cite to use for new entry
        cite: Option<String>,
    },

    /// Remove an entry from the bibliography file using the cite key
    #[clap(arg_required_else_help = true)]
    Rm {
        /// The cite key of the entry to remove
        cite: String,
    },

    /// Check that every entry will serialize cleanly
    ///
    /// Prints a warning for each field that the canonical output would omit,
    /// such as a non-numeric issue number or a cite key starting with a
    /// digit. The bibliography file is not modified.
    Check,
}

impl Commands {
    pub fn execute(self, biblio: &mut Biblio) -> Result<String, Box<dyn std::error::Error>> {
        match self {
            Commands::Import { path } => {
                let message = app::import_file(biblio, &path)?;
                Ok(message)
            }
            Commands::New { kind, cite } => {
                let message = app::new_record(biblio, kind, cite)?;
                Ok(message)
            }
            Commands::Rm { cite } => {
                trace!("Checking current bibliography for an entry with this cite key..");
                if biblio.remove(&cite) {
                    Ok("Entry removed from bibliography".to_owned())
                } else {
                    Ok(format!("No entry found with the cite key of '{cite}'"))
                }
            }
            Commands::Check => Ok(app::check_report(biblio)),
        }
    }
}
