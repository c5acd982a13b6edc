//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "grocery")]
#[command(about = "Keep grocery lists, stock and exports in sync from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to a JSON seed data file
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List grocery lists
    Lists {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the items on a list
    Items {
        /// List ID, ID prefix, or name
        list: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse the products available for a list
    Products {
        /// List ID, ID prefix, or name
        list: String,
        /// Case-insensitive name search
        #[arg(short, long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an available product to a list
    Add {
        /// List ID, ID prefix, or name
        list: String,
        /// Product ID, ID prefix, or name
        product: String,
    },
    /// Rename or recolor a list; with no flags, shows the editor target
    Recolor {
        /// List ID, ID prefix, or name
        list: String,
        /// New color as #RRGGBB
        #[arg(long, value_name = "COLOR")]
        color: Option<String>,
        /// New list name
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
    },
    /// Export a list's items as JSON
    Export {
        /// List ID, ID prefix, or name
        list: String,
        /// Optional output path (default export directory when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
