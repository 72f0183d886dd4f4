//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aligntab")]
#[command(version, about = "Render delimited text as a column-aligned table", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log re-alignment activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a small sample table
    Demo,

    /// Align delimited text from a file or stdin
    Render(RenderArgs),

    /// aligntab.toml management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Input file (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Read defaults from this aligntab.toml
    #[arg(long, env = "ALIGNTAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Field separator (default: tab)
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Number of columns (default: field count of the first line)
    #[arg(short, long)]
    pub columns: Option<usize>,

    /// Spaces between columns
    #[arg(short, long)]
    pub spacing: Option<usize>,

    /// Line printed above the table
    #[arg(long)]
    pub header: Option<String>,

    /// Text printed after the last row
    #[arg(long)]
    pub footer: Option<String>,

    /// Treat the first line as column names and underline it
    #[arg(short, long)]
    pub label: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default aligntab.toml
    Init {
        /// Target path (default: ./aligntab.toml)
        path: Option<PathBuf>,

        /// Number of columns to write into the file
        #[arg(short, long, default_value_t = 2)]
        columns: usize,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the config that `render` would use
    Show {
        /// Config path (default: ./aligntab.toml)
        path: Option<PathBuf>,
    },
}
