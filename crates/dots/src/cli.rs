use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::grid::GridSpec;

#[derive(Parser)]
#[command(name = "dots")]
#[command(author, version, about)]
#[command(long_about = "Connect the dots: draw colored edges on a dot lattice.\n\n\
    Each line of an edge list reads `x1,y1 x2,y2 color`.\n\n\
    Examples:\n  \
    dots                          Open an empty canvas\n  \
    dots edges.txt --size 10      Open with edges preloaded on a 10x10 grid\n  \
    dots check edges.txt          Validate an edge list\n  \
    dots export edges.txt -o a.png  Render an edge list to PNG")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Edge list to load into the editor
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Grid size (1-100)
    #[arg(long, global = false)]
    pub size: Option<GridSpec>,

    /// Image drawn behind the lattice
    #[arg(long, global = false)]
    pub background: Option<PathBuf>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse and validate an edge list without drawing it
    Check {
        /// Edge list file
        file: PathBuf,

        /// Grid size (1-100)
        #[arg(long)]
        size: Option<GridSpec>,

        /// Print the parse result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render an edge list to a PNG image
    Export {
        /// Edge list file
        file: PathBuf,

        /// Output PNG path
        #[arg(short, long, default_value = "dots.png")]
        output: PathBuf,

        /// Grid size (1-100)
        #[arg(long)]
        size: Option<GridSpec>,

        /// Image drawn behind the lattice
        #[arg(long)]
        background: Option<PathBuf>,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (defaults.grid_size, defaults.theme, defaults.background)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Check { file, size, json }) => {
                crate::commands::check::run(&file, size, json, self.quiet)
            }
            Some(Commands::Export {
                file,
                output,
                size,
                background,
            }) => crate::commands::export::run(&file, output, size, background),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                println!("dots {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => {
                let text = match &self.file {
                    Some(file) => read_edge_list(file)?,
                    None => String::new(),
                };
                crate::app::run(text, self.size, self.background)
            }
        }
    }
}

pub fn read_edge_list(file: &std::path::Path) -> anyhow::Result<String> {
    if !file.exists() {
        anyhow::bail!("File not found: {}", file.display());
    }
    std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", file.display()))
}
