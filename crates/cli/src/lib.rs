mod locate;
mod resolve;
mod rows;
mod schema;
mod tree;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unl_core::UnlConfig;

#[derive(Parser)]
#[command(
    name = "unl",
    version,
    about = "Uniform Node Locators for outline files",
    long_about = "Renders headline-path locators (A-->B-->C) for outline nodes and follows \
                  locator links, including links into other outline files of the form \
                  file:<path>#A-->B."
)]
pub struct Cli {
    /// Configuration file (defaults to ~/.unl/config.json when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the locator of a node
    #[command(
        long_about = "Selects the node with the given gnx and prints the locator a status \
                            line would show for it."
    )]
    Locate {
        /// Outline document (JSON)
        #[arg(value_name = "OUTLINE")]
        outline: PathBuf,
        /// gnx of the node to select
        #[arg(value_name = "GNX")]
        gnx: String,
    },
    /// Follow a link from inside an outline
    #[command(
        long_about = "Follows a link payload the way activating it in the outline would: \
                            bare locators resolve in OUTLINE, file:<path>#locator links open \
                            the other outline first, other URLs are only reported."
    )]
    Resolve {
        /// Outline document (JSON) the link lives in
        #[arg(value_name = "OUTLINE")]
        outline: PathBuf,
        /// Link payload, e.g. "Users Guide-->Chapter 8"
        #[arg(value_name = "LINK")]
        link: String,
        /// Directory for relative outline paths (defaults to OUTLINE's directory)
        #[arg(long, value_name = "DIR")]
        base_dir: Option<PathBuf>,
    },
    /// Print the list-model projection of an outline
    Rows {
        #[arg(value_name = "OUTLINE")]
        outline: PathBuf,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print an outline as an indented tree
    Tree {
        #[arg(value_name = "OUTLINE")]
        outline: PathBuf,
    },
    /// Print the JSON Schema of outline documents
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = UnlConfig::discover(cli.config.as_deref())?;
    let _guard = unl_core::logging::init_logging("cli", &config.log_dir(), cli.verbose);

    match cli.command {
        Commands::Locate { outline, gnx } => locate::run(&config, outline, gnx),
        Commands::Resolve {
            outline,
            link,
            base_dir,
        } => resolve::run(&config, outline, link, base_dir),
        Commands::Rows { outline, json } => rows::run(outline, json),
        Commands::Tree { outline } => tree::run(outline),
        Commands::Schema => schema::run(),
    }
}
