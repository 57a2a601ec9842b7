//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose) are inherited by all subcommands. Every
//! subcommand takes the same manifest flags, which sit on top of the config
//! file and ASSETMAP_* environment variables.

use std::path::PathBuf;

use assetmap::config::OptionOverrides;
use clap::{Args, Parser, Subcommand};

/// assetmap - asset manifest writer for bundler output
#[derive(Parser, Debug)]
#[command(name = "assetmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print a machine-readable summary (emit and clean; rejected by print)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the manifest for a finished build
    Emit(ManifestArgs),

    /// Write the manifest and remove stale files next to referenced ones
    Clean(ManifestArgs),

    /// Print the manifest to stdout without cleaning or writing
    Print(ManifestArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// Build snapshot written by the bundler (JSON)
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Config file (defaults to ./assetmap.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Manifest destination
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base directory for manifest paths (defaults to the build output directory)
    #[arg(long)]
    pub root_path: Option<PathBuf>,

    /// Remove stale files next to referenced files
    #[arg(long)]
    pub clean: bool,

    /// Omit the `assets` mapping
    #[arg(long)]
    pub no_assets: bool,

    /// Include the `auxiliaryFiles` list
    #[arg(long)]
    pub auxiliary_files: bool,

    /// Include the `dependencies` mapping
    #[arg(long)]
    pub dependencies: bool,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl ManifestArgs {
    /// Flags given on the command line; absent flags leave lower layers alone
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            assets: self.no_assets.then_some(false),
            auxiliary_files: self.auxiliary_files.then_some(true),
            clean: self.clean.then_some(true),
            dependencies: self.dependencies.then_some(true),
            output: self.output.clone(),
            root_path: self.root_path.clone(),
            pretty: self.pretty.then_some(true),
        }
    }
}
