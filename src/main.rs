//! assetmap CLI - writes the asset manifest for a finished bundler build
//!
//! Usage: assetmap <COMMAND> --snapshot <FILE>
//!
//! Commands:
//!   emit   Write the manifest
//!   clean  Write the manifest and remove stale output files
//!   print  Print the manifest to stdout

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use assetmap::config::{self, ManifestOptions};
use assetmap::{AfterEmitHook, AssetsMapPlugin, EmitReport, JsonSnapshotLoader};

use cli::{Cli, Commands, ManifestArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Emit(args) => cmd_emit(args, false, cli.json),
        Commands::Clean(args) => cmd_emit(args, true, cli.json),
        Commands::Print(_) if cli.json => {
            bail!("--json is not supported by print; its output is already JSON")
        }
        Commands::Print(args) => cmd_print(args),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Merge defaults, config file, environment and flags
fn resolve_options(args: &ManifestArgs) -> Result<ManifestOptions> {
    let (options, warnings) = match &args.config {
        Some(path) => ManifestOptions::load_with_warnings(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            config::load_or_default(&cwd)?
        }
    };

    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }

    Ok(options.with_env_overrides().with_overrides(&args.overrides()))
}

fn load_plugin(
    args: &ManifestArgs,
    force_clean: bool,
) -> Result<(assetmap::AppliedAssetsMapPlugin, assetmap::BuildSnapshot)> {
    let mut options = resolve_options(args)?;
    if force_clean {
        options.clean = true;
    }

    let snapshot = JsonSnapshotLoader::new()
        .load(&args.snapshot)
        .with_context(|| format!("failed to load snapshot {}", args.snapshot.display()))?;

    let plugin = AssetsMapPlugin::new(options)
        .apply(snapshot.output_path())
        .with_context(|| {
            format!(
                "failed to prepare manifest for {}",
                snapshot.output_path().display()
            )
        })?;

    Ok((plugin, snapshot))
}

fn cmd_emit(args: &ManifestArgs, force_clean: bool, json: bool) -> Result<()> {
    let (plugin, snapshot) = load_plugin(args, force_clean)?;

    let report = plugin
        .after_emit(&snapshot)
        .context("failed to emit asset manifest")?;

    if json {
        print_json_summary(&report, force_clean);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn cmd_print(args: &ManifestArgs) -> Result<()> {
    let (plugin, snapshot) = load_plugin(args, false)?;

    let text = plugin
        .render(&snapshot)
        .context("failed to render asset manifest")?;

    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn print_summary(report: &EmitReport) {
    println!(
        "Wrote {} ({} entry points, {} assets, {} auxiliary files)",
        report.output.display(),
        report.entrypoint_count,
        report.asset_count,
        report.auxiliary_count
    );

    if report.clean.is_some() {
        let deleted = report.deleted();
        println!("Removed {} stale file(s)", deleted.len());
        for path in deleted {
            println!("  - {}", path.display());
        }
    }
}

fn print_json_summary(report: &EmitReport, forced_clean: bool) {
    let command = if forced_clean { "clean" } else { "emit" };
    let deleted: Vec<String> = report
        .deleted()
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    let summary = serde_json::json!({
        "event": "complete",
        "command": command,
        "output": report.output.display().to_string(),
        "bytes": report.bytes_written,
        "entrypoints": report.entrypoint_count,
        "assets": report.asset_count,
        "auxiliary_files": report.auxiliary_count,
        "cleaned": report.clean.is_some(),
        "deleted": deleted,
    });
    println!("{}", summary);
}
