// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! uvcheck CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use uvcheck::cli::Reporter;
use uvcheck::{check_file, geometry, io, CheckConfig, CheckMode, CheckReport};
use walkdir::WalkDir;

/// Legacy check number used when `--check` is omitted; never a valid mode
const UNSET_CHECK: &str = "99";

#[derive(Parser)]
#[command(name = "uvcheck")]
#[command(about = "UV overlap and UDIM border checks for polygon meshes", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Mesh files (.obj, .json) or directories to scan
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Check to run: 0/overlap or 1/udim
    #[arg(short, long, default_value = UNSET_CHECK)]
    check: String,

    /// Mesh path used in reported component names
    #[arg(long, value_name = "PATH")]
    path: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Also write the JSON results to a file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Check faces on a single thread
    #[arg(long)]
    sequential: bool,

    /// Worker thread count
    #[arg(long)]
    threads: Option<usize>,

    /// Configuration file (defaults to ./uvcheck.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print UV layout statistics for a mesh
    Stats {
        /// Input mesh file
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Stats { input, json }) => stats_command(input, *json),
        Some(Commands::Version) => {
            println!("uvcheck v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => check_command(&cli),
    }
}

/// Default log filter; `RUST_LOG` takes precedence when set
fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "uvcheck=debug"
    } else {
        "warn"
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or(log_filter(verbose));
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn check_command(cli: &Cli) -> Result<()> {
    let mut config = CheckConfig::load(cli.config.as_deref())?;
    config.verbose |= cli.verbose;
    if cli.sequential {
        config.parallel = false;
    }
    if cli.threads.is_some() {
        config.parallelism = cli.threads;
    }
    if cli.path.is_some() {
        config.mesh_path = cli.path.clone();
    }

    // Reject the mode before touching any mesh
    let mode: CheckMode = match cli.check.parse() {
        Ok(mode) => mode,
        Err(e) => {
            Reporter::report_error(&format!("{} (expected 0/overlap or 1/udim)", e));
            std::process::exit(1);
        }
    };

    if cli.inputs.is_empty() {
        Reporter::report_error("You have to provide a mesh file");
        eprintln!("Usage: uvcheck <FILE>... --check <0|1>");
        std::process::exit(1);
    }

    config.init_thread_pool()?;
    let options = config.check_options();

    let files = collect_inputs(&cli.inputs);
    if files.is_empty() {
        Reporter::report_error("No mesh files found");
        std::process::exit(1);
    }

    let progress = if files.len() > 1 && !cli.json {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut reports: Vec<CheckReport> = Vec::new();
    let mut failed = 0usize;

    for file in &files {
        let display = file.display().to_string();
        if let Some(ref pb) = progress {
            pb.set_message(format!("Checking {}", display));
        }
        if config.verbose && !cli.json {
            Reporter::report_banner(mode);
        }

        let start = Instant::now();
        match check_file(file, config.mesh_path.as_deref(), mode, &options) {
            Ok(report) => {
                let duration = start.elapsed();
                if !cli.json {
                    let print = || {
                        if config.verbose {
                            Reporter::report_check(&display, &report, duration);
                        } else {
                            Reporter::report_components(&report.components);
                        }
                    };
                    match progress {
                        Some(ref pb) => pb.suspend(print),
                        None => print(),
                    }
                }
                reports.push(report);
            }
            Err(e) => {
                failed += 1;
                Reporter::report_error(&format!("{}: {:#}", display, e));
            }
        }

        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("Check complete");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if let Some(ref report_path) = cli.report {
        io::write_reports(&reports, report_path)?;
        if config.verbose {
            Reporter::report_info(&format!("Report written to {}", report_path.display()));
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn stats_command(input: &Path, json: bool) -> Result<()> {
    if !input.exists() {
        Reporter::report_error(&format!("Input file not found: {}", input.display()));
        std::process::exit(1);
    }

    let mesh = io::import_mesh(input)?;
    let stats = geometry::analyze(&mesh)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        stats.print();
    }

    Ok(())
}

/// Expand directories into the supported mesh files they contain
fn collect_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file() && io::is_supported(entry.path()))
                .map(|entry| entry.into_path())
                .collect();
            if found.is_empty() {
                Reporter::report_warning(&format!("No mesh files in {}", input.display()));
            }
            found.sort();
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }

    files
}
