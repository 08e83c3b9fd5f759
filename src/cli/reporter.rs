// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::check::{CheckMode, CheckReport};
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Announce the check about to run
    pub fn report_banner(mode: CheckMode) {
        println!("{} {}", "ℹ️".bright_blue(), mode.banner().bold());
    }

    /// Report a finished check with colors
    pub fn report_check(file: &str, report: &CheckReport, duration: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "File:".bold(), file.cyan());
        println!("{} {}", "Mesh:".bold(), report.mesh_path.cyan());
        println!("{}", "━".repeat(80).bright_black());

        if report.is_clean() {
            println!(
                "{} {}",
                "✅".green(),
                format!("No {} problems found", Self::subject(report.mode))
                    .green()
                    .bold()
            );
        } else {
            println!(
                "{} {}",
                "❌".red(),
                format!(
                    "{} {} component(s) flagged",
                    report.components.len(),
                    Self::subject(report.mode)
                )
                .red()
                .bold()
            );
            for component in &report.components {
                println!("  {}", component);
            }
        }

        println!(
            "\n  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Print flagged components one per line, the way scripts consume them
    pub fn report_components(components: &[String]) {
        for component in components {
            println!("{}", component);
        }
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        eprintln!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    fn subject(mode: CheckMode) -> &'static str {
        match mode {
            CheckMode::Overlap => "overlap",
            CheckMode::UdimBoundary => "udim border",
        }
    }

    /// Format duration for display
    pub fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
