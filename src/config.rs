// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Check configuration

use crate::check::CheckOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "uvcheck.toml";

/// Configuration for the `uvcheck` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Spread faces over worker threads
    pub parallel: bool,
    /// Worker thread count (None = rayon default)
    pub parallelism: Option<usize>,
    /// Print banners and timings
    pub verbose: bool,
    /// Mesh path used in reported component names
    pub mesh_path: Option<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallelism: None, // Auto-detect
            verbose: false,
            mesh_path: None,
        }
    }
}

impl CheckConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Reads `path` when given, else `uvcheck.toml` if present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if PathBuf::from(CONFIG_FILE).exists() => Self::from_file(CONFIG_FILE)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `UVCHECK_*` overrides from a variable lookup
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(parallel) = lookup("UVCHECK_PARALLEL") {
            self.parallel = parallel.parse().unwrap_or(self.parallel);
        }

        if let Some(threads) = lookup("UVCHECK_THREADS") {
            self.parallelism = threads.parse().ok().filter(|&n: &usize| n > 0);
        }

        if let Some(verbose) = lookup("UVCHECK_VERBOSE") {
            self.verbose = verbose.parse().unwrap_or(self.verbose);
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Execution options for the checks
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            parallel: self.parallel,
            cancel: None,
        }
    }

    /// Size the global rayon pool when a thread count is configured
    pub fn init_thread_pool(&self) -> Result<()> {
        if let Some(threads) = self.parallelism {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to configure worker threads")?;
        }
        Ok(())
    }
}
