// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! UV checks - overlap and UDIM border detection

mod overlap;
mod report;
mod udim;

pub use overlap::{detect_overlaps, detect_overlaps_with};
pub use report::{format_components, CheckReport};
pub use udim::{
    detect_udim_crossing_faces, detect_udim_crossing_faces_with, detect_udim_crossings,
    detect_udim_crossings_with,
};

use crate::error::{CheckError, CheckResult};
use crate::geometry::MeshAccessor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Check to run against a mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckMode {
    /// Triangles wound backwards in UV space
    Overlap,
    /// Edges crossing a UDIM tile border
    UdimBoundary,
}

impl CheckMode {
    /// Numeric selector accepted on the command line
    pub fn number(&self) -> u32 {
        match self {
            CheckMode::Overlap => 0,
            CheckMode::UdimBoundary => 1,
        }
    }

    /// Banner printed before a check runs
    pub fn banner(&self) -> &'static str {
        match self {
            CheckMode::Overlap => "Checking overlaps",
            CheckMode::UdimBoundary => "Checking udim borders",
        }
    }
}

impl TryFrom<u32> for CheckMode {
    type Error = CheckError;

    fn try_from(value: u32) -> CheckResult<Self> {
        match value {
            0 => Ok(CheckMode::Overlap),
            1 => Ok(CheckMode::UdimBoundary),
            other => Err(CheckError::InvalidMode(other.to_string())),
        }
    }
}

impl FromStr for CheckMode {
    type Err = CheckError;

    fn from_str(s: &str) -> CheckResult<Self> {
        let s = s.trim();
        if let Ok(number) = s.parse::<u32>() {
            return Self::try_from(number);
        }
        match s.to_lowercase().as_str() {
            "overlap" | "overlaps" => Ok(CheckMode::Overlap),
            "udim" | "udim_boundary" | "udim-boundary" => Ok(CheckMode::UdimBoundary),
            _ => Err(CheckError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckMode::Overlap => write!(f, "overlap"),
            CheckMode::UdimBoundary => write!(f, "udim"),
        }
    }
}

/// A single check invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Path used when naming reported components
    pub mesh_path: String,
    pub mode: CheckMode,
    /// Whether the caller wants a banner; the checks themselves print nothing
    pub verbose: bool,
}

impl CheckRequest {
    pub fn new(mesh_path: impl Into<String>, mode: CheckMode) -> Self {
        Self {
            mesh_path: mesh_path.into(),
            mode,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Execution options shared by both checks
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Spread faces over the rayon thread pool
    pub parallel: bool,
    /// Checked between faces; once set the pass fails with `Cancelled`
    pub cancel: Option<Arc<AtomicBool>>,
}

impl CheckOptions {
    pub fn sequential() -> Self {
        Self::default()
    }

    pub fn parallel() -> Self {
        Self {
            parallel: true,
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    fn checkpoint(&self) -> CheckResult<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(CheckError::Cancelled),
            _ => Ok(()),
        }
    }
}

/// Run the requested check and name every offending component
pub fn run_check<M: MeshAccessor + ?Sized>(
    request: &CheckRequest,
    mesh: &M,
    options: &CheckOptions,
) -> CheckResult<Vec<String>> {
    let indices = match request.mode {
        CheckMode::Overlap => detect_overlaps_with(mesh, options)?,
        CheckMode::UdimBoundary => detect_udim_crossing_faces_with(mesh, options)?,
    };
    Ok(format_components(&request.mesh_path, &indices))
}
