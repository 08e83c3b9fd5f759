// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! uvcheck
//!
//! UV layout checks for polygon meshes: flags faces whose UV triangles are
//! wound backwards and UVs on edges that cross a UDIM tile border.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod utils;

pub use check::{run_check, CheckMode, CheckOptions, CheckReport, CheckRequest};
pub use config::CheckConfig;
pub use error::{CheckError, CheckResult};
pub use geometry::{Face, MeshAccessor, UdimTile, UvMesh};
pub use io::import_mesh;

use anyhow::Result;
use std::path::Path;

/// Load a mesh file and run one check over it.
///
/// Without an explicit `mesh_path` the object name stored in the file is
/// used, then the file stem.
pub fn check_file(
    path: &Path,
    mesh_path: Option<&str>,
    mode: CheckMode,
    options: &CheckOptions,
) -> Result<CheckReport> {
    let mesh = import_mesh(path)?;
    let mesh_path = match mesh_path {
        Some(mesh_path) => mesh_path.to_string(),
        None => default_mesh_path(path, &mesh),
    };
    let request = CheckRequest::new(mesh_path, mode);
    let components = run_check(&request, &mesh, options)?;
    Ok(CheckReport::new(&request, components))
}

/// Name used for a mesh loaded from `path` when none is configured
pub fn default_mesh_path(path: &Path, mesh: &UvMesh) -> String {
    mesh.name
        .clone()
        .or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "mesh".to_string())
}
