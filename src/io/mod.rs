// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - mesh importers and report output

mod json;
mod obj;

pub use json::{export_json, import_json, parse_json, write_reports};
pub use obj::{import_obj, parse_obj};

use crate::geometry::UvMesh;
use anyhow::{bail, Result};
use std::path::Path;

/// File extensions `import_mesh` understands
pub const SUPPORTED_EXTENSIONS: &[&str] = &["obj", "json"];

/// Import a mesh, picking the reader from the file extension
pub fn import_mesh(path: &Path) -> Result<UvMesh> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    let path_str = path.to_string_lossy();

    match extension.as_str() {
        "obj" => import_obj(&path_str),
        "json" => import_json(&path_str),
        _ => bail!(
            "Unsupported mesh format '{}' (supported: {})",
            path.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        ),
    }
}

/// Whether a path has an extension `import_mesh` can read
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
