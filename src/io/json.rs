// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! JSON mesh import/export and report writing

use crate::check::CheckReport;
use crate::geometry::UvMesh;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Import a mesh serialized as JSON
pub fn import_json(path: &str) -> Result<UvMesh> {
    let source =
        fs::read_to_string(path).context(format!("Failed to read mesh file: {}", path))?;

    parse_json(&source).context(format!("Failed to parse mesh file: {}", path))
}

/// Parse a JSON mesh and check it against the accessor contract
pub fn parse_json(source: &str) -> Result<UvMesh> {
    let mesh: UvMesh = serde_json::from_str(source)?;
    mesh.validate()?;
    Ok(mesh)
}

/// Export a mesh as pretty-printed JSON
pub fn export_json(mesh: &UvMesh, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(mesh).context("Failed to serialize mesh")?;
    fs::write(path, json).context(format!("Failed to write mesh file: {}", path))?;
    Ok(())
}

/// Write check reports as a JSON array
pub fn write_reports(reports: &[CheckReport], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(reports).context("Failed to serialize reports")?;
    fs::write(path, json).with_context(|| format!("Failed to write report: {:?}", path))?;
    Ok(())
}
