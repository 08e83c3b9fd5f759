// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Wavefront OBJ importer
//!
//! Reads positions (`v`), texture coordinates (`vt`), polygon faces (`f`) and
//! the first object name (`o`). Faces keep their polygon loops; triangulation
//! is left to the mesh accessor.

use crate::error::CheckError;
use crate::geometry::{Face, UvMesh};
use anyhow::{bail, Context, Result};
use log::debug;
use nalgebra::{Point2, Point3};
use std::fs;

/// Import an OBJ file into a polygon mesh
pub fn import_obj(path: &str) -> Result<UvMesh> {
    let source =
        fs::read_to_string(path).context(format!("Failed to read OBJ file: {}", path))?;

    parse_obj(&source).context(format!("Failed to parse OBJ file: {}", path))
}

/// Parse OBJ source text into a polygon mesh
pub fn parse_obj(source: &str) -> Result<UvMesh> {
    let mut mesh = UvMesh::new();
    let mut skipped_elements = 0usize;

    for (line_index, line) in source.lines().enumerate() {
        let line_no = line_index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let tag = tokens.next().unwrap_or("");
        match tag {
            "v" => {
                let [x, y, z] = parse_floats::<3>(&mut tokens, line_no, 3)?;
                mesh.add_position(Point3::new(x, y, z));
            }
            "vt" => {
                let [u, v] = parse_floats::<2>(&mut tokens, line_no, 1)?;
                mesh.add_uv(Point2::new(u, v));
            }
            "f" => {
                let face = parse_face(tokens, &mesh, line_no)?;
                mesh.add_face(face);
            }
            "o" => {
                if mesh.name.is_none() {
                    mesh.name = tokens.next().map(str::to_string);
                }
            }
            "l" | "p" => skipped_elements += 1,
            "vn" | "vp" | "g" | "s" | "usemtl" | "mtllib" => {}
            other => debug!("line {}: ignoring unsupported OBJ statement '{}'", line_no, other),
        }
    }

    if mesh.faces.is_empty() {
        let what = if skipped_elements > 0 {
            format!("{} point/line elements and no faces", skipped_elements)
        } else {
            "no faces".to_string()
        };
        return Err(CheckError::NotAMesh(what).into());
    }

    debug!(
        "parsed OBJ mesh: {} positions, {} uvs, {} faces",
        mesh.positions.len(),
        mesh.uv_count(),
        mesh.faces.len()
    );

    mesh.validate()?;
    Ok(mesh)
}

/// Parse up to `N` floats, of which the first `required` must be present.
/// Missing optional components are zero.
fn parse_floats<'a, const N: usize>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
    required: usize,
) -> Result<[f64; N]> {
    let mut values = [0.0; N];
    for (i, value) in values.iter_mut().enumerate() {
        match tokens.next() {
            Some(token) => {
                *value = token
                    .parse()
                    .with_context(|| format!("line {}: invalid number '{}'", line_no, token))?;
            }
            None if i < required => {
                bail!("line {}: expected at least {} components", line_no, required)
            }
            None => break,
        }
    }
    Ok(values)
}

fn parse_face<'a>(
    tokens: impl Iterator<Item = &'a str>,
    mesh: &UvMesh,
    line_no: usize,
) -> Result<Face> {
    let mut vertices = Vec::new();
    let mut uv_indices = Vec::new();

    for token in tokens {
        let mut parts = token.split('/');
        let vertex = parts.next().unwrap_or("");
        let texture = parts.next().unwrap_or("");

        vertices.push(resolve_index(vertex, mesh.positions.len(), line_no, "position")?);
        if texture.is_empty() {
            bail!(
                "line {}: face corner '{}' has no texture coordinate",
                line_no,
                token
            );
        }
        uv_indices.push(resolve_index(texture, mesh.uv_count(), line_no, "texture")?);
    }

    if vertices.len() < 3 {
        bail!(
            "line {}: face has {} vertices, at least 3 required",
            line_no,
            vertices.len()
        );
    }

    Ok(Face::new(vertices, uv_indices))
}

/// Resolve a 1-based or negative (relative) OBJ index to a 0-based one
fn resolve_index(token: &str, len: usize, line_no: usize, kind: &str) -> Result<usize> {
    let raw: i64 = token
        .parse()
        .with_context(|| format!("line {}: invalid {} index '{}'", line_no, kind, token))?;

    let resolved = if raw > 0 {
        raw - 1
    } else {
        len as i64 + raw
    };

    if raw == 0 || resolved < 0 || resolved >= len as i64 {
        bail!(
            "line {}: {} index {} out of bounds (1..={})",
            line_no,
            kind,
            raw,
            len
        );
    }

    Ok(resolved as usize)
}
