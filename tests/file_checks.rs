// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Checks run against mesh files

use anyhow::Result;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};
use uvcheck::geometry::analyze;
use uvcheck::io::{export_json, import_mesh};
use uvcheck::{check_file, CheckError, CheckMode, CheckOptions, UvMesh};

/// Two quads: face 0 laid out cleanly in tile 1001, face 1 mirrored and
/// stretched into tile 1002
const TWO_QUADS: &str = "\
o pPlane1
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 2 0 0
v 2 1 0
vt 0.1 0.1
vt 0.9 0.1
vt 0.9 0.9
vt 0.1 0.9
vt 1.5 0.1
vt 1.5 0.9
f 1/1 2/2 3/3 4/4
f 2/2 3/3 6/6 5/5
";

fn obj_file(contents: &str) -> Result<NamedTempFile> {
    let mut file = Builder::new().suffix(".obj").tempfile()?;
    write!(file, "{}", contents)?;
    Ok(file)
}

#[test]
fn test_obj_overlap_check() -> Result<()> {
    let file = obj_file(TWO_QUADS)?;
    let report = check_file(file.path(), None, CheckMode::Overlap, &CheckOptions::default())?;

    assert_eq!(report.mesh_path, "pPlane1");
    assert_eq!(report.components, vec!["pPlane1.f[1]", "pPlane1.f[1]"]);
    Ok(())
}

#[test]
fn test_obj_udim_check() -> Result<()> {
    let file = obj_file(TWO_QUADS)?;
    let report = check_file(
        file.path(),
        Some("|pPlane1|pPlaneShape1"),
        CheckMode::UdimBoundary,
        &CheckOptions::parallel(),
    )?;

    // UV edges 2->5 and 4->1 of face 1 cross from u tile 0 into u tile 1
    assert_eq!(
        report.components,
        vec![
            "|pPlane1|pPlaneShape1.f[1]",
            "|pPlane1|pPlaneShape1.f[2]",
            "|pPlane1|pPlaneShape1.f[4]",
            "|pPlane1|pPlaneShape1.f[5]",
        ]
    );
    Ok(())
}

#[test]
fn test_obj_stats() -> Result<()> {
    let file = obj_file(TWO_QUADS)?;
    let mesh = import_mesh(file.path())?;
    let stats = analyze(&mesh)?;

    assert_eq!(stats.face_count, 2);
    assert_eq!(stats.triangle_count, 4);
    assert_eq!(stats.inverted_triangles, 2);
    assert_eq!(stats.tiles.len(), 2);
    Ok(())
}

#[test]
fn test_json_mesh_check() -> Result<()> {
    let mesh = UvMesh::from_uv_polygons(&[vec![[0.2, 0.2], [1.8, 0.3], [0.3, 1.9]]]);
    let file = Builder::new().suffix(".json").tempfile()?;
    let path = file.path().to_str().unwrap();
    export_json(&mesh, path)?;

    let report = check_file(
        file.path(),
        Some("mesh"),
        CheckMode::UdimBoundary,
        &CheckOptions::default(),
    )?;
    assert_eq!(report.components, vec!["mesh.f[0]", "mesh.f[1]", "mesh.f[2]"]);
    Ok(())
}

#[test]
fn test_points_only_file_is_not_a_mesh() -> Result<()> {
    let file = obj_file("v 0 0 0\nv 1 0 0\np 1\np 2\n")?;
    let err = check_file(file.path(), None, CheckMode::Overlap, &CheckOptions::default())
        .unwrap_err();

    assert!(err
        .chain()
        .any(|cause| matches!(cause.downcast_ref::<CheckError>(), Some(CheckError::NotAMesh(_)))));
    Ok(())
}
