// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! End-to-end UV check behavior

use anyhow::Result;
use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use uvcheck::check::{detect_overlaps, detect_udim_crossing_faces, detect_udim_crossings};
use uvcheck::{run_check, CheckError, CheckMode, CheckOptions, CheckRequest, Face, UvMesh};

/// Regular grid of quads over `[0, width] × [0, height]` with shared UVs
fn uv_grid(cols: usize, rows: usize, width: f64, height: f64) -> UvMesh {
    let mut mesh = UvMesh::new();
    for j in 0..=rows {
        for i in 0..=cols {
            mesh.add_uv(Point2::new(
                width * i as f64 / cols as f64,
                height * j as f64 / rows as f64,
            ));
        }
    }

    let stride = cols + 1;
    for j in 0..rows {
        for i in 0..cols {
            let a = j * stride + i;
            let corners = vec![a, a + 1, a + 1 + stride, a + stride];
            mesh.add_face(Face::new(corners.clone(), corners));
        }
    }
    mesh
}

#[test]
fn test_quad_winding_example() -> Result<()> {
    let ccw = UvMesh::from_uv_polygons(&[vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]]);
    let request = CheckRequest::new("mesh", CheckMode::Overlap);
    assert!(run_check(&request, &ccw, &CheckOptions::default())?.is_empty());

    let cw = UvMesh::from_uv_polygons(&[vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]]);
    assert_eq!(
        run_check(&request, &cw, &CheckOptions::default())?,
        vec!["mesh.f[0]", "mesh.f[0]"]
    );
    Ok(())
}

#[test]
fn test_triangle_udim_example() -> Result<()> {
    let mesh = UvMesh::from_uv_polygons(&[vec![[0.2, 0.2], [1.8, 0.3], [0.3, 1.9]]]);
    let request = CheckRequest::new("mesh", CheckMode::UdimBoundary);

    let result = run_check(&request, &mesh, &CheckOptions::default())?;
    assert_eq!(result, vec!["mesh.f[0]", "mesh.f[1]", "mesh.f[2]"]);
    Ok(())
}

#[test]
fn test_reversed_triangles_always_flagged() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let mut corners: Vec<[f64; 2]> = (0..3)
            .map(|_| [rng.gen_range(-4.0..4.0), rng.gen_range(-4.0..4.0)])
            .collect();
        let [a, b, c] = [corners[0], corners[1], corners[2]];
        let area = a[0] * (b[1] - c[1]) + b[0] * (c[1] - a[1]) + c[0] * (a[1] - b[1]);
        if area.abs() < 1e-6 {
            continue;
        }
        if area < 0.0 {
            corners.swap(1, 2);
        }

        let ccw = UvMesh::from_uv_polygons(&[corners.clone()]);
        assert!(detect_overlaps(&ccw).unwrap().is_empty());

        corners.reverse();
        let cw = UvMesh::from_uv_polygons(&[corners]);
        assert_eq!(detect_overlaps(&cw).unwrap(), vec![0]);
    }
}

#[test]
fn test_clean_grid() {
    let mesh = uv_grid(16, 16, 1.0, 1.0);
    assert!(detect_overlaps(&mesh).unwrap().is_empty());
    // The top row and right column sit exactly on u = 1 / v = 1
    assert!(!detect_udim_crossings(&mesh).unwrap().is_empty());

    let inset = uv_grid(16, 16, 0.99, 0.99);
    assert!(detect_udim_crossings(&inset).unwrap().is_empty());
}

#[test]
fn test_grid_spanning_two_tiles() {
    // Columns at u = 0, 0.45, 0.9 | 1.35, 1.8; rows stay in v tile 0
    let mesh = uv_grid(4, 2, 1.8, 0.9);

    assert_eq!(
        detect_udim_crossing_faces(&mesh).unwrap(),
        vec![2, 3, 7, 8, 12, 13]
    );
}

#[test]
fn test_flipped_face_inside_grid() {
    let mut mesh = uv_grid(4, 4, 1.0, 1.0);

    // Mirror face 5 in u onto fresh UVs
    let mirrored: Vec<Point2<f64>> = mesh.faces[5]
        .uv_indices
        .iter()
        .map(|&uv| Point2::new(1.0 - mesh.uvs[uv].x, mesh.uvs[uv].y))
        .collect();
    let uv_indices = mirrored.into_iter().map(|uv| mesh.add_uv(uv)).collect();
    mesh.faces[5].uv_indices = uv_indices;

    assert_eq!(detect_overlaps(&mesh).unwrap(), vec![5, 5]);
}

#[test]
fn test_repeated_runs_are_identical() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let polygons: Vec<Vec<[f64; 2]>> = (0..500)
        .map(|_| {
            let u = rng.gen_range(0.0..3.0);
            let v = rng.gen_range(0.0..3.0);
            vec![
                [u, v],
                [u + rng.gen_range(-0.3..0.3), v + rng.gen_range(0.0..0.3)],
                [u + rng.gen_range(0.0..0.3), v + rng.gen_range(-0.3..0.3)],
            ]
        })
        .collect();
    let mesh = UvMesh::from_uv_polygons(&polygons);

    for mode in [CheckMode::Overlap, CheckMode::UdimBoundary] {
        let request = CheckRequest::new("|root|shape", mode);
        let first = run_check(&request, &mesh, &CheckOptions::sequential())?;
        let second = run_check(&request, &mesh, &CheckOptions::sequential())?;
        let parallel = run_check(&request, &mesh, &CheckOptions::parallel())?;

        assert_eq!(first, second);
        assert_eq!(first, parallel);
    }
    Ok(())
}

#[test]
fn test_errors_abort_without_partial_result() {
    let mut mesh = uv_grid(2, 2, 1.0, 1.0);
    mesh.faces[3].uv_indices[2] = 10_000;

    for mode in [CheckMode::Overlap, CheckMode::UdimBoundary] {
        let request = CheckRequest::new("mesh", mode);
        for options in [CheckOptions::sequential(), CheckOptions::parallel()] {
            assert_eq!(
                run_check(&request, &mesh, &options),
                Err(CheckError::UnresolvedUvIndex {
                    face: 3,
                    uv_index: 10_000
                })
            );
        }
    }
}

#[test]
fn test_cancel_flag_stops_pass() {
    let mesh = uv_grid(8, 8, 2.0, 2.0);
    let cancel = Arc::new(AtomicBool::new(true));
    let options = CheckOptions::parallel().with_cancel(cancel);

    let request = CheckRequest::new("mesh", CheckMode::UdimBoundary);
    assert_eq!(
        run_check(&request, &mesh, &options),
        Err(CheckError::Cancelled)
    );
}
