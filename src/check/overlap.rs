// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! UV overlap detection by triangle winding

use super::CheckOptions;
use crate::error::CheckResult;
use crate::geometry::{FaceIndex, MeshAccessor};
use crate::utils::math::signed_area;
use rayon::prelude::*;

/// Find faces with inverted UV triangles.
///
/// A face is listed once per triangle whose signed UV area is negative, in
/// face order and then triangulation order. Zero-area triangles are not
/// flagged.
pub fn detect_overlaps<M: MeshAccessor + ?Sized>(mesh: &M) -> CheckResult<Vec<FaceIndex>> {
    detect_overlaps_with(mesh, &CheckOptions::default())
}

/// Find faces with inverted UV triangles using the given execution options
pub fn detect_overlaps_with<M: MeshAccessor + ?Sized>(
    mesh: &M,
    options: &CheckOptions,
) -> CheckResult<Vec<FaceIndex>> {
    let face_count = mesh.face_count();

    let counts: Vec<usize> = if options.parallel {
        // Indexed collect keeps face order
        (0..face_count)
            .into_par_iter()
            .map(|face| {
                options.checkpoint()?;
                inverted_triangle_count(mesh, face)
            })
            .collect::<CheckResult<Vec<_>>>()?
    } else {
        (0..face_count)
            .map(|face| {
                options.checkpoint()?;
                inverted_triangle_count(mesh, face)
            })
            .collect::<CheckResult<Vec<_>>>()?
    };

    let mut result = Vec::new();
    for (face, &count) in counts.iter().enumerate() {
        result.extend(std::iter::repeat(face).take(count));
    }
    Ok(result)
}

/// Count the triangles of one face whose UV corners wind clockwise
fn inverted_triangle_count<M: MeshAccessor + ?Sized>(
    mesh: &M,
    face: FaceIndex,
) -> CheckResult<usize> {
    let mut inverted = 0;
    for triangle in mesh.face_triangles(face)? {
        let [a, b, c] = mesh.triangle_uvs(face, triangle)?;
        if signed_area(&a, &b, &c) < 0.0 {
            inverted += 1;
        }
    }
    Ok(inverted)
}
