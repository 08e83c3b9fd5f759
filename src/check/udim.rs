// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! UDIM border crossing detection

use super::CheckOptions;
use crate::error::CheckResult;
use crate::geometry::{FaceIndex, MeshAccessor, UdimTile, UvIndex};
use dashmap::DashSet;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Collect the UV indices at both ends of every edge that leaves its tile
pub fn detect_udim_crossings<M: MeshAccessor + ?Sized>(
    mesh: &M,
) -> CheckResult<BTreeSet<UvIndex>> {
    detect_udim_crossings_with(mesh, &CheckOptions::default())
}

/// Collect tile-crossing UV indices using the given execution options
pub fn detect_udim_crossings_with<M: MeshAccessor + ?Sized>(
    mesh: &M,
    options: &CheckOptions,
) -> CheckResult<BTreeSet<UvIndex>> {
    let face_count = mesh.face_count();

    if options.parallel {
        let found: DashSet<UvIndex> = DashSet::new();
        (0..face_count).into_par_iter().try_for_each(|face| {
            options.checkpoint()?;
            for_each_crossing(mesh, face, |current, next| {
                found.insert(current);
                found.insert(next);
            })
        })?;
        Ok(found.into_iter().collect())
    } else {
        let mut found = BTreeSet::new();
        for face in 0..face_count {
            options.checkpoint()?;
            for_each_crossing(mesh, face, |current, next| {
                found.insert(current);
                found.insert(next);
            })?;
        }
        Ok(found)
    }
}

/// Tile-crossing UV indices, deduplicated and ascending
pub fn detect_udim_crossing_faces<M: MeshAccessor + ?Sized>(
    mesh: &M,
) -> CheckResult<Vec<UvIndex>> {
    detect_udim_crossing_faces_with(mesh, &CheckOptions::default())
}

/// Tile-crossing UV indices, deduplicated and ascending, using the given options
pub fn detect_udim_crossing_faces_with<M: MeshAccessor + ?Sized>(
    mesh: &M,
    options: &CheckOptions,
) -> CheckResult<Vec<UvIndex>> {
    Ok(detect_udim_crossings_with(mesh, options)?
        .into_iter()
        .collect())
}

/// Walk a face's UV edge loop, calling `on_crossing` for every edge whose
/// endpoints sit in different tiles
fn for_each_crossing<M, F>(mesh: &M, face: FaceIndex, mut on_crossing: F) -> CheckResult<()>
where
    M: MeshAccessor + ?Sized,
    F: FnMut(UvIndex, UvIndex),
{
    let n = mesh.face_vertex_loop(face).len();

    let corners = (0..n)
        .map(|position| mesh.resolve_uv(face, position))
        .collect::<CheckResult<Vec<_>>>()?;

    for i in 0..n {
        let (current, current_uv) = corners[i];
        let (next, next_uv) = corners[(i + 1) % n];
        if !UdimTile::same_tile(&current_uv, &next_uv) {
            on_crossing(current, next);
        }
    }
    Ok(())
}
