// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! UV layout analytics and statistics

use super::{MeshAccessor, UdimTile};
use crate::error::CheckResult;
use crate::utils::math::signed_area;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Face usage of a single UDIM tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileUsage {
    pub tile: UdimTile,
    /// Number of face corners whose UV lands in the tile
    pub corners: usize,
}

/// UV layout statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UvStats {
    /// Number of faces
    pub face_count: usize,
    /// Number of face corners (vertex-loop positions)
    pub corner_count: usize,
    /// Number of triangles after triangulation
    pub triangle_count: usize,
    /// UV bounding box [min_u, min_v, max_u, max_v]
    pub uv_bbox: [f64; 4],
    /// Sum of absolute triangle areas in UV space
    pub uv_area: f64,
    /// Triangles with negative signed area
    pub inverted_triangles: usize,
    /// Triangles with zero signed area
    pub zero_area_triangles: usize,
    /// Tiles touched by face corners, ordered by tile
    pub tiles: Vec<TileUsage>,
}

impl UvStats {
    /// Create empty stats
    pub fn empty() -> Self {
        Self {
            face_count: 0,
            corner_count: 0,
            triangle_count: 0,
            uv_bbox: [0.0; 4],
            uv_area: 0.0,
            inverted_triangles: 0,
            zero_area_triangles: 0,
            tiles: Vec::new(),
        }
    }

    /// Pretty print statistics
    pub fn print(&self) {
        println!("╔══════════════════════════════════════════════════════════╗");
        println!("║              UV LAYOUT ANALYTICS                         ║");
        println!("╠══════════════════════════════════════════════════════════╣");
        println!(
            "║ Faces:           {:>10}                              ║",
            self.face_count
        );
        println!(
            "║ Corners:         {:>10}                              ║",
            self.corner_count
        );
        println!(
            "║ Triangles:       {:>10}                              ║",
            self.triangle_count
        );
        println!(
            "║ UV Area:         {:>10.4}                              ║",
            self.uv_area
        );
        println!("║                                                          ║");
        println!("║ UV Bounds:                                               ║");
        println!(
            "║   Min: ({:>8.3}, {:>8.3})                               ║",
            self.uv_bbox[0], self.uv_bbox[1]
        );
        println!(
            "║   Max: ({:>8.3}, {:>8.3})                               ║",
            self.uv_bbox[2], self.uv_bbox[3]
        );
        println!("║                                                          ║");
        println!(
            "║ Inverted:        {:>10}                              ║",
            self.inverted_triangles
        );
        println!(
            "║ Zero Area:       {:>10}                              ║",
            self.zero_area_triangles
        );
        println!("║                                                          ║");
        println!("║ Tiles:                                                   ║");
        for usage in &self.tiles {
            println!(
                "║   {:<12} {:>10} corners                        ║",
                usage.tile.to_string(),
                usage.corners
            );
        }
        println!("╚══════════════════════════════════════════════════════════╝");
    }
}

/// Analyze the UV layout of a mesh
pub fn analyze<M: MeshAccessor + ?Sized>(mesh: &M) -> CheckResult<UvStats> {
    let face_count = mesh.face_count();
    if face_count == 0 {
        return Ok(UvStats::empty());
    }

    let mut stats = UvStats::empty();
    stats.face_count = face_count;

    let mut min = [f64::MAX, f64::MAX];
    let mut max = [f64::MIN, f64::MIN];
    let mut tile_corners: AHashMap<UdimTile, usize> = AHashMap::new();

    for face in 0..face_count {
        let corners = (0..mesh.face_vertex_loop(face).len())
            .map(|position| mesh.resolve_uv(face, position).map(|(_, uv)| uv))
            .collect::<CheckResult<Vec<_>>>()?;

        for uv in &corners {
            min[0] = min[0].min(uv.x);
            min[1] = min[1].min(uv.y);
            max[0] = max[0].max(uv.x);
            max[1] = max[1].max(uv.y);
            if let Some(tile) = UdimTile::containing(uv) {
                *tile_corners.entry(tile).or_insert(0) += 1;
            }
        }
        stats.corner_count += corners.len();

        for triangle in mesh.face_triangles(face)? {
            let [a, b, c] = mesh.triangle_uvs(face, triangle)?;
            let area = signed_area(&a, &b, &c);
            stats.triangle_count += 1;
            stats.uv_area += area.abs();
            if area < 0.0 {
                stats.inverted_triangles += 1;
            } else if area == 0.0 {
                stats.zero_area_triangles += 1;
            }
        }
    }

    if stats.corner_count > 0 {
        stats.uv_bbox = [min[0], min[1], max[0], max[1]];
    }

    let mut tiles: Vec<TileUsage> = tile_corners
        .into_iter()
        .map(|(tile, corners)| TileUsage { tile, corners })
        .collect();
    tiles.sort_by_key(|usage| (usage.tile.v, usage.tile.u));
    stats.tiles = tiles;

    Ok(stats)
}
