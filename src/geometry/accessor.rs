// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Read-only mesh access used by the UV checks

use crate::error::{CheckError, CheckResult};
use nalgebra::Point2;

/// Index of a face within a mesh
pub type FaceIndex = usize;

/// Key into a mesh's UV table
pub type UvIndex = usize;

/// Triangle expressed as three local positions in a face's vertex loop
pub type LoopTriangle = [usize; 3];

/// Read-only view of a polygon mesh and its UV set.
///
/// Implementations must not mutate anything behind these calls; the checks
/// read disjoint faces from several threads at once.
pub trait MeshAccessor: Sync {
    /// Number of faces in the mesh
    fn face_count(&self) -> usize;

    /// Mesh vertex indices of a face, in loop order
    fn face_vertex_loop(&self, face: FaceIndex) -> &[usize];

    /// Triangulation of a face as local loop positions.
    ///
    /// Fails with `DegenerateFace` when the face cannot be triangulated.
    fn face_triangles(&self, face: FaceIndex) -> CheckResult<Vec<LoopTriangle>>;

    /// UV index stored at a local loop position, if any
    fn uv_index_at(&self, face: FaceIndex, position: usize) -> Option<UvIndex>;

    /// Coordinate of a UV index, if the UV table has it
    fn uv_coordinate(&self, uv_index: UvIndex) -> Option<Point2<f64>>;

    /// Resolve the UV index and coordinate behind a loop position
    fn resolve_uv(&self, face: FaceIndex, position: usize) -> CheckResult<(UvIndex, Point2<f64>)> {
        let uv_index = self.uv_index_at(face, position).ok_or_else(|| {
            CheckError::degenerate(face, format!("no uv assigned at loop position {}", position))
        })?;
        let uv = self
            .uv_coordinate(uv_index)
            .ok_or(CheckError::UnresolvedUvIndex { face, uv_index })?;
        Ok((uv_index, uv))
    }

    /// Resolve the UVs at the three corners of a loop triangle.
    ///
    /// Only the positions the triangle names are read, so a loop position
    /// left out of the triangulation never has to resolve.
    fn triangle_uvs(
        &self,
        face: FaceIndex,
        triangle: LoopTriangle,
    ) -> CheckResult<[Point2<f64>; 3]> {
        let loop_len = self.face_vertex_loop(face).len();
        let corner = |position: usize| {
            if position >= loop_len {
                return Err(CheckError::degenerate(
                    face,
                    format!(
                        "triangle position {} outside a {}-vertex loop",
                        position, loop_len
                    ),
                ));
            }
            self.resolve_uv(face, position).map(|(_, uv)| uv)
        };
        Ok([corner(triangle[0])?, corner(triangle[1])?, corner(triangle[2])?])
    }
}
