// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polygon mesh with a UV set

use super::accessor::{FaceIndex, LoopTriangle, MeshAccessor, UvIndex};
use crate::error::{CheckError, CheckResult};
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// Polygon face: a vertex loop and the UV index at each loop position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub vertices: Vec<usize>,
    pub uv_indices: Vec<UvIndex>,
}

impl Face {
    pub fn new(vertices: Vec<usize>, uv_indices: Vec<UvIndex>) -> Self {
        Self {
            vertices,
            uv_indices,
        }
    }

    /// Number of positions in the vertex loop
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Polygon mesh holding positions, a shared UV table and faces
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UvMesh {
    /// Object name, used as the default mesh path when reporting
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub positions: Vec<Point3<f64>>,
    pub uvs: Vec<Point2<f64>>,
    pub faces: Vec<Face>,
}

impl UvMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self::new()
    }

    pub fn with_capacity(position_count: usize, uv_count: usize, face_count: usize) -> Self {
        Self {
            name: None,
            positions: Vec::with_capacity(position_count),
            uvs: Vec::with_capacity(uv_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Build a mesh where every polygon owns its own vertices and UVs.
    ///
    /// Positions are taken from the UVs (z = 0), which is enough for checks
    /// that only look at UV space.
    pub fn from_uv_polygons(polygons: &[Vec<[f64; 2]>]) -> Self {
        let corner_count = polygons.iter().map(Vec::len).sum();
        let mut mesh = Self::with_capacity(corner_count, corner_count, polygons.len());

        for polygon in polygons {
            let mut vertices = Vec::with_capacity(polygon.len());
            let mut uv_indices = Vec::with_capacity(polygon.len());
            for &[u, v] in polygon {
                vertices.push(mesh.add_position(Point3::new(u, v, 0.0)));
                uv_indices.push(mesh.add_uv(Point2::new(u, v)));
            }
            mesh.add_face(Face::new(vertices, uv_indices));
        }

        mesh
    }

    /// Add a position and return its index
    pub fn add_position(&mut self, position: Point3<f64>) -> usize {
        let index = self.positions.len();
        self.positions.push(position);
        index
    }

    /// Add a UV coordinate and return its UV index
    pub fn add_uv(&mut self, uv: Point2<f64>) -> UvIndex {
        let index = self.uvs.len();
        self.uvs.push(uv);
        index
    }

    /// Add a face and return its face index
    pub fn add_face(&mut self, face: Face) -> FaceIndex {
        let index = self.faces.len();
        self.faces.push(face);
        index
    }

    /// Get UV count
    pub fn uv_count(&self) -> usize {
        self.uvs.len()
    }

    /// Number of triangles a fan triangulation produces over all faces
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(|f| f.len().saturating_sub(2)).sum()
    }

    /// Check every face against the accessor contract.
    ///
    /// Fails on the first face that cannot be triangulated or that points at
    /// a UV index missing from the UV table.
    pub fn validate(&self) -> CheckResult<()> {
        for (index, face) in self.faces.iter().enumerate() {
            Self::check_face(index, face)?;
            if let Some(&uv_index) = face.uv_indices.iter().find(|&&uv| uv >= self.uvs.len()) {
                return Err(CheckError::UnresolvedUvIndex {
                    face: index,
                    uv_index,
                });
            }
        }
        Ok(())
    }

    fn check_face(index: FaceIndex, face: &Face) -> CheckResult<()> {
        if face.len() < 3 {
            return Err(CheckError::degenerate(
                index,
                format!("only {} vertices", face.len()),
            ));
        }
        if face.uv_indices.len() != face.len() {
            return Err(CheckError::degenerate(
                index,
                format!(
                    "{} vertices but {} uv indices",
                    face.len(),
                    face.uv_indices.len()
                ),
            ));
        }
        Ok(())
    }
}

impl MeshAccessor for UvMesh {
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn face_vertex_loop(&self, face: FaceIndex) -> &[usize] {
        &self.faces[face].vertices
    }

    /// Fan triangulation anchored at loop position 0
    fn face_triangles(&self, face: FaceIndex) -> CheckResult<Vec<LoopTriangle>> {
        let polygon = &self.faces[face];
        Self::check_face(face, polygon)?;
        Ok((1..polygon.len() - 1).map(|i| [0, i, i + 1]).collect())
    }

    fn uv_index_at(&self, face: FaceIndex, position: usize) -> Option<UvIndex> {
        self.faces[face].uv_indices.get(position).copied()
    }

    fn uv_coordinate(&self, uv_index: UvIndex) -> Option<Point2<f64>> {
        self.uvs.get(uv_index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> UvMesh {
        UvMesh::from_uv_polygons(&[vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]])
    }

    #[test]
    fn test_from_uv_polygons() {
        let mesh = UvMesh::from_uv_polygons(&[
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
            vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
        ]);

        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.uv_count(), 7);
        assert_eq!(mesh.triangle_count(), 3);
        assert_eq!(mesh.faces[1].uv_indices, vec![4, 5, 6]);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_fan_triangulation() {
        let mesh = UvMesh::from_uv_polygons(&[vec![
            [0.0, 0.0],
            [1.0, 0.0],
            [1.5, 0.5],
            [1.0, 1.0],
            [0.0, 1.0],
        ]]);

        let triangles = mesh.face_triangles(0).unwrap();
        assert_eq!(triangles, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
    }

    #[test]
    fn test_degenerate_face() {
        let mut mesh = unit_quad();
        mesh.add_face(Face::new(vec![0, 1], vec![0, 1]));

        assert!(matches!(
            mesh.face_triangles(1),
            Err(CheckError::DegenerateFace { face: 1, .. })
        ));
        assert!(matches!(
            mesh.validate(),
            Err(CheckError::DegenerateFace { face: 1, .. })
        ));
    }

    #[test]
    fn test_mismatched_uv_loop() {
        let mut mesh = unit_quad();
        mesh.faces[0].uv_indices.pop();

        assert!(matches!(
            mesh.validate(),
            Err(CheckError::DegenerateFace { face: 0, .. })
        ));
    }

    #[test]
    fn test_unresolved_uv_index() {
        let mut mesh = unit_quad();
        mesh.faces[0].uv_indices[2] = 42;

        assert_eq!(
            mesh.validate(),
            Err(CheckError::UnresolvedUvIndex {
                face: 0,
                uv_index: 42
            })
        );
        assert_eq!(
            mesh.resolve_uv(0, 2),
            Err(CheckError::UnresolvedUvIndex {
                face: 0,
                uv_index: 42
            })
        );
    }

    #[test]
    fn test_resolve_uv() {
        let mesh = unit_quad();
        let (uv_index, uv) = mesh.resolve_uv(0, 2).unwrap();

        assert_eq!(uv_index, 2);
        assert_eq!(uv, Point2::new(1.0, 1.0));
    }
}
