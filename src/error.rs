// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for UV checks

use thiserror::Error;

/// Result type for UV check operations
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors raised while resolving a check or walking a mesh
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The mode selector is not one of the recognized checks
    #[error("invalid check mode: {0}")]
    InvalidMode(String),

    /// The resolved target carries no polygon faces
    #[error("selected object is not a mesh: {0}")]
    NotAMesh(String),

    /// A face could not be split into triangles
    #[error("face {face} cannot be triangulated: {reason}")]
    DegenerateFace { face: usize, reason: String },

    /// A face references a UV index missing from the UV table
    #[error("face {face} references unresolved uv index {uv_index}")]
    UnresolvedUvIndex { face: usize, uv_index: usize },

    /// The pass was stopped through its cancellation flag
    #[error("check cancelled")]
    Cancelled,
}

impl CheckError {
    /// Create a `DegenerateFace` error
    pub fn degenerate(face: usize, reason: impl Into<String>) -> Self {
        Self::DegenerateFace {
            face,
            reason: reason.into(),
        }
    }
}
