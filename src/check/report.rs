// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Component naming and check reports

use super::{CheckMode, CheckRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name each index as a face component of `mesh_path`, keeping input order.
///
/// Both checks report through the `.f[<n>]` template. For the UDIM check the
/// numbers are UV indices, not face indices.
pub fn format_components(mesh_path: &str, indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .map(|index| format!("{}.f[{}]", mesh_path, index))
        .collect()
}

/// Outcome of one check, ready for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub mesh_path: String,
    pub mode: CheckMode,
    pub components: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl CheckReport {
    pub fn new(request: &CheckRequest, components: Vec<String>) -> Self {
        Self {
            mesh_path: request.mesh_path.clone(),
            mode: request.mode,
            components,
            generated_at: Utc::now(),
        }
    }

    /// Whether the check found nothing
    pub fn is_clean(&self) -> bool {
        self.components.is_empty()
    }
}
