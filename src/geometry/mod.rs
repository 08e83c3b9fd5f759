// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - mesh access, UV tiles and layout analytics

mod accessor;
mod analytics;
mod mesh;
mod tile;

pub use accessor::{FaceIndex, LoopTriangle, MeshAccessor, UvIndex};
pub use analytics::{analyze, TileUsage, UvStats};
pub use mesh::{Face, UvMesh};
pub use tile::UdimTile;
