// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! UDIM tile addressing

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tile columns in the UDIM numbering scheme
const UDIM_COLUMNS: i64 = 10;

/// First UDIM number, assigned to tile (0, 0)
const UDIM_BASE: i64 = 1001;

/// 1×1 cell of UV space addressed by the floor of its coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UdimTile {
    pub u: i64,
    pub v: i64,
}

impl UdimTile {
    pub fn new(u: i64, v: i64) -> Self {
        Self { u, v }
    }

    /// Tile containing a UV coordinate, or `None` when either floor is NaN,
    /// infinite or beyond the `i64` range
    pub fn containing(uv: &Point2<f64>) -> Option<Self> {
        Some(Self {
            u: floor_index(uv.x)?,
            v: floor_index(uv.y)?,
        })
    }

    /// Whether two UV coordinates share a tile.
    ///
    /// Compares the floors directly, so any coordinate range works and a NaN
    /// component never matches.
    pub fn same_tile(a: &Point2<f64>, b: &Point2<f64>) -> bool {
        a.x.floor() == b.x.floor() && a.y.floor() == b.y.floor()
    }

    /// UDIM number (1001, 1002, ...) when the tile is inside the standard grid
    pub fn udim(&self) -> Option<i64> {
        if !(0..UDIM_COLUMNS).contains(&self.u) || self.v < 0 {
            return None;
        }
        UDIM_COLUMNS
            .checked_mul(self.v)?
            .checked_add(UDIM_BASE + self.u)
    }
}

/// `i64` floor of a coordinate when it is exactly representable
fn floor_index(value: f64) -> Option<i64> {
    let floor = value.floor();
    // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive
    if floor.is_finite() && floor >= i64::MIN as f64 && floor < i64::MAX as f64 {
        Some(floor as i64)
    } else {
        None
    }
}

impl fmt::Display for UdimTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.udim() {
            Some(number) => write!(f, "{}", number),
            None => write!(f, "({}, {})", self.u, self.v),
        }
    }
}
