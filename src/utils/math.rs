// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use nalgebra::Point2;

/// Signed area of a UV triangle.
///
/// Positive for counter-clockwise corners, negative for clockwise ones and
/// zero for collinear or coincident corners.
pub fn signed_area(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> f64 {
    (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)) / 2.0
}

/// Unsigned area of a UV triangle
pub fn triangle_area(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> f64 {
    signed_area(a, b, c).abs()
}
