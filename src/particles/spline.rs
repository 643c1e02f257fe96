use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Values a spline can blend between
pub trait Interpolate: Copy + Default {
    /// Blend from `self` toward `other` by `frac`
    fn interpolate(self, other: Self, frac: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(self, other: Self, frac: f32) -> Self {
        self + frac * (other - self)
    }
}

impl Interpolate for Vec3 {
    fn interpolate(self, other: Self, frac: f32) -> Self {
        self.lerp(other, frac)
    }
}

impl Interpolate for Vec4 {
    fn interpolate(self, other: Self, frac: f32) -> Self {
        self.lerp(other, frac)
    }
}

/// One `(t, value)` pair on a spline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint<T> {
    pub t: f32,
    pub value: T,
}

impl<T> ControlPoint<T> {
    pub fn new(t: f32, value: T) -> Self {
        Self { t, value }
    }
}

/// Piecewise-linear curve over control points.
///
/// Points are kept in insertion order; callers add them with increasing `t`.
/// Queries outside the covered range clamp to the nearest endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearSpline<T> {
    points: Vec<ControlPoint<T>>,
}

impl<T: Interpolate> LinearSpline<T> {
    /// Create an empty spline
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a spline from already ordered control points
    pub fn from_points(points: &[ControlPoint<T>]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    /// Append a control point
    pub fn add_point(&mut self, t: f32, value: T) {
        self.points.push(ControlPoint::new(t, value));
    }

    /// Builder form of [`add_point`](Self::add_point)
    pub fn with_point(mut self, t: f32, value: T) -> Self {
        self.add_point(t, value);
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ControlPoint<T>] {
        &self.points
    }

    /// Evaluate the curve, or `None` when it has no points
    pub fn try_value_at(&self, t: f32) -> Option<T> {
        let last = self.points.len().checked_sub(1)?;

        // Last point at or before t; stays 0 when t precedes every point
        let mut p1 = 0;
        for (i, point) in self.points.iter().enumerate() {
            if point.t > t {
                break;
            }
            p1 = i;
        }
        let p2 = last.min(p1 + 1);

        let a = self.points[p1];
        if p1 == p2 {
            return Some(a.value);
        }

        let b = self.points[p2];
        let span = b.t - a.t;
        if span <= 0.0 {
            // Only reachable when t precedes coincident leading points
            return Some(a.value);
        }
        let frac = ((t - a.t) / span).clamp(0.0, 1.0);
        Some(a.value.interpolate(b.value, frac))
    }

    /// Evaluate the curve at `t`.
    ///
    /// Querying an empty spline is a caller bug: it asserts in debug builds and
    /// yields `T::default()` in release builds.
    pub fn value_at(&self, t: f32) -> T {
        debug_assert!(!self.points.is_empty(), "queried an empty spline");
        self.try_value_at(t).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_point(v0: f32, v1: f32) -> LinearSpline<f32> {
        LinearSpline::new().with_point(0.0, v0).with_point(1.0, v1)
    }

    #[test]
    fn test_boundaries_clamp_to_endpoints() {
        let spline = two_point(3.0, 7.0);
        assert_eq!(spline.value_at(0.0), 3.0);
        assert_eq!(spline.value_at(1.0), 7.0);
        assert_eq!(spline.value_at(-5.0), 3.0);
        assert_eq!(spline.value_at(5.0), 7.0);
    }

    #[test]
    fn test_midpoint_is_exact() {
        let spline = two_point(0.0, 10.0);
        assert_eq!(spline.value_at(0.5), 5.0);
        assert_eq!(spline.value_at(0.25), 2.5);
    }

    #[test]
    fn test_single_point() {
        let spline = LinearSpline::new().with_point(0.4, 2.0_f32);
        for t in [-1.0, 0.0, 0.4, 0.9, 3.0] {
            assert_eq!(spline.value_at(t), 2.0);
        }
    }

    #[test]
    fn test_three_point_peak() {
        let spline = LinearSpline::new()
            .with_point(0.0, 0.0_f32)
            .with_point(0.6, 1.0)
            .with_point(1.0, 0.0);

        assert_eq!(spline.value_at(0.6), 1.0);
        assert_eq!(spline.value_at(1.0), 0.0);
        assert!((spline.value_at(0.3) - 0.5).abs() < 1e-6);
        assert!((spline.value_at(0.8) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_color_blend_is_componentwise() {
        let spline = LinearSpline::new()
            .with_point(0.0, Vec3::new(1.0, 1.0, 1.0))
            .with_point(1.0, Vec3::new(1.0, 0.5, 0.0));

        let mid = spline.value_at(0.5);
        assert!((mid - Vec3::new(1.0, 0.75, 0.5)).length() < 1e-6);
    }

    #[test]
    fn test_empty_spline_has_no_value() {
        let spline: LinearSpline<f32> = LinearSpline::new();
        assert_eq!(spline.try_value_at(0.5), None);
    }

    #[test]
    fn test_coincident_points_do_not_divide_by_zero() {
        let spline = LinearSpline::new()
            .with_point(0.5, 1.0_f32)
            .with_point(0.5, 4.0);
        assert_eq!(spline.value_at(0.25), 1.0);
        assert_eq!(spline.value_at(0.5), 4.0);
    }
}
