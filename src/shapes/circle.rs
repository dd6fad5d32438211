use std::f64::consts::PI;

use crate::color::Rgb;
use crate::shapes::{Figure, Shape};

/// A circle described by its circumference: a single side whose length is the
/// length of the circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    base: Shape,
    radius: f64,
}

impl Circle {
    pub const SIDES_COUNT: usize = 1;

    /// Creates a circle from a color and a candidate side list.
    ///
    /// Anything other than exactly one side is replaced with `[1]` before the
    /// base constructor runs. The radius is snapshotted here from the
    /// arity-adjusted candidate and never refreshed: neither the base
    /// constructor's positivity fallback nor a later `set_sides` touches it.
    pub fn new(color: Rgb, sides: &[i64]) -> Self {
        let candidate: Vec<i64> = if sides.len() == Self::SIDES_COUNT {
            sides.to_vec()
        } else {
            vec![1; Self::SIDES_COUNT]
        };
        let radius = Self::calc_radius(candidate[0]);
        let base = Shape::with_sides_count(Self::SIDES_COUNT, &candidate, color, false);
        Circle { base, radius }
    }

    /// Radius from circumference.
    fn calc_radius(side_len: i64) -> f64 {
        side_len as f64 / (2.0 * PI)
    }

    /// The construction-time radius snapshot.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Area of the circle, from the radius snapshot.
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Figure for Circle {
    fn base(&self) -> &Shape {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Shape {
        &mut self.base
    }
}
