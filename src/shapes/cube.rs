use crate::color::Rgb;
use crate::shapes::{Figure, Shape};

/// A cube described by its 12 equal edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    base: Shape,
}

impl Cube {
    pub const SIDES_COUNT: usize = 12;

    /// Creates a cube from a color and a candidate side list holding the one
    /// edge length, which is replicated across all 12 edges. Zero or several
    /// candidates fall back to 12 unit edges, and a non-positive edge is
    /// caught by the base constructor's positivity check.
    pub fn new(color: Rgb, sides: &[i64]) -> Self {
        let candidate: Vec<i64> = if sides.len() == 1 {
            vec![sides[0]; Self::SIDES_COUNT]
        } else {
            vec![1; Self::SIDES_COUNT]
        };
        Cube {
            base: Shape::with_sides_count(Self::SIDES_COUNT, &candidate, color, false),
        }
    }

    /// Volume of the cube, recomputed from the current first edge.
    ///
    /// Overflows `i64` (panicking in debug builds) for edges above
    /// 2_097_151, i.e. the largest edge whose cube fits in `i64`.
    pub fn volume(&self) -> i64 {
        self.base.sides()[0].pow(3)
    }
}

impl Figure for Cube {
    fn base(&self) -> &Shape {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Shape {
        &mut self.base
    }
}
