pub mod circle;
pub mod cube;
pub mod shape;
pub mod triangle;

// Re-export the specific shape types
pub use circle::Circle;
pub use cube::Cube;
pub use shape::Shape;
pub use triangle::Triangle;

use crate::color::Rgb;

/// Shared contract of every figure: validated color and side access plus the
/// perimeter query. Variants embed a base [`Shape`] and get the behavior via
/// the default methods.
pub trait Figure {
    fn base(&self) -> &Shape;
    fn base_mut(&mut self) -> &mut Shape;

    /// Current color.
    fn color(&self) -> Rgb {
        self.base().color()
    }

    /// Replaces the color iff all of r, g, b lie in 0..=255.
    /// Out-of-range input leaves the color unchanged.
    fn set_color(&mut self, r: i32, g: i32, b: i32) {
        self.base_mut().set_color(r, g, b);
    }

    /// Current sides.
    fn sides(&self) -> &[i64] {
        self.base().sides()
    }

    /// Replaces the sides iff the candidate has exactly `sides_count`
    /// elements. Arity is the only check here; values are not re-validated.
    fn set_sides(&mut self, new_sides: &[i64]) {
        self.base_mut().set_sides(new_sides);
    }

    /// Perimeter: the sum of the current sides, recomputed on every call.
    fn perimeter(&self) -> i64 {
        self.base().perimeter()
    }

    /// Number of sides this figure must always have.
    fn sides_count(&self) -> usize {
        self.base().sides_count()
    }

    fn is_filled(&self) -> bool {
        self.base().filled
    }

    fn set_filled(&mut self, filled: bool) {
        self.base_mut().filled = filled;
    }
}
