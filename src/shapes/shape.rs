use crate::color::Rgb;
use crate::shapes::Figure;

/// A generic figure: a fixed-arity list of sides, a color, and a fill flag.
///
/// `sides` and `color` are private; mutation goes through [`Shape::set_sides`]
/// and [`Shape::set_color`], which silently reject invalid input. `filled`
/// carries no invariant and is a public field.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    sides: Vec<i64>,
    color: Rgb,
    pub filled: bool,
    sides_count: usize,
}

impl Shape {
    /// Creates a generic shape with `sides_count = 0`.
    pub fn new(sides: &[i64], color: Rgb, filled: bool) -> Self {
        Self::with_sides_count(0, sides, color, filled)
    }

    /// Creates a shape with an explicit side count. Concrete variants build
    /// their base through this.
    ///
    /// The candidate sides are kept iff there are exactly `sides_count` of
    /// them and every value is positive; otherwise the shape falls back to
    /// `sides_count` unit sides. Color is stored as-is.
    pub fn with_sides_count(sides_count: usize, sides: &[i64], color: Rgb, filled: bool) -> Self {
        let sides = if Self::is_valid_sides(sides_count, sides) {
            sides.to_vec()
        } else {
            vec![1; sides_count]
        };
        Shape {
            sides,
            color,
            filled,
            sides_count,
        }
    }

    fn is_valid_sides(sides_count: usize, sides: &[i64]) -> bool {
        sides.len() == sides_count && sides.iter().all(|&s| s > 0)
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Replaces the color iff all three components lie in 0..=255. Invalid
    /// input leaves the stored color untouched.
    pub fn set_color(&mut self, r: i32, g: i32, b: i32) {
        let candidate = Rgb::new(r, g, b);
        if candidate.is_valid() {
            self.color = candidate;
        }
    }

    pub fn sides(&self) -> &[i64] {
        &self.sides
    }

    /// Replaces the sides iff the candidate length equals `sides_count`.
    /// Unlike construction, values are not checked for positivity.
    pub fn set_sides(&mut self, new_sides: &[i64]) {
        if new_sides.len() != self.sides_count {
            return;
        }
        self.sides = new_sides.to_vec();
    }

    /// Perimeter, recomputed from the current sides.
    ///
    /// Overflows `i64` (panicking in debug builds) if the sum of the sides
    /// exceeds `i64::MAX`.
    pub fn perimeter(&self) -> i64 {
        self.sides.iter().sum()
    }

    pub fn sides_count(&self) -> usize {
        self.sides_count
    }
}

impl Figure for Shape {
    fn base(&self) -> &Shape {
        self
    }

    fn base_mut(&mut self) -> &mut Shape {
        self
    }
}
