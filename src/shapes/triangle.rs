use crate::color::Rgb;
use crate::error::FigureError;
use crate::shapes::{Figure, Shape};

/// A triangle described by its three side lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    base: Shape,
}

impl Triangle {
    pub const SIDES_COUNT: usize = 3;

    /// Creates a triangle from a color and a candidate side list. Anything
    /// other than exactly three sides is replaced with `[1, 1, 1]`; the base
    /// constructor then applies the positivity fallback.
    pub fn new(color: Rgb, sides: &[i64]) -> Self {
        let candidate: Vec<i64> = if sides.len() == Self::SIDES_COUNT {
            sides.to_vec()
        } else {
            vec![1; Self::SIDES_COUNT]
        };
        Triangle {
            base: Shape::with_sides_count(Self::SIDES_COUNT, &candidate, color, false),
        }
    }

    /// Area via Heron's formula, always computed from the current sides.
    ///
    /// There is no triangle-inequality validation anywhere else, so a side
    /// list that does not form a triangle is caught here: the product under
    /// the square root goes negative and the call fails with
    /// [`FigureError::DegenerateTriangle`].
    pub fn area(&self) -> Result<f64, FigureError> {
        let s = self.base.sides();
        let (a, b, c) = (s[0], s[1], s[2]);
        let (fa, fb, fc) = (a as f64, b as f64, c as f64);
        let p = (fa + fb + fc) / 2.0;
        let product = p * (p - fa) * (p - fb) * (p - fc);
        if product < 0.0 {
            return Err(FigureError::DegenerateTriangle { a, b, c });
        }
        Ok(product.sqrt())
    }
}

impl Figure for Triangle {
    fn base(&self) -> &Shape {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Shape {
        &mut self.base
    }
}
