use thiserror::Error;

/// Errors surfaced by geometric computations.
///
/// Invalid mutations (bad color, wrong side count) are silent no-ops and never
/// produce an error; this type only covers geometry that cannot be evaluated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FigureError {
    /// The three sides violate the triangle inequality, so Heron's formula
    /// would take the square root of a negative number.
    #[error("sides {a}, {b}, {c} do not form a valid triangle")]
    DegenerateTriangle { a: i64, b: i64, c: i64 },
}
