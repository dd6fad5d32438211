pub mod color;
pub mod error;
pub mod shapes;

// Re-export key types for easier use
pub use color::Rgb;
pub use error::FigureError;
pub use shapes::{Circle, Cube, Figure, Shape, Triangle};
