use std::fmt;

/// An RGB color triple.
///
/// Components are plain integers rather than `u8`: construction accepts any
/// values as-is, and only `Shape::set_color` enforces the 0..=255 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    /// Creates a new color. No range check here.
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Returns true if every component lies in 0..=255.
    pub fn is_valid(&self) -> bool {
        Self::is_valid_component(self.r)
            && Self::is_valid_component(self.g)
            && Self::is_valid_component(self.b)
    }

    fn is_valid_component(c: i32) -> bool {
        (0..=255).contains(&c)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_new_accepts_out_of_range() {
        // Construction takes components as-is; only mutation validates.
        let c = Rgb::new(500, -1, 300);
        assert_eq!(c, Rgb::new(500, -1, 300));
        assert!(!c.is_valid());
    }

    #[test]
    fn test_rgb_is_valid_bounds() {
        assert!(Rgb::new(0, 0, 0).is_valid());
        assert!(Rgb::new(255, 255, 255).is_valid());
        assert!(!Rgb::new(256, 0, 0).is_valid());
        assert!(!Rgb::new(0, -1, 0).is_valid());
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb::new(55, 66, 77).to_string(), "(55, 66, 77)");
    }
}
