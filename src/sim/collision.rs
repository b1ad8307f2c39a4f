//! Collision detection between horizontal spans
//!
//! Entities only collide within a row, so every test reduces to an overlap
//! between two closed pixel intervals on the x axis.

/// A closed horizontal interval `[left, right]` in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f32,
    pub right: f32,
}

impl Span {
    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Span starting at `left` and extending `width` pixels
    pub fn from_width(left: f32, width: f32) -> Self {
        Self {
            left,
            right: left + width,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Closed-interval overlap; touching edges count
    #[inline]
    pub fn overlaps(&self, other: &Span) -> bool {
        self.right >= other.left && self.left <= other.right
    }
}

/// The player's hitbox, narrower than the column it occupies
pub type Hitbox = Span;

/// Check whether an entity on `row_a` spanning `a` hits one on `row_b` spanning `b`
pub fn row_span_collision(row_a: u32, a: &Span, row_b: u32, b: &Span) -> bool {
    row_a == row_b && a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_inside() {
        let hitbox = Span::new(242.0, 263.0);
        let enemy = Span::from_width(250.0, 101.0);
        assert!(enemy.overlaps(&hitbox));
    }

    #[test]
    fn test_overlap_touching_edges() {
        let hitbox = Span::new(242.0, 263.0);
        // Enemy right edge exactly on hitbox left
        assert!(Span::from_width(141.0, 101.0).overlaps(&hitbox));
        // Enemy left edge exactly on hitbox right
        assert!(Span::from_width(263.0, 101.0).overlaps(&hitbox));
    }

    #[test]
    fn test_no_overlap() {
        let hitbox = Span::new(242.0, 263.0);
        assert!(!Span::from_width(140.0, 101.0).overlaps(&hitbox));
        assert!(!Span::from_width(263.5, 101.0).overlaps(&hitbox));
    }

    #[test]
    fn test_row_span_collision_requires_same_row() {
        let a = Span::new(0.0, 10.0);
        let b = Span::new(5.0, 15.0);
        assert!(row_span_collision(2, &a, 2, &b));
        assert!(!row_span_collision(2, &a, 3, &b));
    }
}
