/// A rectangle in screen coordinates, stored as left/top/right/bottom edges.
///
/// Coordinates are floating-point because the host layout system reports
/// fractional positions on scaled displays. Invariant: `left <= right` and
/// `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a rectangle from a position and size.
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Horizontal midpoint of the rectangle.
    pub fn mid_x(&self) -> f64 {
        self.left + self.width() / 2.0
    }

    /// Returns whether a point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_and_height() {
        let r = Rect::new(10.0, 20.0, 110.0, 220.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 200.0);
    }

    #[test]
    fn from_ltwh_matches_edges() {
        let r = Rect::from_ltwh(5.0, 6.0, 100.0, 50.0);
        assert_eq!(r, Rect::new(5.0, 6.0, 105.0, 56.0));
    }

    #[test]
    fn mid_x_is_horizontal_center() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        assert_eq!(r.mid_x(), 960.0);

        let offset = Rect::new(1920.0, 0.0, 3840.0, 1080.0);
        assert_eq!(offset.mid_x(), 2880.0);
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(100.0, 100.0)));
        assert!(r.contains(Point::new(50.0, 50.0)));
        assert!(!r.contains(Point::new(100.1, 50.0)));
    }
}
