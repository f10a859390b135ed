/// Per-side padding values, in device-independent pixels.
///
/// Used for the chrome container's padding. Values applied to a window are
/// never negative; see [`Thickness::is_non_negative`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Thickness {
    /// The fixed chrome border applied when a window is not snapped.
    ///
    /// The bottom side is thinner: the resize grip region already adds
    /// visual weight there.
    pub const DEFAULT_BORDER: Thickness = Thickness {
        left: 7.0,
        top: 7.0,
        right: 7.0,
        bottom: 5.0,
    };

    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Uniform padding on all four sides.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn add(&self, other: &Thickness) -> Thickness {
        Thickness {
            left: self.left + other.left,
            top: self.top + other.top,
            right: self.right + other.right,
            bottom: self.bottom + other.bottom,
        }
    }

    /// Returns whether all four sides are zero or positive.
    pub fn is_non_negative(&self) -> bool {
        self.left >= 0.0 && self.top >= 0.0 && self.right >= 0.0 && self.bottom >= 0.0
    }
}
