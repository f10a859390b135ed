//! Derives chrome padding from a window's outer rectangle and a snap target.

use crate::snap::SnapSide;
use crate::{Rect, Thickness};

/// Computes the padding that insets `outer` down to `target`.
///
/// Each side is clamped to zero: the chrome container can only shrink the
/// visible area, never grow it. For half and vertical snaps the sides not
/// touching a screen edge are reset to the default border so the decorative
/// frame stays visually consistent on the free side. `Fill` keeps all four
/// derived values.
///
/// If a component still ends up negative the whole result is rejected and
/// the default border is returned instead; a window must never be handed
/// negative padding.
pub fn derive(outer: &Rect, target: &Rect, side: SnapSide, default: &Thickness) -> Thickness {
    let mut padding = Thickness {
        left: (target.left - outer.left).max(0.0),
        top: (target.top - outer.top).max(0.0),
        right: (outer.right - target.right).max(0.0),
        bottom: (outer.bottom - target.bottom).max(0.0),
    };

    match side {
        SnapSide::LeftHalf => padding.right = default.right,
        SnapSide::RightHalf => padding.left = default.left,
        SnapSide::UpDown => {
            padding.left = default.left;
            padding.right = default.right;
        }
        SnapSide::Fill | SnapSide::None => {}
    }

    if padding.is_non_negative() {
        padding
    } else {
        *default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: Thickness = Thickness::DEFAULT_BORDER;

    #[test]
    fn fill_insets_overhang_on_all_sides() {
        // Outer rect overshoots the work area by the invisible border.
        let outer = Rect::new(-8.0, -8.0, 1928.0, 1088.0);
        let target = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let p = derive(&outer, &target, SnapSide::Fill, &DEFAULT);
        assert_eq!(p, Thickness::uniform(8.0));
    }

    #[test]
    fn components_clamp_to_zero() {
        // Outer sits fully inside the target: nothing to trim.
        let outer = Rect::new(10.0, 10.0, 1910.0, 1070.0);
        let target = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let p = derive(&outer, &target, SnapSide::Fill, &DEFAULT);
        assert_eq!(p, Thickness::uniform(0.0));
        assert!(p.is_non_negative());
    }

    #[test]
    fn left_half_keeps_default_on_free_side() {
        let outer = Rect::new(-8.0, -8.0, 968.0, 1088.0);
        let target = Rect::new(0.0, 0.0, 960.0, 1080.0);
        let p = derive(&outer, &target, SnapSide::LeftHalf, &DEFAULT);
        assert_eq!(p.left, 8.0);
        assert_eq!(p.right, DEFAULT.right);
    }

    #[test]
    fn right_half_keeps_default_on_free_side() {
        let outer = Rect::new(952.0, -8.0, 1928.0, 1088.0);
        let target = Rect::new(960.0, 0.0, 1920.0, 1080.0);
        let p = derive(&outer, &target, SnapSide::RightHalf, &DEFAULT);
        assert_eq!(p.left, DEFAULT.left);
        assert_eq!(p.right, 8.0);
    }

    #[test]
    fn up_down_keeps_default_on_both_free_sides() {
        let outer = Rect::new(400.0, -8.0, 900.0, 1088.0);
        let target = Rect::new(400.0, 0.0, 900.0, 1080.0);
        let p = derive(&outer, &target, SnapSide::UpDown, &DEFAULT);
        assert_eq!(p.left, DEFAULT.left);
        assert_eq!(p.right, DEFAULT.right);
        assert_eq!(p.top, 8.0);
        assert_eq!(p.bottom, 8.0);
    }

    #[test]
    fn fill_never_resets_sides() {
        let outer = Rect::new(-3.0, -3.0, 1923.0, 1083.0);
        let target = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let p = derive(&outer, &target, SnapSide::Fill, &DEFAULT);
        assert_eq!(p, Thickness::uniform(3.0));
    }

    #[test]
    fn derived_padding_is_always_non_negative() {
        let target = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let outers = [
            Rect::new(-8.0, -8.0, 1928.0, 1088.0),
            Rect::new(50.0, 50.0, 1000.0, 800.0),
            Rect::new(-100.0, 200.0, 500.0, 300.0),
        ];
        for outer in &outers {
            for side in [
                SnapSide::None,
                SnapSide::Fill,
                SnapSide::LeftHalf,
                SnapSide::RightHalf,
                SnapSide::UpDown,
            ] {
                assert!(derive(outer, &target, side, &DEFAULT).is_non_negative());
            }
        }
    }
}
