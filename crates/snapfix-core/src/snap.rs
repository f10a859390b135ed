//! Snap classification and target rectangle construction.
//!
//! Pure geometry: given a window's outer rectangle and the hosting monitor,
//! decide whether the host window manager has snapped it (fill, half, or
//! vertical stretch) and compute the ideal rectangle for that position.

use serde::{Deserialize, Serialize};

use crate::{Rect, ScreenArea};

/// How a window sits relative to the monitor's working area.
///
/// Recomputed on every adjustment and surfaced through the snap-transition
/// notification; never stored as authoritative state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapSide {
    /// Not snapped; the window keeps its default chrome border.
    None,
    /// Fills the entire working area (maximized).
    Fill,
    /// Snapped to the left half of the working area.
    LeftHalf,
    /// Snapped to the right half of the working area.
    RightHalf,
    /// Stretched to full working-area height at its current horizontal
    /// position (Shift+drag to top/bottom edge).
    UpDown,
}

impl std::fmt::Display for SnapSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Fill => "fill",
            Self::LeftHalf => "left-half",
            Self::RightHalf => "right-half",
            Self::UpDown => "up-down",
        };
        f.write_str(s)
    }
}

/// Tolerances for edge and midline proximity tests.
///
/// These are calibration values tuned against the host window manager's
/// observed snap geometry, not business rules. Outward slack is larger than
/// inward slack: a snapped window may overshoot a working-area edge by a few
/// pixels of drop-shadow border, but should never undershoot it by more than
/// a hair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapTolerances {
    /// Allowed overshoot past a working-area edge, in pixels.
    pub outward: f64,
    /// Allowed undershoot inside a working-area edge, in pixels.
    pub inward: f64,
    /// Allowed distance from the working area's horizontal midpoint, in
    /// pixels, when testing for half-snaps.
    pub midline: f64,
}

impl Default for SnapTolerances {
    fn default() -> Self {
        Self {
            outward: 8.1,
            inward: 1.1,
            midline: 10.0,
        }
    }
}

/// Classifies a window's outer rectangle against the hosting monitor.
///
/// Tests against the working area first. If that yields [`SnapSide::None`],
/// the same test runs against the full physical bounds: the host window
/// manager sizes maximized borderless windows against the entire display,
/// ignoring the working area.
pub fn classify(outer: &Rect, area: &ScreenArea, tol: &SnapTolerances) -> SnapSide {
    let side = classify_against(outer, &area.work_area, tol);
    if side != SnapSide::None {
        return side;
    }
    classify_against(outer, &area.bounds, tol)
}

/// Runs the proximity predicates against one reference rectangle.
fn classify_against(outer: &Rect, reference: &Rect, tol: &SnapTolerances) -> SnapSide {
    // Leading edges (left/top): overshoot means going below the reference
    // edge. Trailing edges (right/bottom): overshoot means going above it.
    let near = |edge: f64, reference_edge: f64, trailing: bool| -> bool {
        let delta = edge - reference_edge;
        if trailing {
            delta >= -tol.inward && delta <= tol.outward
        } else {
            delta >= -tol.outward && delta <= tol.inward
        }
    };

    let west = near(outer.left, reference.left, false);
    let north = near(outer.top, reference.top, false);
    let east = near(outer.right, reference.right, true);
    let south = near(outer.bottom, reference.bottom, true);

    let mid = reference.mid_x();
    let west_mid = (outer.left - mid).abs() <= tol.midline;
    let east_mid = (outer.right - mid).abs() <= tol.midline;

    if west && north && east && south {
        SnapSide::Fill
    } else if west && north && south && east_mid {
        SnapSide::LeftHalf
    } else if east && north && south && west_mid {
        SnapSide::RightHalf
    } else if north && south {
        SnapSide::UpDown
    } else {
        SnapSide::None
    }
}

/// Returns the ideal rectangle for a snap classification.
///
/// Half widths use floor/ceil so the two halves of an odd-width working area
/// tile it exactly without overlapping.
pub fn build_target_rect(side: SnapSide, area: &ScreenArea, original: &Rect) -> Rect {
    let wa = &area.work_area;
    match side {
        SnapSide::Fill => *wa,
        SnapSide::LeftHalf => {
            let width = (wa.width() / 2.0).floor();
            Rect::from_ltwh(wa.left, wa.top, width, wa.height())
        }
        SnapSide::RightHalf => {
            let width = (wa.width() / 2.0).floor();
            Rect::from_ltwh(wa.mid_x().ceil(), wa.top, width, wa.height())
        }
        SnapSide::UpDown => Rect::new(original.left, wa.top, original.right, wa.bottom),
        SnapSide::None => *original,
    }
}
