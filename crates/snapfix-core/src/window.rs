use crate::{ProbeResult, Rect, ScreenArea, Thickness};

/// The host window surface the padding adjuster operates on.
///
/// The embedding application implements this for its top-level window; the
/// platform crate supplies the geometry half for Win32 hosts. Keeping the
/// adjuster behind this seam means it can be unit tested against an
/// in-memory fake instead of a real display.
pub trait ChromeWindow {
    /// The window's current outer rectangle in screen coordinates,
    /// including any invisible resize borders.
    fn outer_rect(&self) -> ProbeResult<Rect>;

    /// A fresh snapshot of the hosting monitor's bounds and working area.
    fn screen_area(&self) -> ProbeResult<ScreenArea>;

    /// Whether the window currently uses borderless custom chrome.
    /// Adjustments are skipped entirely for normally-framed windows.
    fn is_chrome_styled(&self) -> bool;

    /// Current padding on the designated chrome container.
    fn padding(&self) -> Thickness;

    /// Writes new padding to the chrome container. A single,
    /// immediately-visible assignment; no transactional semantics.
    fn set_padding(&self, padding: Thickness);
}
