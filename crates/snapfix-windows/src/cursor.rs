use snapfix_core::{Point, ProbeError, ProbeResult};
use windows::Win32::Foundation::POINT;
use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

/// Returns the current pointer position in screen coordinates.
pub fn position() -> ProbeResult<Point> {
    let mut point = POINT::default();
    // SAFETY: GetCursorPos writes the cursor position into the struct.
    unsafe { GetCursorPos(&mut point) }.map_err(|e| ProbeError::Window(e.to_string()))?;
    Ok(Point::new(f64::from(point.x), f64::from(point.y)))
}
