pub mod classify;
pub mod init;
pub mod monitor;
pub mod reveal;
pub mod taskbar;
pub mod watch;

/// Parses a window handle from a string (supports decimal and 0x hex).
#[cfg(windows)]
pub fn parse_hwnd(s: &str) -> usize {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        usize::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.unwrap_or_else(|_| {
        eprintln!("Error: invalid window handle: {s}");
        std::process::exit(2);
    })
}
