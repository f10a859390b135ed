use clap::Args;

/// Arguments for the `monitor` subcommand.
#[derive(Args)]
pub struct MonitorArgs {
    /// Window handle (decimal or hex with 0x prefix); defaults to the
    /// foreground window
    #[arg(long)]
    pub hwnd: Option<String>,
}

/// Prints the monitor snapshot the adjuster would see for a window.
#[cfg(windows)]
pub fn execute(args: &MonitorArgs) {
    use snapfix_windows::{Window, cursor, dpi};

    dpi::enable_dpi_awareness();

    let window = match &args.hwnd {
        Some(s) => Window::from_raw(super::parse_hwnd(s)),
        None => match Window::foreground() {
            Some(w) => w,
            None => {
                eprintln!("Error: no foreground window.");
                std::process::exit(1);
            }
        },
    };

    let area = match window.screen_area() {
        Ok(area) => area,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("window:    0x{:X} \"{}\"", window.raw(), window.title());
    println!("screen:    {}", area.name);
    println!(
        "bounds:    {},{} {},{}",
        area.bounds.left, area.bounds.top, area.bounds.right, area.bounds.bottom
    );
    println!(
        "work area: {},{} {},{}",
        area.work_area.left, area.work_area.top, area.work_area.right, area.work_area.bottom
    );

    if let Ok(point) = cursor::position() {
        let inside = area.work_area.contains(point);
        println!("cursor:    {},{} (in work area: {inside})", point.x, point.y);
    }
}

#[cfg(not(windows))]
pub fn execute(_args: &MonitorArgs) {
    eprintln!("The monitor probe requires Windows.");
}
