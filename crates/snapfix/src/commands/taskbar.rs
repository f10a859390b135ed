/// Prints a live snapshot of the system taskbar.
#[cfg(windows)]
pub fn execute() {
    use snapfix_core::{ProbeError, ShellProbe};

    snapfix_windows::dpi::enable_dpi_awareness();

    match snapfix_windows::Taskbar.taskbar() {
        Ok(info) => {
            println!("screen:    {}", info.screen_name);
            println!("edge:      {}", info.edge);
            println!(
                "bounds:    {},{} {},{}",
                info.bounds.left, info.bounds.top, info.bounds.right, info.bounds.bottom
            );
            println!("auto-hide: {}", info.auto_hide);
        }
        Err(ProbeError::TaskbarNotFound) => println!("No taskbar found."),
        Err(e) => eprintln!("Error: {e}"),
    }
}

#[cfg(not(windows))]
pub fn execute() {
    eprintln!("The taskbar probe requires Windows.");
}
