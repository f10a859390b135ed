use snapfix_core::config::Config;

/// Fires the taskbar reveal key sequence once.
///
/// Verifies that the summon/dismiss chords work against the installed
/// shell version, independent of pointer proximity.
#[cfg(windows)]
pub fn execute(config: &Config) {
    use snapfix_core::{ProbeError, ShellProbe, TaskbarRevealer};
    use snapfix_windows::{KeySender, Taskbar, dpi};

    dpi::enable_dpi_awareness();

    match Taskbar.taskbar() {
        Ok(info) => {
            if !info.auto_hide {
                println!("Taskbar is not set to auto-hide; revealing anyway.");
            }
            println!("Revealing {} taskbar on {}...", info.edge, info.screen_name);
            TaskbarRevealer::new(Taskbar, KeySender, config.reveal.clone()).reveal();
            println!("Done.");
        }
        Err(ProbeError::TaskbarNotFound) => println!("No taskbar found; nothing to reveal."),
        Err(e) => eprintln!("Error: {e}"),
    }
}

#[cfg(not(windows))]
pub fn execute(_config: &Config) {
    eprintln!("The taskbar reveal requires Windows.");
}
