mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "snapfix",
    version,
    about = "Snap-assist padding fixer for borderless custom-chrome windows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Show the taskbar's bounds, docked edge, and auto-hide state
    Taskbar,
    /// Show the monitor bounds and working area for a window
    Monitor(commands::monitor::MonitorArgs),
    /// Classify a window rectangle against a working area
    Classify(commands::classify::ClassifyArgs),
    /// Watch a window and print live snap classifications
    Watch(commands::watch::WatchArgs),
    /// Fire the taskbar reveal key sequence once
    Reveal,
}

fn main() {
    let cli = Cli::parse();

    let config = snapfix_core::config::load();
    snapfix_core::log::init(&config.log);

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Taskbar => commands::taskbar::execute(),
        Commands::Monitor(args) => commands::monitor::execute(&args),
        Commands::Classify(args) => commands::classify::execute(&args, &config),
        Commands::Watch(args) => commands::watch::execute(&args, &config),
        Commands::Reveal => commands::reveal::execute(&config),
    }
}
