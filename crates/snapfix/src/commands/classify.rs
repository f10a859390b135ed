use clap::Args;

use snapfix_core::config::Config;
use snapfix_core::snap::{self, SnapSide};
use snapfix_core::{Rect, ScreenArea, Thickness, padding};

/// Arguments for the `classify` subcommand.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Window outer rectangle as left,top,right,bottom
    #[arg(long)]
    rect: String,
    /// Working area as left,top,right,bottom
    #[arg(long = "work-area")]
    work_area: String,
    /// Full monitor bounds as left,top,right,bottom (defaults to the working area)
    #[arg(long)]
    bounds: Option<String>,
}

/// Classifies a rectangle offline, using the configured tolerances.
///
/// Calibration aid: paste geometry from the log (or from `watch`) and see
/// which snap class it lands in and what padding would be derived.
pub fn execute(args: &ClassifyArgs, config: &Config) {
    let Some(rect) = parse_rect(&args.rect) else {
        eprintln!("Error: --rect must be left,top,right,bottom");
        std::process::exit(2);
    };
    let Some(work_area) = parse_rect(&args.work_area) else {
        eprintln!("Error: --work-area must be left,top,right,bottom");
        std::process::exit(2);
    };
    let bounds = match &args.bounds {
        Some(s) => match parse_rect(s) {
            Some(r) => r,
            None => {
                eprintln!("Error: --bounds must be left,top,right,bottom");
                std::process::exit(2);
            }
        },
        None => work_area,
    };

    let area = ScreenArea {
        name: "offline".into(),
        bounds,
        work_area,
    };

    let side = snap::classify(&rect, &area, &config.snap.tolerances);
    let target = snap::build_target_rect(side, &area, &rect);
    let pad = match side {
        SnapSide::None => Thickness::DEFAULT_BORDER,
        _ => padding::derive(&rect, &target, side, &Thickness::DEFAULT_BORDER),
    };

    println!("side:    {side}");
    println!(
        "target:  {},{} {},{}",
        target.left, target.top, target.right, target.bottom
    );
    println!(
        "padding: L:{} T:{} R:{} B:{}",
        pad.left, pad.top, pad.right, pad.bottom
    );
}

/// Parses "left,top,right,bottom" into a normalized rectangle.
fn parse_rect(s: &str) -> Option<Rect> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;
    let [left, top, right, bottom] = parts.as_slice() else {
        return None;
    };
    if left > right || top > bottom {
        return None;
    }
    Some(Rect::new(*left, *top, *right, *bottom))
}
