use std::process::Command;

fn snapfix(args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_snapfix"));
    cmd.args(args);
    cmd.output().expect("failed to execute snapfix")
}

#[test]
fn help_exits_successfully() {
    // Act
    let output = snapfix(&["--help"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("padding fixer"));
}

#[test]
fn version_exits_successfully() {
    // Act
    let output = snapfix(&["--version"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("snapfix"));
}

#[test]
fn classify_detects_fill() {
    // Act
    let output = snapfix(&[
        "classify",
        "--rect",
        "0,0,1920,1080",
        "--work-area",
        "0,0,1920,1080",
    ]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("side:    fill"));
}

#[test]
fn classify_detects_left_half_with_midline_slack() {
    // Act
    let output = snapfix(&[
        "classify",
        "--rect",
        "0,0,958,1080",
        "--work-area",
        "0,0,1920,1080",
    ]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("side:    left-half"));
}

#[test]
fn classify_falls_back_to_bounds() {
    // Maximized against the full display: the work-area pass misses but
    // the bounds pass classifies it as fill.
    let output = snapfix(&[
        "classify",
        "--rect",
        "0,0,1920,1120",
        "--work-area",
        "0,0,1920,1080",
        "--bounds",
        "0,0,1920,1120",
    ]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("side:    fill"));
}

#[test]
fn classify_rejects_malformed_rect() {
    // Act
    let output = snapfix(&["classify", "--rect", "bogus", "--work-area", "0,0,1,1"]);

    // Assert
    assert!(!output.status.success());
}
