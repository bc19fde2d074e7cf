/// Smoke tests to verify the binary runs without panicking
use std::path::PathBuf;
use std::process::{Command, Output};

fn conway_coro(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_conway_coro"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute conway_coro")
}

fn pattern_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("conway_smoke_{}_{}.lif", std::process::id(), name));
    std::fs::write(&path, contents).expect("Failed to write pattern file");
    path
}

/// Splits headless output into one text block per generation.
fn frames(stdout: &str) -> Vec<&str> {
    stdout.split("\n\n").filter(|f| !f.trim().is_empty()).collect()
}

#[test]
fn binary_shows_help() {
    let output = conway_coro(&["-H"]);
    assert!(
        output.status.success(),
        "Binary failed to run -H: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("conway_coro"), "Help output should mention conway_coro");
    assert!(stdout.contains("klein"), "Help output should list the edge types");
}

#[test]
fn binary_shows_version() {
    let output = conway_coro(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn invalid_edge_fails_gracefully() {
    let output = conway_coro(&["-e", "sphere", "--headless", "1"]);
    assert!(!output.status.success(), "Unknown edge should return error status");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sphere"));
    assert!(!stderr.contains("panicked at"), "Unknown edge should not cause panic");
}

#[test]
fn invalid_sprite_size_fails_gracefully() {
    let output = conway_coro(&["-s", "3", "--headless", "1"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sprite size 3"));
    assert!(!stderr.contains("panicked at"));
}

#[test]
fn missing_pattern_file_fails_gracefully() {
    let output = conway_coro(&["-f", "/nonexistent/pattern.lif", "--headless", "1"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read pattern file"));
    assert!(!stderr.contains("panicked at"));
}

#[test]
fn headless_blinker_on_a_torus() {
    let path = pattern_file("blinker", "#Life 1.06\n0 0\n1 0\n2 0\n");
    let file = path.to_string_lossy().into_owned();

    for stepper in ["sync", "coro"] {
        let output = conway_coro(&[
            "-w", "40", "-h", "40", "-s", "8", "-e", "torus", "-o", "1,2", "-f", &file,
            "--headless", "2", "--stepper", stepper,
        ]);
        assert!(
            output.status.success(),
            "Headless run failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8_lossy(&output.stdout);
        let frames = frames(&stdout);
        assert_eq!(frames.len(), 3, "{stepper}: {stdout}");
        assert_eq!(frames[0], "generation 0: 3 alive\n.....\n.....\n.###.\n.....\n.....");
        assert_eq!(frames[1], "generation 1: 3 alive\n.....\n..#..\n..#..\n..#..\n.....");
        assert_eq!(frames[2], "generation 2: 3 alive\n.....\n.....\n.###.\n.....\n.....");
    }

    let _ = std::fs::remove_file(path);
}

#[test]
fn headless_skips_points_outside_the_board() {
    let path = pattern_file("outside", "#Life 1.06\n0 0\n-5 0\n100 100\n");
    let file = path.to_string_lossy().into_owned();

    let output = conway_coro(&["-w", "16", "-h", "16", "-s", "4", "-o", "0,0", "-f", &file, "--headless", "0"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(frames(&stdout), vec!["generation 0: 1 alive\n#...\n....\n....\n...."]);

    let _ = std::fs::remove_file(path);
}

#[test]
fn headless_stops_on_cycle_when_asked() {
    let path = pattern_file("block", "#Life 1.06\n0 0\n1 0\n0 1\n1 1\n");
    let file = path.to_string_lossy().into_owned();

    let output = conway_coro(&[
        "-w", "24", "-h", "24", "-s", "4", "-o", "2,2", "-f", &file, "--headless", "50",
        "--stop-on-cycle",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(frames(&stdout).len(), 2, "block repeats after one step: {stdout}");

    let _ = std::fs::remove_file(path);
}

#[test]
fn redirected_logs_are_plain_text() {
    let output = Command::new(env!("CARGO_BIN_EXE_conway_coro"))
        .args(["-w", "40", "-h", "40", "--headless", "0"])
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to execute conway_coro");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("simulation ready"), "info logs should reach stderr: {stderr}");
    assert!(!stderr.contains('\u{1b}'), "no color escapes when stderr is not a terminal");
}
