//! Integration tests for penrose-p3 CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Path to the penrose-p3 binary built for this test run.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_penrose-p3"))
}

/// Unique scratch file path for one test.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("penrose-p3-{}-{}", std::process::id(), name))
}

#[test]
fn help_command_shows_usage() {
    let output = Command::new(binary_path())
        .arg("help")
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert!(stderr.contains("generate"), "Should mention generate command");
    assert!(stderr.contains("logo"), "Should mention logo command");
    assert!(stderr.contains("stats"), "Should mention stats command");
}

#[test]
fn generate_writes_svg_to_stdout() {
    let output = Command::new(binary_path())
        .args(["generate", "-n", "3", "--seed", "1"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<?xml"), "Should have XML declaration");
    assert_eq!(stdout.matches("<svg").count(), 1, "Should have one SVG root");
    assert_eq!(stdout.matches("<path").count(), 25, "Reflected 3-generation tiling has 25 rhombuses");
    assert!(stdout.trim_end().ends_with("</svg>"));
}

#[test]
fn triangles_without_reflection() {
    let output = Command::new(binary_path())
        .args(["generate", "-n", "3", "--triangles", "--no-reflect"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("<path").count(), 21);
}

#[test]
fn sun_shape_draws_each_rhombus_once() {
    let output = Command::new(binary_path())
        .args(["generate", "--shape", "sun", "-n", "0"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("<path").count(), 10);
}

#[test]
fn drop_removes_tiles() {
    let output = Command::new(binary_path())
        .args(["generate", "-n", "3", "--drop", "0..5"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("<path").count(), 20);
}

#[test]
fn more_generations_thinner_strokes() {
    let stroke = |ngen: &str| -> f64 {
        let output = Command::new(binary_path())
            .args(["generate", "-n", ngen])
            .output()
            .expect("Failed to execute command");
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let start = stdout.find("stroke-width: ").expect("stroke width") + "stroke-width: ".len();
        let end = start + stdout[start..].find(';').expect("terminated stroke width");
        stdout[start..end].parse().expect("numeric stroke width")
    };

    assert!(stroke("4") < stroke("3"));
}

#[test]
fn logo_writes_svg_and_png() {
    let svg_path = temp_path("logo.svg");
    let png_path = temp_path("logo.png");

    let output = Command::new(binary_path())
        .args([
            "logo",
            "-o",
            svg_path.to_str().unwrap(),
            "--png",
            png_path.to_str().unwrap(),
            "--png-size",
            "300",
        ])
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "logo failed: {}", stderr);
    assert!(stderr.contains("Wrote:"));

    let svg = fs::read_to_string(&svg_path).expect("SVG written");
    assert!(svg.contains("stroke:#000"));
    assert!(svg.contains(r##"fill="#fff""##));

    let png = image::open(&png_path).expect("PNG written").to_rgba8();
    // Autocropped from a 300x300 canvas.
    assert!(png.width() <= 300 && png.height() <= 300);
    assert!(png.width() < 300 || png.height() < 300);

    let _ = fs::remove_file(&svg_path);
    let _ = fs::remove_file(&png_path);
}

#[test]
fn config_file_is_applied() {
    let config_path = temp_path("config.yaml");
    fs::write(&config_path, "stroke-colour: \"#abc\"\nLtile-colour: \"#123\"\nunknown-key: 3\n").unwrap();

    let output = Command::new(binary_path())
        .args(["generate", "-n", "2", "-c", config_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let _ = fs::remove_file(&config_path);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("stroke:#abc"));
    assert!(stdout.contains(r##"fill="#123""##));
}

#[test]
fn stats_outputs_json() {
    let output = Command::new(binary_path())
        .args(["stats", "-n", "4"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["generations"][4]["tiles"], 55);
    assert_eq!(json["final_tiles"], 61);
}

#[test]
fn invalid_option_fails() {
    let output = Command::new(binary_path())
        .args(["generate", "-n", "many"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid value for -n"));
}
