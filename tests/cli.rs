use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shapecanvas_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shapecanvas").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_prints_usage() {
    let home = TempDir::new().unwrap();
    shapecanvas_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("origin-centered canvas"));
}

#[test]
fn lists_descriptions_and_perimeters() {
    let home = TempDir::new().unwrap();
    shapecanvas_cmd(&home)
        .args([
            "--shape",
            "circle:0,0,10",
            "--shape",
            "square:0,0,20",
            "--shape",
            "triangle:0,0,10,0,0,10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Circle (center: x : 0, y : 0, radius: 10) - perimeter: 62.83",
        ))
        .stdout(predicate::str::contains(
            "2. Square (origin: x : 0, y : 0, side: 20) - perimeter: 80.00",
        ))
        .stdout(predicate::str::contains("perimeter: 34.14"));
}

#[test]
fn negative_radius_is_reported_and_skipped() {
    let home = TempDir::new().unwrap();
    shapecanvas_cmd(&home)
        .args(["--shape", "circle:0,0,-5", "--shape", "square:1,1,2"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("1. Square"))
        .stdout(predicate::str::contains("Circle").not())
        .stderr(predicate::str::contains("invalid measurement: radius = -5"));
}

#[test]
fn empty_parameter_is_rejected() {
    let home = TempDir::new().unwrap();
    shapecanvas_cmd(&home)
        .args(["--shape", "rectangle:1,,2,3,4"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Rectangle").not())
        .stderr(predicate::str::contains("parameter '' is not a number"));
}

#[test]
fn trace_shows_square_as_rectangle_stroke() {
    let home = TempDir::new().unwrap();
    shapecanvas_cmd(&home)
        .args([
            "--width",
            "200",
            "--height",
            "200",
            "--trace",
            "--shape",
            "square:0,0,20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("stroke_rect 100 100 20 -20"));
}

#[test]
fn trace_prints_only_the_final_redraw() {
    let home = TempDir::new().unwrap();
    shapecanvas_cmd(&home)
        .args([
            "--trace",
            "--shape",
            "circle:0,0,5",
            "--shape",
            "circle:10,10,5",
            "--shape",
            "circle:-10,-10,5",
        ])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.lines().filter(|line| line.starts_with("arc ")).count() == 3
        }));
}

#[test]
fn config_file_sets_canvas_size() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[canvas]\nwidth = 300\nheight = 100\n").unwrap();

    shapecanvas_cmd(&home)
        .arg("--config")
        .arg(&config)
        .args(["--trace", "--shape", "circle:0,0,5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arc 150 50 5"));
}

#[test]
fn missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    shapecanvas_cmd(&home)
        .args(["--config", "/nonexistent/shapecanvas.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn writes_png_output() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("canvas.png");

    shapecanvas_cmd(&home)
        .arg("--output")
        .arg(&out)
        .args(["--shape", "rectangle:-50,-20,40,100"])
        .assert()
        .success();

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}
