use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

fn run(content: &str, extra: &[&str]) -> std::process::Output {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();

    Command::new(env!("CARGO_BIN_EXE_geoshm"))
        .arg(file.path())
        .args(extra)
        .output()
        .unwrap()
}

#[test]
fn summary_lists_boundary_and_centroid() {
    let output = run(geoshm::SAMPLE_GEOJSON, &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Turbines: 5"));
    assert!(stdout.contains("WTG-01"));
    assert!(stdout.contains("Centroid:"));
}

#[test]
fn csv_flag_prints_export() {
    let output = run(geoshm::SAMPLE_GEOJSON, &["--csv"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("id,name,latitude,longitude"));
    assert_eq!(stdout.lines().count(), 6);
}

#[test]
fn rejection_exits_with_message() {
    let output = run(r#"{"type":"GeometryCollection","geometries":[]}"#, &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("FeatureCollection"));
}
