mod common;

use common::{Fixture, SLICED, compare, read};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn identical_files_exit_zero() {
    let fx = Fixture::new();
    let a = fx.write("ref.gcode", SLICED);
    let b = fx.write("out.gcode", SLICED);

    compare()
        .arg(&a)
        .arg(&b)
        .assert()
        .code(0)
        .stdout("")
        .stderr(contains("Compared 11 lines; differences: 0"));
}

#[test]
fn same_path_twice_has_no_differences() {
    let fx = Fixture::new();
    let a = fx.write("ref.gcode", SLICED);

    compare()
        .arg(&a)
        .arg(&a)
        .assert()
        .success()
        .stderr(contains("differences: 0"));
}

#[test]
fn one_changed_line_is_reported_with_line_numbers() {
    let fx = Fixture::new();
    let a = fx.write("ref.gcode", SLICED);
    let b = fx.write("out.gcode", SLICED.replace("G1 X20 Y10", "G1 X21 Y10"));

    compare()
        .arg(&a)
        .arg(&b)
        .assert()
        .code(1)
        .stdout("REF[10]: G1 X20 Y10 E0.5\nOUT[10]: G1 X21 Y10 E0.5\n\n")
        .stderr(contains("Compared 11 lines; differences: 1"));
}

#[test]
fn shorter_file_reports_dashes() {
    let fx = Fixture::new();
    let a = fx.write("ref.gcode", "G28\nG90\nM84\n");
    let b = fx.write("out.gcode", "G28\n");

    compare()
        .arg(&a)
        .arg(&b)
        .assert()
        .code(1)
        .stdout("REF[2]: G90\nOUT[-]: \n\nREF[3]: M84\nOUT[-]: \n\n")
        .stderr(contains("Compared 3 lines; differences: 2"));
}

#[test]
fn after_config_uses_absolute_line_numbers() {
    let fx = Fixture::new();
    let a = fx.write("ref.gcode", SLICED);
    // Two extra header lines shift the marker to line 6.
    let generated = SLICED
        .replace(
            "; layer_height = 0.2\n",
            "; layer_height = 0.2\n; extra = 1\n; extra = 2\n",
        )
        .replace("G1 X10 Y10", "G1 X11 Y10");
    let b = fx.write("out.gcode", generated);

    compare()
        .args(["--after-config"])
        .arg(&a)
        .arg(&b)
        .assert()
        .code(1)
        .stdout("REF[9]: G1 X10 Y10 E0.5\nOUT[11]: G1 X11 Y10 E0.5\n\n")
        .stderr(contains("Compared 7 lines; differences: 1"));
}

#[test]
fn after_config_skips_header_differences() {
    let fx = Fixture::new();
    let a = fx.write("ref.gcode", SLICED);
    let b = fx.write("out.gcode", SLICED.replace("OrcaSlicer", "OrcaSlicer 2.1"));

    compare().arg(&a).arg(&b).assert().code(1);
    compare()
        .arg("--after-config")
        .arg(&a)
        .arg(&b)
        .assert()
        .code(0)
        .stderr(contains("Compared 7 lines; differences: 0"));
}

#[test]
fn after_config_without_marker_compares_from_start() {
    let fx = Fixture::new();
    let a = fx.write("ref.gcode", "G28\nG1 X1\n");
    let b = fx.write("out.gcode", "G29\nG1 X1\n");

    let expected = "REF[1]: G28\nOUT[1]: G29\n\n";
    compare().arg(&a).arg(&b).assert().code(1).stdout(expected);
    compare()
        .arg("--after-config")
        .arg(&a)
        .arg(&b)
        .assert()
        .code(1)
        .stdout(expected);
}

#[test]
fn out_file_receives_report_and_stderr_keeps_summary() {
    let fx = Fixture::new();
    let a = fx.write("ref.gcode", "G28\n");
    let b = fx.write("out.gcode", "G28 \n");
    let report = fx.path("diff.txt");

    compare()
        .arg(&a)
        .arg(&b)
        .arg("--out")
        .arg(&report)
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("Compared 1 lines; differences: 1"));

    assert_eq!(read(&report), "REF[1]: G28\nOUT[1]: G28 \n\n");
}

#[test]
fn json_format_emits_document() {
    let fx = Fixture::new();
    let a = fx.write("ref.gcode", "G28\nM84\n");
    let b = fx.write("out.gcode", "G28\nM84");

    let assert = compare()
        .args(["--format", "json"])
        .arg(&a)
        .arg(&b)
        .assert()
        .code(1);

    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(value["differences"], 1);
    assert_eq!(value["records"][0]["reference_line"], 2);
    assert_eq!(value["records"][0]["generated_line"], 2);
}

#[test]
fn missing_argument_is_usage_error() {
    let fx = Fixture::new();
    let a = fx.write("ref.gcode", SLICED);

    compare()
        .arg(&a)
        .assert()
        .code(2)
        .stderr(contains("Usage"));
}

#[test]
fn unreadable_input_is_io_failure() {
    let fx = Fixture::new();
    let a = fx.write("ref.gcode", SLICED);

    compare()
        .arg(&a)
        .arg(fx.path("missing.gcode"))
        .assert()
        .code(3)
        .stderr(contains("Error: failed to read").and(contains("missing.gcode")))
        .stderr(contains("Compared").not());
}

#[test]
fn invalid_config_is_user_error() {
    let fx = Fixture::new();
    let a = fx.write("ref.gcode", SLICED);
    let config = fx.write("gcode-check.yaml", "marker: \"\"\n");

    compare()
        .arg("--config")
        .arg(&config)
        .arg(&a)
        .arg(&a)
        .assert()
        .code(2)
        .stderr(contains("invalid configuration"));
}
