#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A slicer-style file: three header lines, the marker on line 4, then body.
pub const SLICED: &str = "; HEADER_BLOCK_START\n\
                          ; generated by OrcaSlicer\n\
                          ; layer_height = 0.2\n\
                          ; CONFIG_BLOCK_END\n\
                          G28\n\
                          G90\n\
                          M83\n\
                          G1 Z0.2 F720\n\
                          G1 X10 Y10 E0.5\n\
                          G1 X20 Y10 E0.5\n\
                          M84\n";

pub struct Fixture {
    tmp: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.tmp.path().join(name)
    }

    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("write fixture");
        path
    }
}

pub fn compare() -> Command {
    let mut cmd = cargo_bin_cmd!("gcode-compare");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn extract() -> Command {
    let mut cmd = cargo_bin_cmd!("gcode-extract");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read output")
}
