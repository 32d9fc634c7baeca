#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use nexevent::Event;
use tempfile::TempDir;

pub const FIXTURE: &str = include_str!("../fixtures/events.json");

pub fn fixture_events() -> Vec<Event> {
    serde_json::from_str(FIXTURE).expect("fixture should parse")
}

/// Runs the nexevent binary with config and data dirs inside a temp directory
pub struct NexEventTest {
    pub temp_dir: TempDir,
}

impl NexEventTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("events.json"), FIXTURE)
            .expect("Failed to write fixture");
        NexEventTest { temp_dir }
    }

    pub fn events_file(&self) -> PathBuf {
        self.temp_dir.path().join("events.json")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.temp_dir.path().join("config")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_nexevent"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("NEXEVENT_CONFIG_DIR", self.config_dir())
            .env("XDG_DATA_HOME", self.temp_dir.path().join("data"))
            .env_remove("NEXEVENT_API_URL")
            .env_remove("NEXEVENT_LOG")
            .output()
            .expect("Failed to execute nexevent command")
    }

    /// Run with `--file` pointing at the fixture
    pub fn run_with_fixture(&self, args: &[&str]) -> Output {
        let file = self.events_file();
        let file = file.to_string_lossy();
        let mut full: Vec<&str> = vec!["--file", &file];
        full.extend_from_slice(args);
        self.run(&full)
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        check_success(args, self.run(args))
    }

    pub fn fixture_success(&self, args: &[&str]) -> String {
        check_success(args, self.run_with_fixture(args))
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        check_failure(args, self.run(args))
    }

    pub fn fixture_failure(&self, args: &[&str]) -> String {
        check_failure(args, self.run_with_fixture(args))
    }
}

fn check_success(args: &[&str], output: Output) -> String {
    if !output.status.success() {
        panic!(
            "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
            args,
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn check_failure(args: &[&str], output: Output) -> String {
    assert!(
        !output.status.success(),
        "Expected command {:?} to fail, but it succeeded",
        args
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}
