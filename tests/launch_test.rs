#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// A temporary home directory holding `pose-config.yml`, a project
/// directory and fake executables.
struct Sandbox {
    home: assert_fs::TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let home = assert_fs::TempDir::new().unwrap();
        home.child("work/shop").create_dir_all().unwrap();
        Self { home }
    }

    fn project_dir(&self) -> PathBuf {
        self.home.path().join("work/shop")
    }

    /// Marker file the fake compose tool creates when it runs.
    fn marker(&self) -> PathBuf {
        self.home.path().join("compose-ran")
    }

    fn write_config(&self, yaml: &str) {
        self.home.child("pose-config.yml").write_str(yaml).unwrap();
    }

    /// Write an executable shell script into the sandbox and return its path.
    fn script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.home.path().join("bin").join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Fake compose tool: records that it ran, prints selected variables
    /// and its arguments, then exits with `exit_code`.
    fn compose(&self, exit_code: i32) -> PathBuf {
        self.script(
            "fake-compose",
            &format!(
                "touch '{}'\necho \"DB_HOST=$DB_HOST\"\necho \"API_KEY=$API_KEY\"\necho \"ARGS=$*\"\nexit {exit_code}",
                self.marker().display()
            ),
        )
    }

    /// Run pose from the project directory.
    fn pose(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("pose");
        cmd.current_dir(self.project_dir())
            .env("HOME", self.home.path())
            .env_remove("POSE_CONFIG")
            .env_remove("POSE_LOG")
            .env_remove("DB_HOST")
            .env_remove("API_KEY");
        cmd
    }
}

fn settings(compose: &Path, cli: Option<&Path>) -> String {
    let mut out = format!("settings:\n  command: {}\n", compose.display());
    if let Some(cli) = cli {
        out.push_str(&format!("  cli: {}\n", cli.display()));
    }
    out
}

#[test]
fn inline_values_reach_downstream_tool() {
    let sb = Sandbox::new();
    let compose = sb.compose(0);
    sb.write_config(&format!(
        "{}projects:\n  shop:\n    inline:\n      DB_HOST: localhost\n      API_KEY: 1234\n",
        settings(&compose, None)
    ));

    sb.pose()
        .args(["up", "-d", "--build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DB_HOST=localhost"))
        .stdout(predicate::str::contains("API_KEY=1234"))
        .stdout(predicate::str::contains("ARGS=up -d --build"));
}

#[test]
fn help_flag_is_forwarded() {
    let sb = Sandbox::new();
    let compose = sb.compose(0);
    sb.write_config(&settings(&compose, None));

    sb.pose()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ARGS=--help"));
}

#[test]
fn leading_separator_is_forwarded() {
    let sb = Sandbox::new();
    let compose = sb.compose(0);
    sb.write_config(&settings(&compose, None));

    sb.pose()
        .args(["--", "up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ARGS=-- up"));
}

#[test]
fn exit_status_mirrors_downstream_tool() {
    let sb = Sandbox::new();
    let compose = sb.compose(3);
    sb.write_config(&settings(&compose, None));

    sb.pose().arg("ps").assert().code(3);
}

#[test]
fn unknown_project_runs_with_empty_environment() {
    let sb = Sandbox::new();
    let compose = sb.compose(0);
    sb.write_config(&format!(
        "{}projects:\n  blog:\n    inline:\n      DB_HOST: blog-db\n",
        settings(&compose, None)
    ));

    sb.pose()
        .assert()
        .success()
        .stdout(predicate::str::contains("DB_HOST=\n"));
    assert!(sb.marker().exists());
}

#[test]
fn missing_downstream_tool_is_silent_success() {
    let sb = Sandbox::new();
    sb.write_config(
        "settings:\n  command: pose-no-such-compose-binary\nprojects:\n  shop:\n    inline:\n      A: \"1\"\n",
    );

    sb.pose()
        .arg("up")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_config_aborts() {
    let sb = Sandbox::new();

    sb.pose()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read config file"))
        .stderr(predicate::str::contains("pose-config.yml"));
}

#[test]
fn malformed_config_aborts_before_launch() {
    let sb = Sandbox::new();
    let compose = sb.compose(0);
    sb.write_config(&format!(
        "{}projects:\n  shop:\n    inline: [not, a, map]\n",
        settings(&compose, None)
    ));

    sb.pose()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
    assert!(!sb.marker().exists(), "compose must not run");
}

#[test]
fn auth_failure_aborts_before_launch() {
    let sb = Sandbox::new();
    let compose = sb.compose(0);
    let oc = sb.script("fake-oc", "echo 'error: You must be logged in to the server' >&2\nexit 1");
    sb.write_config(&format!(
        "{}projects:\n  shop:\n    inline:\n      DB_HOST: localhost\n    remoteBackends:\n      - endpoint: api.dev.example.com:8443\n        namespace: shop\n        mapping:\n          db:\n            API_KEY: key\n",
        settings(&compose, Some(&oc))
    ));

    sb.pose()
        .arg("up")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"))
        .stderr(predicate::str::contains("must be logged in"))
        .stdout(predicate::str::contains("DB_HOST").not());
    assert!(!sb.marker().exists(), "compose must not run");
}

#[test]
fn unreachable_secret_store_aborts_before_launch() {
    let sb = Sandbox::new();
    let compose = sb.compose(0);
    let oc = sb.script("fake-oc", "echo sha256~token");
    sb.write_config(&format!(
        "{}projects:\n  shop:\n    remoteBackends:\n      - endpoint: 127.0.0.1:1\n        namespace: shop\n        mapping:\n          db:\n            API_KEY: key\n",
        settings(&compose, Some(&oc))
    ));

    sb.pose()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Secret store request to 127.0.0.1:1 failed"));
    assert!(!sb.marker().exists(), "compose must not run");
}

#[test]
fn inline_only_project_never_runs_secret_cli() {
    let sb = Sandbox::new();
    let compose = sb.compose(0);
    let oc = sb.script("fake-oc", "exit 1");
    sb.write_config(&format!(
        "{}projects:\n  shop:\n    inline:\n      DB_HOST: localhost\n",
        settings(&compose, Some(&oc))
    ));

    sb.pose()
        .assert()
        .success()
        .stdout(predicate::str::contains("DB_HOST=localhost"));
}

#[test]
fn config_path_can_be_overridden() {
    let sb = Sandbox::new();
    let compose = sb.compose(0);
    let alt = sb.home.child("alt.yml");
    alt.write_str(&format!(
        "{}projects:\n  shop:\n    inline:\n      DB_HOST: from-alt\n",
        settings(&compose, None)
    ))
    .unwrap();

    sb.pose()
        .env("POSE_CONFIG", alt.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DB_HOST=from-alt"));
}
