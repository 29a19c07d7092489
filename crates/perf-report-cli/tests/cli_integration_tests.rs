// Dweve Perf Report - Tracker performance log reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end tests for the perf-report binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Test helper to create a perf-report command with a clean environment
fn report_cmd() -> Command {
    let mut cmd = Command::cargo_bin("perf-report").expect("Failed to find perf-report binary");
    cmd.env_remove("RUST_LOG").env_remove("PERF_REPORT_MAX_FILE_SIZE");
    cmd
}

// Test helper to write performance/logs.txt under `dir`
fn write_log(dir: &Path, content: &str) {
    let perf = dir.join("performance");
    fs::create_dir_all(&perf).expect("Failed to create performance dir");
    fs::write(perf.join("logs.txt"), content).expect("Failed to write log");
}

fn record(device: Option<&str>, threads: u64, ops: u64, t: [f64; 4]) -> String {
    let context = device
        .map(|d| {
            format!(
                r#""desktop_context":{{"schema":"iglu:com.snowplowanalytics.snowplow/desktop_context/jsonschema/1-0-0","data":{{"osType":"Linux","deviceModel":"{}"}}}},"#,
                d
            )
        })
        .unwrap_or_default();
    format!(
        r#"{{{}"results":{{"num_threads":{},"num_operations":{},"mocked_emitter_and_mocked_session":{:?},"mocked_emitter_and_real_session":{:?},"mute_emitter_and_mocked_session":{:?},"mute_emitter_and_real_session":{:?}}},"timestamp":1650447611000,"tracker_version":"cpp-0.2.0"}}"#,
        context, threads, ops, t[0], t[1], t[2], t[3]
    )
}

// ===== Help and Version =====

#[test]
fn test_help_output() {
    report_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Summarize tracker performance logs"))
        .stdout(predicate::str::contains("--group"))
        .stdout(predicate::str::contains("--metric"));
}

#[test]
fn test_version_output() {
    report_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("perf-report"));
}

// ===== Report Scenarios =====

#[test]
fn test_single_record_without_context() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), &format!("{}\n", record(None, 4, 100, [1.0, 2.0, 3.0, 4.0])));

    let expected = [
        " Metric                                | Max     | Min     | Mean    | Last    |",
        "--------------------------------------------------------------------------------",
        " mocked emitter and mocked session     | 1.0s    | 1.0s    | 1.0s    | 1.0s    |",
        " mocked emitter and real session       | 2.0s    | 2.0s    | 2.0s    | 2.0s    |",
        " mute emitter and mocked session       | 3.0s    | 3.0s    | 3.0s    | 3.0s    |",
        " mute emitter and real session         | 4.0s    | 4.0s    | 4.0s    | 4.0s    |",
        "",
        "",
    ]
    .join("\n");

    report_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_two_records_same_group() {
    let dir = TempDir::new().unwrap();
    let log = format!(
        "{}\n\n{}\n",
        record(Some("MacBookPro18,3"), 5, 10000, [1.0, 1.0, 1.0, 1.0]),
        record(Some("MacBookPro18,3"), 5, 10000, [3.0, 3.0, 3.0, 3.0]),
    );
    write_log(dir.path(), &log);

    report_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Device: MacBookPro18,3\nNumber of threads: 5\nNumber of operations: 10000\n\n",
        ))
        .stdout(predicate::str::contains(
            " mute emitter and real session         | 3.0s    | 1.0s    | 2.0s    | 3.0s    |",
        ));
}

#[test]
fn test_groups_printed_in_sorted_order() {
    let dir = TempDir::new().unwrap();
    let log = [
        record(Some("ThinkPad"), 1, 100, [1.0; 4]),
        record(Some("MacBook"), 8, 100, [2.0; 4]),
        record(Some("ThinkPad"), 1, 100, [5.0; 4]),
        record(Some("MacBook"), 2, 100, [3.0; 4]),
    ]
    .join("\n");
    write_log(dir.path(), &log);

    let output = report_cmd().current_dir(dir.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let devices: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("Device: ") || l.starts_with("Number of threads: "))
        .collect();
    assert_eq!(
        devices,
        vec![
            "Device: MacBook",
            "Number of threads: 2",
            "Device: MacBook",
            "Number of threads: 8",
            "Device: ThinkPad",
            "Number of threads: 1",
        ]
    );
    // ThinkPad runs were not adjacent in the log but share one table
    assert!(stdout.contains("| 5.0s    | 1.0s    | 3.0s    | 5.0s    |"));
}

#[test]
fn test_explicit_path_and_group_never() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.ndjson");
    let log = [
        record(Some("a"), 1, 100, [1.0; 4]),
        record(Some("b"), 2, 100, [2.0; 4]),
    ]
    .join("\n");
    fs::write(&path, log).unwrap();

    report_cmd()
        .arg(&path)
        .arg("--group")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("Device:").not())
        .stdout(predicate::str::contains("| 2.0s    | 1.0s    | 1.5s    | 2.0s    |"));
}

#[test]
fn test_metric_filter() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), &record(None, 4, 100, [1.0, 2.0, 3.0, 4.0]));

    report_cmd()
        .current_dir(dir.path())
        .args(["--metric", "mute_emitter_and_mocked_session"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mute emitter and mocked session"))
        .stdout(predicate::str::contains("mocked emitter and real session").not());
}

// ===== Failure Modes =====

#[test]
fn test_missing_log_fails_without_output() {
    let dir = TempDir::new().unwrap();

    report_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("I/O error"))
        .stderr(predicate::str::contains("performance/logs.txt"));
}

#[test]
fn test_invalid_json_fails_before_any_table() {
    let dir = TempDir::new().unwrap();
    let log = format!(
        "{}\n{{not json\n{}\n",
        record(Some("a"), 1, 100, [1.0; 4]),
        record(Some("a"), 1, 100, [2.0; 4]),
    );
    write_log(dir.path(), &log);

    report_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Parse error on line 2"));
}

#[test]
fn test_forced_grouping_requires_context() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), &record(None, 4, 100, [1.0; 4]));

    report_cmd()
        .current_dir(dir.path())
        .args(["--group", "always"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("desktop_context"));
}

#[test]
fn test_empty_log_prints_nothing() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), "\n  \n");

    report_cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_empty_log_ungrouped_fails() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), "\n  \n");

    report_cmd()
        .current_dir(dir.path())
        .args(["--group", "never"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No values to aggregate"));
}

#[test]
fn test_mixed_context_fails_without_merging() {
    let dir = TempDir::new().unwrap();
    let log = [
        record(Some("mac"), 1, 100, [1.0; 4]),
        record(Some("pc"), 16, 10000, [50.0; 4]),
        record(None, 4, 100, [2.0; 4]),
    ]
    .join("\n");
    write_log(dir.path(), &log);

    report_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_max_file_size_override() {
    let dir = TempDir::new().unwrap();
    write_log(dir.path(), &record(None, 4, 100, [1.0; 4]));

    report_cmd()
        .current_dir(dir.path())
        .env("PERF_REPORT_MAX_FILE_SIZE", "16")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));

    report_cmd()
        .current_dir(dir.path())
        .env("PERF_REPORT_MAX_FILE_SIZE", "sixteen")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PERF_REPORT_MAX_FILE_SIZE"));
}

#[test]
fn test_unknown_group_mode_rejected() {
    report_cmd()
        .args(["--group", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sometimes"));
}
