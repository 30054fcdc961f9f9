use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempFileGuard {
    path: PathBuf,
}

impl TempFileGuard {
    fn with_contents(prefix: &str, contents: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "ratoracle-cli-{prefix}-{}-{unique}.toml",
            std::process::id()
        ));
        fs::write(&path, contents).expect("temp file should be written");
        Self { path }
    }

    fn path(&self) -> &str {
        self.path.to_str().expect("temp path should be utf-8")
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn run_ratoracle<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_ratoracle");
    Command::new(bin)
        .args(args)
        .env_remove("RATORACLE_LOG")
        .output()
        .expect("ratoracle command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout should be json: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn arith_add_json() {
    let output = run_ratoracle(["arith", "add", "1", "2", "3", "4", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["op"], "add");
    assert_eq!(payload["yes"]["low"], "4");
    assert_eq!(payload["yes"]["high"], "6");
    assert_eq!(payload["width"], "2");
}

#[test]
fn arith_accepts_negative_and_fractional_bounds() {
    let output = run_ratoracle(["arith", "multiply", "-1/2", "2", "0.5", "3", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["yes"]["low"], "-3/2");
    assert_eq!(payload["yes"]["high"], "6");
}

#[test]
fn divide_straddling_zero_warns_on_stderr() {
    let output = run_ratoracle(["arith", "divide", "1", "2", "-1", "1", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["yes"]["low"], "1");
    assert_eq!(payload["yes"]["high"], "1000000");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("contains zero"), "stderr:\n{stderr}");
}

#[test]
fn divide_by_known_zero_fails() {
    let output = run_ratoracle(["arith", "divide", "1", "2", "0", "0"]);
    assert_failure(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("division by zero"), "stderr:\n{stderr}");
}

#[test]
fn query_early_exit_json() {
    let output = run_ratoracle([
        "query",
        "0",
        "10",
        "--target-low",
        "1",
        "--target-high",
        "2",
        "--json",
    ]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["answer"]["ans"], true);
    assert_eq!(payload["answer"]["cd"]["low"], "0");
    assert_eq!(payload["yes"]["high"], "10");
}

#[test]
fn query_outside_is_no() {
    let output = run_ratoracle([
        "query",
        "0",
        "10",
        "--target-low",
        "-5",
        "--target-high",
        "-3",
        "--delta",
        "1",
    ]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Answer: no"), "stdout:\n{stdout}");
}

#[test]
fn bisect_reaches_precision() {
    let output = run_ratoracle(["bisect", "0", "10", "--precision", "1", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["strategy"], "bisect");
    assert_eq!(payload["converged"], true);
    assert_eq!(payload["width"], "5/8");
}

#[test]
fn narrow_respects_config_cap() {
    let config = TempFileGuard::with_contents("cap", "[narrowing]\nmax_iterations = 2\n");
    let output = run_ratoracle([
        "narrow",
        "0",
        "20",
        "--precision",
        "1/4",
        "--config",
        config.path(),
        "--json",
    ]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["converged"], false);
    assert_eq!(payload["width"], "5");
}

#[test]
fn invalid_config_is_reported() {
    let config = TempFileGuard::with_contents("bad", "[narrowing]\nmax_iterations = 0\n");
    let output = run_ratoracle(["bisect", "0", "1", "--precision", "1", "--config", config.path()]);
    assert_failure(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("max_iterations"), "stderr:\n{stderr}");
}

#[test]
fn malformed_rational_is_reported() {
    let output = run_ratoracle(["arith", "add", "1", "x", "3", "4"]);
    assert_failure(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("first operand high"), "stderr:\n{stderr}");
}
