use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run_solver(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_snake-solver"))
        .args(args)
        .output()
        .expect("Failed to execute snake-solver")
}

fn temp_output(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("snake-solver-cli-{}-{}.txt", name, std::process::id()))
}

#[test]
fn test_full_search_reports_totals() {
    let output = run_solver(&["-j", "4"]);

    if !output.status.success() {
        panic!(
            "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("272 total solutions discovered"),
        "Should report the total solution count"
    );
    assert_eq!(
        stdout.lines().filter(|l| l.starts_with("Worker ")).count(),
        4,
        "Should print one summary line per worker"
    );
    assert!(
        stdout.contains("Worker 0 (x1 in 1..=3): 120960 checks performed"),
        "Worker 0 should own x1 = 1..=3"
    );
    assert!(
        stdout.lines().last().unwrap_or("").starts_with("Time taken:"),
        "Should finish with the overall elapsed time"
    );
}

#[test]
fn test_restricted_range() {
    let path = temp_output("range");
    let output = run_solver(&[path.to_str().unwrap(), "3", "5", "-j", "2", "--verbose"]);
    let contents = fs::read_to_string(&path).unwrap_or_default();
    let _ = fs::remove_file(&path);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("84 total solutions discovered"));
    assert!(stdout.contains("Checks performed: 120960"));
    assert!(stdout.contains("worker 1: x1 in 5..=5"));

    assert_eq!(contents.lines().next(), Some("84 total solutions discovered"));
    assert_eq!(contents.lines().count(), 85);
}

#[test]
fn test_reversed_range_fails_before_search() {
    let path = temp_output("reversed");
    let output = run_solver(&[path.to_str().unwrap(), "7", "2"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid range 7..=2"), "stderr: {}", stderr);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("checks performed"), "No worker should have run");
    assert!(!path.exists(), "No output file should be created");
}

#[test]
fn test_out_of_domain_range_fails() {
    let path = temp_output("domain");
    let output = run_solver(&[path.to_str().unwrap(), "0", "12"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid range 0..=12"));
}

#[test]
fn test_oversized_bound_fails_as_invalid_range() {
    let path = temp_output("oversized");
    let output = run_solver(&[path.to_str().unwrap(), "1", "99999999999999999999"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: Invalid range"), "stderr: {}", stderr);
    assert!(!path.exists(), "No output file should be created");
}

#[test]
fn test_more_workers_than_cpus() {
    let output = run_solver(&["-j", "64"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("272 total solutions discovered"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with("Worker ")).count(), 9);
}

#[test]
fn test_unwritable_output_fails() {
    let path = std::env::temp_dir()
        .join(format!("snake-solver-no-such-dir-{}", std::process::id()))
        .join("solutions.txt");
    let output = run_solver(&[path.to_str().unwrap(), "9", "9"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write solutions"), "stderr: {}", stderr);
}
