use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn solve_to_file(name: &str, extra_args: &[&str]) -> Vec<String> {
    let path: PathBuf = std::env::temp_dir().join(format!(
        "snake-solver-output-{}-{}.txt",
        name,
        std::process::id()
    ));

    let output = Command::new(env!("CARGO_BIN_EXE_snake-solver"))
        .arg(&path)
        .args(extra_args)
        .output()
        .expect("Failed to execute snake-solver");

    let contents = fs::read_to_string(&path);
    let _ = fs::remove_file(&path);

    if !output.status.success() {
        panic!(
            "Command failed with status: {:?}\nstderr: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    contents
        .expect("Output file should exist")
        .lines()
        .map(str::to_string)
        .collect()
}

fn parse_line(line: &str) -> (String, Vec<u8>) {
    let mut fields = line.split(',');
    let tag = fields.next().unwrap().to_string();
    let values = fields.map(|f| f.parse().unwrap()).collect();
    (tag, values)
}

#[test]
fn test_output_file_format() {
    let lines = solve_to_file("format", &["-j", "3"]);

    assert_eq!(lines[0], "272 total solutions discovered");
    assert_eq!(lines.len(), 273);

    let mut sequential = 0;
    let mut standard = 0;
    for line in &lines[1..] {
        let (tag, values) = parse_line(line);
        match tag.as_str() {
            "sequential" => sequential += 1,
            "standard" => standard += 1,
            other => panic!("Unexpected tag {:?} in line {:?}", other, line),
        }
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=9).collect::<Vec<u8>>(), "line {:?}", line);
    }
    assert_eq!(sequential, 144);
    assert_eq!(standard, 128);

    assert!(lines.contains(&"sequential,1,2,4,7,5,8,3,6,9".to_string()));
    assert!(lines.contains(&"standard,1,2,6,4,7,8,3,5,9".to_string()));
    assert!(!lines.iter().any(|l| l.ends_with(",5,3,8,4,7,9,1,6,2")));
}

#[test]
fn test_short_tags_without_header() {
    let lines = solve_to_file("short", &["1", "1", "--short-tags", "--no-header"]);

    assert_eq!(lines.len(), 41);
    assert!(lines.iter().all(|l| l.starts_with("S,1,") || l.starts_with("O,1,")));
    assert_eq!(lines.iter().filter(|l| l.starts_with("S,")).count(), 17);
}

#[test]
fn test_worker_count_does_not_change_file() {
    let single = solve_to_file("single", &["-j", "1"]);
    let many = solve_to_file("many", &["-j", "9"]);
    assert_eq!(single, many);

    let odd: HashSet<_> = solve_to_file("odd", &["-j", "5"]).into_iter().collect();
    let single: HashSet<_> = single.into_iter().collect();
    assert_eq!(odd, single);
}
