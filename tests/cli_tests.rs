use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn spellbench() -> Command {
    Command::cargo_bin("spellbench").unwrap()
}

#[test]
fn test_run_prints_charts_and_misspellings() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("wordlist.txt"), "world\nword\n").unwrap();
    fs::write(dir.path().join("example_text.txt"), "Helllo, world!\n").unwrap();

    spellbench()
        .current_dir(dir.path())
        .args(["--no-color", "run", "--start", "10", "--end", "30", "--step", "10", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dictionary Building Time vs. Text Length"))
        .stdout(predicate::str::contains("Spell Checking Time vs. Text Length"))
        .stdout(predicate::str::contains("Running Time (seconds)"))
        .stdout(predicate::str::contains("Hash Map"))
        .stdout(predicate::str::contains("Misspelled words: [\"Helllo\"]"));
}

#[test]
fn test_run_json_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("wordlist.txt"), "world\n").unwrap();
    fs::write(dir.path().join("example_text.txt"), "Helllo world\n").unwrap();

    let output = spellbench()
        .current_dir(dir.path())
        .args(["run", "--start", "5", "--end", "10", "--step", "5", "--no-progress", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sweep"]["lengths"], serde_json::json!([5, 10]));
    assert_eq!(json["sweep"]["series"].as_array().unwrap().len(), 4);
    assert_eq!(json["charts"][1]["lines"][1]["label"], "BBST");
    assert_eq!(json["misspelled"], serde_json::json!(["Helllo"]));
}

#[test]
fn test_missing_word_list_fails() {
    let dir = tempdir().unwrap();

    spellbench()
        .current_dir(dir.path())
        .args(["run", "--start", "1", "--end", "1", "--no-progress"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wordlist.txt"));
}

#[test]
fn test_check_reports_and_exits_nonzero() {
    let dir = tempdir().unwrap();
    let words = dir.path().join("words.txt");
    let text = dir.path().join("notes.txt");
    fs::write(&words, "application\n").unwrap();
    fs::write(&text, "appl application\n").unwrap();

    spellbench()
        .args(["--no-color", "check", "--strategy", "hash", "--word-list"])
        .arg(&words)
        .arg(&text)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("appl"))
        .stdout(predicate::str::contains("1 error found in 1 file"));

    // the trie accepts any stored prefix
    spellbench()
        .args(["--no-color", "check", "--strategy", "trie", "--word-list"])
        .arg(&words)
        .arg(&text)
        .assert()
        .success()
        .stdout(predicate::str::contains("No spelling errors found"));
}

#[test]
fn test_check_no_fail() {
    let dir = tempdir().unwrap();
    let words = dir.path().join("words.txt");
    let text = dir.path().join("notes.txt");
    fs::write(&words, "").unwrap();
    fs::write(&text, "anything\n").unwrap();

    spellbench()
        .args(["check", "--no-fail", "--word-list"])
        .arg(&words)
        .arg(&text)
        .assert()
        .success();
}

#[test]
fn test_check_missing_file_fails_even_with_no_fail() {
    let dir = tempdir().unwrap();
    let words = dir.path().join("words.txt");
    let text = dir.path().join("notes.txt");
    fs::write(&words, "fine\n").unwrap();
    fs::write(&text, "fine\n").unwrap();

    spellbench()
        .args(["--no-color", "check", "--no-fail", "--word-list"])
        .arg(&words)
        .arg(&text)
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"))
        .stdout(predicate::str::contains("No spelling errors found"));
}

#[test]
fn test_check_missing_word_list_fails() {
    let dir = tempdir().unwrap();
    let text = dir.path().join("notes.txt");
    fs::write(&text, "fine\n").unwrap();

    spellbench()
        .args(["check", "--word-list"])
        .arg(dir.path().join("absent-words.txt"))
        .arg(&text)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent-words.txt"));
}

#[test]
fn test_blank_token_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("wordlist.txt"), "word\n").unwrap();
    fs::write(dir.path().join("example_text.txt"), "word\n").unwrap();

    spellbench()
        .current_dir(dir.path())
        .args(["run", "--token", " ", "--no-progress"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("token must not be blank"));
}

#[test]
fn test_maze_example() {
    spellbench()
        .args(["--no-color", "maze", "--exit", "5,4"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The wizard at position (2, 1) with speed 3 will reach the exit first.",
        ));

    spellbench()
        .args(["--no-color", "maze"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No wizard can reach the exit at (9, 7)."));
}

#[test]
fn test_maze_grid_file() {
    let dir = tempdir().unwrap();
    let grid = dir.path().join("grid.txt");
    fs::write(&grid, "#####\n#S  #\n### #\n#E  #\n#####\n").unwrap();

    spellbench()
        .args(["--no-color", "maze", "--grid"])
        .arg(&grid)
        .assert()
        .success()
        .stdout(predicate::str::contains("(1, 1) (speed 1): 6.000"));
}

#[test]
fn test_completion() {
    spellbench()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spellbench"));
}
