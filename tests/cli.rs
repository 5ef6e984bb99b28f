use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn finfo() -> Command {
    Command::new(env!("CARGO_BIN_EXE_finfo"))
}

fn create_test_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "1\n2\n3\n").unwrap();
    fs::write(temp.path().join("b.rs"), "fn b() {}\n").unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    temp
}

#[test]
fn shows_help() {
    finfo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("finfo"))
        .stdout(predicate::str::contains("--long"));
}

#[test]
fn rejects_short_with_long() {
    finfo()
        .args(["-s", "-l", "."])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn short_listing_one_line_per_path() {
    let temp = create_test_tree();
    finfo()
        .current_dir(temp.path())
        .args(["--color", "never", "a.txt", "b.rs", "sub"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt (3 lines)"))
        .stdout(predicate::str::contains("b.rs (1 line)"))
        .stdout(predicate::str::contains("sub (0 files, 0 dirs, 0 links)"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn no_arguments_lists_current_dir() {
    let temp = create_test_tree();
    let assert = finfo()
        .current_dir(temp.path())
        .args(["--color", "never"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("d "));
    assert!(stdout.contains("3 entries"));
}

#[test]
fn missing_path_is_reported_and_skipped() {
    let temp = create_test_tree();
    let assert = finfo()
        .current_dir(temp.path())
        .args(["--color", "never", "a.txt", "nope", "b.rs"])
        .assert()
        .success()
        .stderr(predicate::str::contains("finfo: nope: No such file or directory"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("a.txt (3 lines)"));
    assert!(lines[1].ends_with("b.rs (1 line)"));
}

#[test]
fn long_listing_has_header_and_rule() {
    let temp = create_test_tree();
    let assert = finfo()
        .current_dir(temp.path())
        .args(["-l", "--color", "never", "a.txt", "sub"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Name"));
    assert!(lines[0].ends_with("Lines"));
    assert!(lines[1].starts_with("-----"));
    assert!(lines[2].starts_with("a.txt"));
    assert!(lines[2].ends_with('3'));
    assert!(lines[3].starts_with("sub"));
}

#[test]
fn never_color_emits_no_escapes() {
    let temp = create_test_tree();
    finfo()
        .current_dir(temp.path())
        .args(["--color", "never", "sub", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn si_units() {
    let temp = create_test_tree();
    fs::write(temp.path().join("big.txt"), "x".repeat(2000)).unwrap();
    finfo()
        .current_dir(temp.path())
        .args(["--si", "--color", "never", "big.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" kB"));
}

#[cfg(unix)]
#[test]
fn control_characters_in_names_are_escaped() {
    let temp = create_test_tree();
    fs::write(temp.path().join("a\nb.txt"), "x\n").unwrap();
    fs::write(temp.path().join("\u{1b}[31mevil"), "x\n").unwrap();

    let assert = finfo()
        .current_dir(temp.path())
        .args(["--color", "never", "a\nb.txt", "\u{1b}[31mevil"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("a\\nb.txt (1 line)"));
    assert!(!stdout.contains('\u{1b}'));

    let assert = finfo()
        .current_dir(temp.path())
        .args(["-l", "--color", "never", "a\nb.txt"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn long_listing_includes_ids_and_inode() {
    let temp = create_test_tree();
    finfo()
        .current_dir(temp.path())
        .args(["-l", "--color", "never", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uid/Gid"))
        .stdout(predicate::str::contains("Inode"));
}

#[test]
fn no_lines_skips_line_counts() {
    let temp = create_test_tree();
    finfo()
        .current_dir(temp.path())
        .args(["--no-lines", "--no-entries", "--color", "never", "a.txt", "sub"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lines").not())
        .stdout(predicate::str::contains("files,").not());
}
