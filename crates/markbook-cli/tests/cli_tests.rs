//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn markbook(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("markbook").unwrap();
    // Isolate from any real markbook.toml / ~/.config/markbook.
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

fn add_student(dir: &TempDir, roll: &str, name: &str, marks: [&str; 3]) {
    markbook(dir)
        .args(["add", "--roll", roll, "--name", name, "--marks"])
        .args(marks)
        .assert()
        .success();
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();

    markbook(&dir)
        .args(["add", "--roll", "S1", "--name", "Ava", "--marks", "90", "92", "88"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added S1 (Ava)"));

    markbook(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ava"))
        .stdout(predicate::str::contains("90.00"))
        .stdout(predicate::str::contains("A+"))
        .stdout(predicate::str::contains("1 record(s)."));
}

#[test]
fn add_existing_roll_updates() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "S1", "Ava", ["90", "92", "88"]);

    markbook(&dir)
        .args(["add", "--roll", "S1", "--name", "Ava", "--marks", "60", "60", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated S1 (Ava)"));

    markbook(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 record(s)."));
}

#[test]
fn add_rejects_non_integer_marks() {
    let dir = TempDir::new().unwrap();

    markbook(&dir)
        .args(["add", "--roll", "S1", "--name", "Ava", "--marks", "90", "oops", "88"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("marks must be integers"));
}

#[test]
fn add_rejects_empty_roll() {
    let dir = TempDir::new().unwrap();

    markbook(&dir)
        .args(["add", "--roll", "  ", "--name", "Ava", "--marks", "90", "92", "88"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("roll number cannot be empty"));
}

#[test]
fn delete_then_delete_again() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "S1", "Ava", ["90", "92", "88"]);

    markbook(&dir)
        .args(["delete", "--roll", "S1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted S1 (Ava)"));

    markbook(&dir)
        .args(["delete", "--roll", "S1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no record with roll S1"));
}

#[test]
fn search_distinguishes_no_query_from_no_matches() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "S1", "Ava", ["90", "92", "88"]);

    markbook(&dir)
        .args(["search", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("No query provided"));

    markbook(&dir)
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches for \"zzz\"."));
}

#[test]
fn search_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "S1", "Ava", ["90", "92", "88"]);
    add_student(&dir, "S2", "Bo", ["40", "35", "50"]);

    markbook(&dir)
        .args(["search", "AVA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ava"))
        .stdout(predicate::str::contains("1 match(es)."));
}

#[test]
fn topper_picks_first_of_tied_averages() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "S1", "Ava", ["80", "80", "80"]);
    add_student(&dir, "S2", "Bo", ["80", "80", "80"]);

    markbook(&dir)
        .arg("topper")
        .assert()
        .success()
        .stdout(predicate::str::contains("Topper: S1 (Ava)"))
        .stdout(predicate::str::contains("Average: 80.00"))
        .stdout(predicate::str::contains("Grade: A"));
}

#[test]
fn topper_on_empty_roster_fails() {
    let dir = TempDir::new().unwrap();

    markbook(&dir)
        .arg("topper")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no records available"));
}

#[test]
fn report_to_stdout_and_minimal() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "S1", "Ava", ["90", "92", "88"]);

    markbook(&dir)
        .args(["report", "--roll", "S1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Student Report Card ==="))
        .stdout(predicate::str::contains("Marks   : [90, 92, 88]"))
        .stdout(predicate::str::contains("Remark  : Excellent"));

    markbook(&dir)
        .args(["report", "--roll", "S1", "--minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade   : A+"))
        .stdout(predicate::str::contains("Remark").not());
}

#[test]
fn report_to_file() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "S1", "Ava", ["90", "92", "88"]);

    let out = dir.path().join("report_S1.txt");
    markbook(&dir)
        .args(["report", "--roll", "S1", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to"));

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("=== Student Report Card ===\n"));
}

#[test]
fn export_json_snapshot() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "S1", "Ava", ["90", "92", "88"]);

    let out = dir.path().join("snapshot.json");
    markbook(&dir)
        .args(["export", "--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 record(s)"));

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("\"roll\": \"S1\""));
}

#[test]
fn import_replaces_roster() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "S9", "Old", ["10", "10", "10"]);

    let incoming = dir.path().join("incoming.csv");
    std::fs::write(
        &incoming,
        "roll,name,marks1,marks2,marks3,total,average,grade\n\
         S1,Ava,90,92,88,270,90.00,A+\n\
         S2,Bo,40,35,50,125,41.67,F\n",
    )
    .unwrap();

    markbook(&dir)
        .args(["import", "--input"])
        .arg(&incoming)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 record(s)"));

    markbook(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ava"))
        .stdout(predicate::str::contains("Old").not());
}

#[test]
fn malformed_import_leaves_roster_untouched() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "S1", "Ava", ["90", "92", "88"]);
    let roster_path = dir.path().join("roster.csv");
    let before = std::fs::read_to_string(&roster_path).unwrap();

    let incoming = dir.path().join("incoming.csv");
    std::fs::write(
        &incoming,
        "roll,name,marks1,marks2,marks3,total,average,grade\n\
         S2,Bo,40,35,50,125,41.67,F\n\
         S3,Cy,70,70\n",
    )
    .unwrap();

    markbook(&dir)
        .args(["import", "--input"])
        .arg(&incoming)
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 3 is malformed"));

    let after = std::fs::read_to_string(&roster_path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn reset_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    add_student(&dir, "S1", "Ava", ["90", "92", "88"]);

    markbook(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Re-run with --yes"));

    markbook(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ava"));

    markbook(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 record(s)."));

    markbook(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(no records)"));
}

#[test]
fn init_creates_config_and_skips_existing() {
    let dir = TempDir::new().unwrap();

    markbook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created markbook.toml"));

    assert!(dir.path().join("markbook.toml").exists());

    markbook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    markbook(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student roster and grade tracker"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    markbook(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("markbook"));
}
