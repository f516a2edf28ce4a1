use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A fresh HOME with an initialized data directory.
fn setup() -> TempDir {
    let home = tempfile::tempdir().unwrap();
    let data_dir = home.path().join("billing");
    mqbill(&home)
        .args(["init", "--data-dir", data_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized mqbill"));
    home
}

fn mqbill(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mqbill").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn add_record(home: &TempDir, date: &str, artist: &str) -> i64 {
    let output = mqbill(home)
        .args([
            "add", "--date", date, "--station", "WXYZ", "--amount", "250", "--prefix", "$",
            "--artist", artist, "--song", "Kiss", "--label1", "Warner", "--contact1", "Jane",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|l| l.strip_prefix("Added record #"))
        .and_then(|id| id.trim().parse().ok())
        .expect("record id in output")
}

#[test]
fn test_add_prints_both_formats() {
    let home = setup();
    mqbill(&home)
        .args(["add", "--date", "2024-03-05", "--artist", "Prince", "--song", "Kiss", "--station", "WXYZ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prince \"Kiss\" (WXYZ) 03/05/2024"));
}

#[test]
fn test_add_without_date_is_rejected() {
    let home = setup();
    mqbill(&home)
        .args(["add", "--artist", "Prince"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("A date is required"));
    mqbill(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records yet."));
}

#[test]
fn test_list_filters_by_date_and_keyword() {
    let home = setup();
    add_record(&home, "2024-03-05", "Prince");
    add_record(&home, "2024-03-05", "Bowie");
    add_record(&home, "2024-04-01", "Prince");

    mqbill(&home)
        .args(["list", "--date", "2024-03-05", "--keyword", "PRINCE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 3 record(s)"))
        .stdout(predicate::str::contains("$250 Prince \"Kiss\" Warner / Jane"));

    mqbill(&home)
        .args(["list", "--keyword", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records match keyword: nobody."));
}

#[test]
fn test_toggle_and_delete() {
    let home = setup();
    let id = add_record(&home, "2024-03-05", "Prince");

    mqbill(&home)
        .args(["paid", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked paid"));
    mqbill(&home)
        .args(["paid", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked unpaid"));
    mqbill(&home)
        .args(["invoiced", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked invoiced"));

    mqbill(&home)
        .args(["delete", &id.to_string()])
        .assert()
        .success();
    mqbill(&home)
        .args(["delete", &id.to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("No record with ID {id}")));
}

#[test]
fn test_new_values_become_suggestions() {
    let home = setup();
    add_record(&home, "2024-03-05", "Fresh Artist");
    mqbill(&home)
        .args(["options", "list", "artists"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fresh Artist"));

    mqbill(&home)
        .args(["options", "add", "labels", "Sub Pop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Sub Pop' to labels"));
    mqbill(&home)
        .args(["options", "add", "labels", "Sub Pop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already in labels"));
}

#[test]
fn test_export_and_status() {
    let home = setup();
    add_record(&home, "2024-03-05", "Prince");
    let out = home.path().join("records.csv");
    mqbill(&home)
        .args(["export", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 record(s)"));
    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("id,date,text,quickbooks_text,paid,invoiced"));

    mqbill(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Records:      1"));
}

#[test]
fn test_backup_writes_copy() {
    let home = setup();
    add_record(&home, "2024-03-05", "Prince");
    let out = home.path().join("copy.db");
    mqbill(&home)
        .args(["backup", "--output", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup saved"));
    assert!(out.exists());
}

#[test]
fn test_load_requires_existing_database() {
    let home = setup();
    let empty = home.path().join("empty");
    std::fs::create_dir_all(&empty).unwrap();
    mqbill(&home)
        .args(["load", empty.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No database found"));
}
