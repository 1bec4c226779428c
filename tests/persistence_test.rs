#![cfg(feature = "storage-rocksdb")]

mod common;

use assert_cmd::cargo_bin;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_rocksdb_persistence_recovery() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");
    let (companies, invoices) = common::default_fixtures().unwrap();

    // 1. First run: seed the database and list what was stored
    let mut cmd1 = Command::new(cargo_bin!("fintec"));
    cmd1.arg("--db-path")
        .arg(&db_path)
        .arg("--companies")
        .arg(companies.path())
        .arg("--invoices")
        .arg(invoices.path())
        .arg("--today")
        .arg(common::TODAY)
        .args(["invoices", common::ACME]);

    let output1 = cmd1.output().expect("Failed to execute command");
    assert!(output1.status.success());
    let stdout1 = String::from_utf8_lossy(&output1.stdout);
    assert!(stdout1.contains("\"number\": 3"));

    // 2. Second run: no seed files, data must come from the database
    let mut cmd2 = Command::new(cargo_bin!("fintec"));
    cmd2.arg("--db-path")
        .arg(&db_path)
        .arg("--today")
        .arg(common::TODAY)
        .args(["anticipate", "--cnpj", common::ACME, "1,2"]);

    let output2 = cmd2.output().expect("Failed to execute command");
    assert!(output2.status.success());
    let offer: serde_json::Value = serde_json::from_slice(&output2.stdout).unwrap();
    assert_eq!(offer["total_face_value"], "25000");

    // 3. Removal persists as well
    let mut cmd3 = Command::new(cargo_bin!("fintec"));
    cmd3.arg("--db-path").arg(&db_path).args(["remove-invoice", "1"]);
    assert!(cmd3.output().unwrap().status.success());

    let mut cmd4 = Command::new(cargo_bin!("fintec"));
    cmd4.arg("--db-path").arg(&db_path).args(["remove-invoice", "1"]);
    assert!(!cmd4.output().unwrap().status.success());
}
