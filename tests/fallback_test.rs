mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[cfg(not(feature = "storage-rocksdb"))]
#[test]
fn test_rocksdb_fallback_warning() {
    let (companies, invoices) = common::default_fixtures().unwrap();

    let mut cmd = Command::new(cargo_bin!("fintec"));
    cmd.arg("--db-path")
        .arg("some_db")
        .arg("--companies")
        .arg(companies.path())
        .arg("--invoices")
        .arg(invoices.path())
        .arg("--today")
        .arg(common::TODAY)
        .args(["anticipate", "--cnpj", common::ACME, "1"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage.",
        ));
}

#[cfg(feature = "storage-rocksdb")]
#[test]
fn test_rocksdb_no_fallback_warning() {
    let (companies, invoices) = common::default_fixtures().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    let mut cmd = Command::new(cargo_bin!("fintec"));
    cmd.arg("--db-path")
        .arg(&db_path)
        .arg("--companies")
        .arg(companies.path())
        .arg("--invoices")
        .arg(invoices.path())
        .arg("--today")
        .arg(common::TODAY)
        .args(["anticipate", "--cnpj", common::ACME, "1"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Falling back").not());
}
