//! Integration tests for cdloc-cli
//!
//! These tests drive the binary end-to-end against a temporary data store.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;

/// Get a Command for the cdloc binary
fn cdloc() -> Command {
    Command::cargo_bin("cdloc").unwrap()
}

fn seed_store(dir: &Path) {
    fs::write(
        dir.join("atividades.json"),
        r#"[
            {"id":"a1","construtora":"Alfa Engenharia","obra":"Torre Norte",
             "equipamento":"Balancinho","servico":"Montagem","tamanho":6,
             "dataLiberacao":"2024-03-05"},
            {"id":"a2","construtora":"Alfa Engenharia","obra":"Torre Norte",
             "equipamento":"Mini Grua","servico":"Manutenção",
             "dataLiberacao":"2024-03-10"},
            {"id":"a3","construtora":"Beta Construções","obra":"Residencial Sul",
             "equipamento":"Mini Grua","servico":"Instalação",
             "dataLiberacao":"2024-02-20"},
            {"id":"a4","construtora":"Beta Construções","obra":"Residencial Sul",
             "equipamento":"Balancinho","servico":"Montagem"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("construtoras.json"),
        r#"[{"id":"c1","nome":"Alfa Engenharia"},{"id":"c2","nome":"Beta Construções"}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("obras.json"),
        r#"[{"id":"o1","nome":"Torre Norte","construtora":"Alfa Engenharia"},
            {"id":"o2","nome":"Residencial Sul","construtora":"Beta Construções"}]"#,
    )
    .unwrap();
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
#[serial]
fn test_cli_help() {
    cdloc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cdloc"))
        .stdout(predicate::str::contains("Commands").or(predicate::str::contains("COMMAND")));
}

#[test]
#[serial]
fn test_cli_version() {
    cdloc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cdloc"));
}

#[test]
#[serial]
fn test_report_help() {
    cdloc()
        .args(["report", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fechamento"));
}

// =============================================================================
// Ad-hoc List Tests
// =============================================================================

#[test]
#[serial]
fn test_report_list_shows_released_activities() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    cdloc()
        .env("CDLOC_DATA_DIR", dir.path())
        .args(["report", "list"])
        .assert()
        .success()
        // Dates come back reformatted, most recent first; the undated a4 is
        // absent entirely.
        .stdout(predicate::str::contains("10/03/2024"))
        .stdout(predicate::str::contains("05/03/2024"))
        .stdout(predicate::str::contains("Balancinho [6m]"));
}

#[test]
#[serial]
fn test_report_list_filters_by_construtora() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    cdloc()
        .env("CDLOC_DATA_DIR", dir.path())
        .args(["report", "list", "--construtora", "Beta Construções"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Residencial Sul"))
        .stdout(predicate::str::contains("Torre Norte").not());
}

#[test]
#[serial]
fn test_report_list_json_output() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    let output = cdloc()
        .env("CDLOC_DATA_DIR", dir.path())
        .args(["report", "list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 3);
}

#[test]
#[serial]
fn test_report_list_empty_store() {
    let dir = tempfile::tempdir().unwrap();

    cdloc()
        .env("CDLOC_DATA_DIR", dir.path())
        .args(["report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhuma atividade"));
}

// =============================================================================
// Monthly Closing Tests
// =============================================================================

#[test]
#[serial]
fn test_report_fechamento_excludes_maintenance() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    // March has a1 (kept) and a2 (maintenance, excluded).
    cdloc()
        .env("CDLOC_DATA_DIR", dir.path())
        .args(["report", "fechamento", "--mes", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTAL GERAL: 1"))
        .stdout(predicate::str::contains("MONTAGEM — Data 05/03/2024"))
        .stdout(predicate::str::contains("Manutenção").not());
}

#[test]
#[serial]
fn test_report_fechamento_rejects_invalid_month() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    cdloc()
        .env("CDLOC_DATA_DIR", dir.path())
        .args(["report", "fechamento", "--mes", "03/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM"));
}

#[test]
#[serial]
fn test_report_fechamento_rejects_unknown_equipment() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("atividades.json"),
        r#"[{"id":"a1","construtora":"Alfa","obra":"Torre Norte",
             "equipamento":"Grua de Torre","servico":"Montagem",
             "dataLiberacao":"2024-03-05"}]"#,
    )
    .unwrap();

    cdloc()
        .env("CDLOC_DATA_DIR", dir.path())
        .args(["report", "fechamento", "--mes", "2024-03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Grua de Torre"));
}

// =============================================================================
// Export Tests
// =============================================================================

#[test]
#[serial]
fn test_report_excel_writes_workbook() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());
    let saida = dir.path().join("fechamento.xlsx");

    cdloc()
        .env("CDLOC_DATA_DIR", dir.path())
        .args(["report", "excel", "--mes", "2024-03"])
        .arg("--output")
        .arg(&saida)
        .assert()
        .success()
        .stdout(predicate::str::contains("exportado"));

    let bytes = fs::read(&saida).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
#[serial]
fn test_report_pdf_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());
    let saida = dir.path().join("fechamento.pdf");

    cdloc()
        .env("CDLOC_DATA_DIR", dir.path())
        .args(["report", "pdf", "--mes", "2024-03"])
        .arg("--output")
        .arg(&saida)
        .assert()
        .success();

    let bytes = fs::read(&saida).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
#[serial]
fn test_report_pdf_missing_capture_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    cdloc()
        .env("CDLOC_DATA_DIR", dir.path())
        .args([
            "report",
            "pdf",
            "--mes",
            "2024-03",
            "--captura",
            "/nonexistent/regiao.png",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("regiao.png"));
}

// =============================================================================
// Reference Data Tests
// =============================================================================

#[test]
#[serial]
fn test_data_construtoras() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    cdloc()
        .env("CDLOC_DATA_DIR", dir.path())
        .args(["data", "construtoras"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alfa Engenharia"))
        .stdout(predicate::str::contains("Beta Construções"));
}

#[test]
#[serial]
fn test_data_obras_constrained_by_construtora() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    cdloc()
        .env("CDLOC_DATA_DIR", dir.path())
        .args(["data", "obras", "--construtora", "Alfa Engenharia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Torre Norte"))
        .stdout(predicate::str::contains("Residencial Sul").not());
}

#[test]
#[serial]
fn test_malformed_store_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("atividades.json"), "{ not json [").unwrap();

    cdloc()
        .env("CDLOC_DATA_DIR", dir.path())
        .args(["report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhuma atividade"));
}
