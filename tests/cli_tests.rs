//! End-to-end tests for the otutab command-line interface.

use assert_cmd::Command;
use predicates::prelude::*;

fn otutab() -> Command {
    Command::cargo_bin("otutab").unwrap()
}

const HITS: &str = "seq1;sample=A;\tOTU_1;tax=Bacteria;\t5\n\
                    seq2;sample=A;\tOTU_1\t3\n\
                    seq3;sample=B;\tOTU_2;tax=Archaea;\t2\n";

#[test]
fn test_build_requires_an_output() {
    otutab()
        .args(["build", "-"])
        .write_stdin("seq1;sample=A;\tOTU_1\t1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--otutab-out"));
}

#[test]
fn test_build_otutab_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("table.txt");

    otutab()
        .args(["build", "-", "--otutab-out"])
        .arg(&out)
        .write_stdin(HITS)
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        content,
        "#OTU ID\tA\tB\ttaxonomy\n\
         OTU_1\t8\t0\tBacteria\n\
         OTU_2\t0\t2\tArchaea\n"
    );
}

#[test]
fn test_build_shared_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("table.shared");

    otutab()
        .args(["build", "-", "--shared-label", "0.03", "--shared-out"])
        .arg(&out)
        .write_stdin(HITS)
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        content,
        "label\tGroup\tnumOtus\tOTU_1\tOTU_2\n\
         0.03\tA\t2\t8\t0\n\
         0.03\tB\t2\t0\t2\n"
    );
}

#[test]
fn test_build_biom_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("table.biom");

    otutab()
        .args(["build", "-", "--biom-out"])
        .arg(&out)
        .write_stdin(HITS)
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(doc["id"], out.display().to_string());
    assert_eq!(doc["format"], "Biological Observation Matrix 1.0");
    assert_eq!(doc["type"], "OTU table");
    assert_eq!(doc["matrix_type"], "sparse");
    assert_eq!(doc["shape"], serde_json::json!([2, 2]));
    assert_eq!(
        doc["data"],
        serde_json::json!([[0, 0, 8], [1, 1, 2]])
    );
    assert_eq!(
        doc["rows"][0]["metadata"]["taxonomy"],
        serde_json::json!("Bacteria")
    );
}

#[test]
fn test_build_from_file_all_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let hits = dir.path().join("hits.tsv");
    std::fs::write(&hits, HITS).unwrap();

    let otutab_out = dir.path().join("table.txt");
    let shared_out = dir.path().join("table.shared");
    let biom_out = dir.path().join("table.biom");

    otutab()
        .arg("build")
        .arg(&hits)
        .arg("--otutab-out")
        .arg(&otutab_out)
        .arg("--shared-out")
        .arg(&shared_out)
        .arg("--biom-out")
        .arg(&biom_out)
        .assert()
        .success();

    assert!(otutab_out.exists());
    assert!(shared_out.exists());
    assert!(biom_out.exists());
}

#[test]
fn test_build_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("table.txt");

    otutab()
        .args(["build", "-", "--otutab-out"])
        .arg(&out)
        .write_stdin("")
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "#OTU ID\n");
}

#[test]
fn test_build_rejects_negative_abundance() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("table.txt");

    otutab()
        .args(["build", "-", "--otutab-out"])
        .arg(&out)
        .write_stdin("seq1;sample=A;\tOTU_1\t-5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Negative abundance"));
}

#[test]
fn test_build_rejects_malformed_hits() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("table.txt");

    otutab()
        .args(["build", "-", "--otutab-out"])
        .arg(&out)
        .write_stdin("a_lonely_field\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("fewer than 2 fields"));
}

#[test]
fn test_extract_text() {
    otutab()
        .args(["extract", "seq1;sample=A;OTU_3;tax=Bacteria;"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample: A"))
        .stdout(predicate::str::contains("otu: OTU_3"))
        .stdout(predicate::str::contains("taxonomy: Bacteria"));
}

#[test]
fn test_extract_json() {
    otutab()
        .args(["--format", "json", "extract", "readXYZ more text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sample\": \"readXYZ\""))
        .stdout(predicate::str::contains("\"taxonomy\": null"));
}

#[test]
fn test_extract_tsv_from_stdin() {
    otutab()
        .args(["--format", "tsv", "extract"])
        .write_stdin("seq1;sample=A;\nOTU_9;tax=Archaea;\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("header\tsample\totu\ttaxonomy"))
        .stdout(predicate::str::contains("seq1;sample=A;\tA\t\t"))
        .stdout(predicate::str::contains("OTU_9;tax=Archaea;\tOTU_9\tOTU_9\tArchaea"));
}
