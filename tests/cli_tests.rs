//! Command-line integration tests.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn geno_join() -> Command {
    Command::cargo_bin("geno-join").expect("binary should build")
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(path, content).expect("Failed to write fixture");
}

fn match_fixtures(dir: &Path) {
    write(
        &dir.join("reference.txt"),
        "CHR\tSNP\tBP\tA1\tA2\n1\trs1\t1000\tA\tG\n2\trs2\t500\tC\tT\n",
    );
    write(
        &dir.join("query.txt"),
        "CHR BP A1 A2\n1 1000 A G\n1 1000 G A\n3 300 A C\n",
    );
}

fn cohort_fixtures(root: &Path) {
    write(
        &root.join("outputs/prs/height/scores/chr1.profile"),
        "  FID  IID  PHENO  CNT  CNT2  SCORESUM\n  f1  f1_a  -9  2  1  0.5\n  f2  f2_b  -9  2  1  1\n",
    );
    write(
        &root.join("outputs/prs/height/scores/chr2.profile"),
        "  FID  IID  PHENO  CNT  CNT2  SCORESUM\n  f2  f2_b  -9  2  1  2\n  f1  f1_a  -9  2  1  0.25\n",
    );
    write(
        &root.join("outputs/genotypes/ukb.eigenvec"),
        "FID\tIID\tPC1\tPC2\nf2\tf2_b\t0.5\t-0.5\nf3\tf3_c\t0.1\t0.2\nf1\tf1_a\t-1\t1\n",
    );
}

#[test]
fn test_match_tsv() {
    let dir = tempfile::tempdir().unwrap();
    match_fixtures(dir.path());

    geno_join()
        .current_dir(dir.path())
        .args(["match", "query.txt", "reference.txt", "--swap", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "CHR\tBP\tA1\tA2\tSNP\n1\t1000\tA\tG\trs1\n1\t1000\tG\tA\t1sr\n3\t300\tA\tC\tNA\n",
        ));
}

#[test]
fn test_match_without_swap() {
    let dir = tempfile::tempdir().unwrap();
    match_fixtures(dir.path());

    geno_join()
        .current_dir(dir.path())
        .args(["match", "query.txt", "reference.txt", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\t1000\tG\tA\tNA\n"));
}

#[test]
fn test_match_annotate_swaps() {
    let dir = tempfile::tempdir().unwrap();
    match_fixtures(dir.path());

    geno_join()
        .current_dir(dir.path())
        .args([
            "match",
            "query.txt",
            "reference.txt",
            "--swap",
            "--annotate-swaps",
            "-f",
            "tsv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("SNP\tSWAPPED\n"))
        .stdout(predicate::str::contains("1\t1000\tG\tA\trs1\ttrue\n"))
        .stdout(predicate::str::contains("3\t300\tA\tC\tNA\tNA\n"));
}

#[test]
fn test_match_json() {
    let dir = tempfile::tempdir().unwrap();
    match_fixtures(dir.path());

    let output = geno_join()
        .current_dir(dir.path())
        .args(["match", "query.txt", "reference.txt", "--swap", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["direct"], 1);
    assert_eq!(json["summary"]["swapped"], 1);
    assert_eq!(json["results"][1]["snp"], "1sr");
    assert!(json["results"][2]["snp"].is_null());
}

#[test]
fn test_match_reference_from_gwas_dir() {
    let dir = tempfile::tempdir().unwrap();
    match_fixtures(dir.path());
    std::fs::create_dir_all(dir.path().join("inputs/GWAS")).unwrap();
    std::fs::rename(
        dir.path().join("reference.txt"),
        dir.path().join("inputs/GWAS/reference.txt"),
    )
    .unwrap();

    geno_join()
        .current_dir(dir.path())
        .args(["match", "query.txt", "reference.txt", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\t1000\tA\tG\trs1\n"));
}

#[test]
fn test_match_duplicate_reference_fails() {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("reference.txt"),
        "CHR SNP BP A1 A2\n1 rs1 1000 A G\n1 rs1b 1000 A G\n",
    );
    write(&dir.path().join("query.txt"), "CHR BP A1 A2\n1 1000 A G\n");

    geno_join()
        .current_dir(dir.path())
        .args(["match", "query.txt", "reference.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate reference locus 1:1000"));

    geno_join()
        .current_dir(dir.path())
        .args(["match", "query.txt", "reference.txt", "--duplicates", "first", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\trs1\n"));
}

#[test]
fn test_match_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    geno_join()
        .current_dir(dir.path())
        .args(["match", "absent.txt", "reference.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read query table absent.txt"));
}

#[test]
fn test_scores_tsv() {
    let dir = tempfile::tempdir().unwrap();
    cohort_fixtures(dir.path());

    geno_join()
        .current_dir(dir.path())
        .args(["scores", "height", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::eq("subject\theight\na\t0.75\nb\t3\n"));
}

#[test]
fn test_scores_with_prs_dir_flag() {
    let dir = tempfile::tempdir().unwrap();
    cohort_fixtures(dir.path());
    let prs_dir = dir.path().join("outputs/prs");

    geno_join()
        .args(["scores", "height", "-f", "tsv", "--prs-dir"])
        .arg(&prs_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("b\t3\n"));
}

#[test]
fn test_scores_missing_phenotype() {
    let dir = tempfile::tempdir().unwrap();
    cohort_fixtures(dir.path());

    geno_join()
        .current_dir(dir.path())
        .args(["scores", "weight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files match"));
}

#[test]
fn test_pcs_tsv() {
    let dir = tempfile::tempdir().unwrap();
    cohort_fixtures(dir.path());

    geno_join()
        .current_dir(dir.path())
        .args(["pcs", "ukb", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "subject\tPC1\tPC2\nb\t0.5\t-0.5\nc\t0.1\t0.2\na\t-1\t1\n",
        ));
}

#[test]
fn test_join_with_layout_file() {
    let dir = tempfile::tempdir().unwrap();
    cohort_fixtures(dir.path());
    let layout = serde_json::json!({
        "genotype_dir": dir.path().join("outputs/genotypes"),
        "prs_dir": dir.path().join("outputs/prs"),
    });
    let layout_path = dir.path().join("layout.json");
    std::fs::write(&layout_path, layout.to_string()).unwrap();

    geno_join()
        .args(["join", "height", "ukb", "-f", "tsv", "--layout"])
        .arg(&layout_path)
        .assert()
        .success()
        .stdout(predicate::eq(
            "subject\theight\tPC1\tPC2\nb\t3\t0.5\t-0.5\na\t0.75\t-1\t1\n",
        ));
}

#[test]
fn test_pcs_text() {
    let dir = tempfile::tempdir().unwrap();
    cohort_fixtures(dir.path());

    geno_join()
        .current_dir(dir.path())
        .args(["pcs", "ukb"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Population Structure: ukb\n"))
        .stdout(predicate::str::contains("  Subjects: 3\n"))
        .stdout(predicate::str::contains("  Components: PC1, PC2\n"))
        .stdout(predicate::str::contains("subject\tPC1\tPC2\nb\t0.5\t-0.5\n"));
}

#[test]
fn test_match_text() {
    let dir = tempfile::tempdir().unwrap();
    match_fixtures(dir.path());

    geno_join()
        .current_dir(dir.path())
        .args(["match", "query.txt", "reference.txt", "--swap"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Reference Matching\n"))
        .stdout(predicate::str::contains("Allele swap: enabled\n"))
        .stdout(predicate::str::contains("Matched: 1 direct, 1 swapped, 1 missing"))
        .stdout(predicate::str::contains("1\t1000\tG\tA\t1sr\n"));
}
