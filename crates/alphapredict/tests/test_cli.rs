use alphapredict_test_data::{TestFile, TestNetwork, GOLDEN_SEQUENCE};
use assert_cmd::Command;

fn scores_from_stdout(stdout: &[u8]) -> Vec<f64> {
    let text = String::from_utf8_lossy(stdout);
    text.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(", ")
        .map(|score| score.parse().unwrap())
        .collect()
}

#[test]
fn test_cli_predict() {
    let (weights, _dir) = TestNetwork::small().create_temp().unwrap();
    let mut cmd = Command::cargo_bin("alphapredict").unwrap();

    cmd.arg("predict")
        .arg(GOLDEN_SEQUENCE)
        .arg("--weights")
        .arg(&weights)
        .arg("--cpu");

    let assert = cmd.assert().success();
    let scores = scores_from_stdout(&assert.get_output().stdout);
    assert_eq!(scores.len(), GOLDEN_SEQUENCE.len());
    assert!((scores[0] - 49.725).abs() < 2e-4);
}

#[test]
fn test_cli_predict_with_config() {
    let (weights, _dir) = TestNetwork::small().create_temp_with_config().unwrap();
    let config = std::path::Path::new(&weights).with_extension("json");
    let mut cmd = Command::cargo_bin("alphapredict").unwrap();

    cmd.arg("predict")
        .arg("mktayiakqr")
        .arg("--weights")
        .arg(&weights)
        .arg("--config")
        .arg(&config)
        .arg("--cpu");

    let assert = cmd.assert().success();
    assert_eq!(scores_from_stdout(&assert.get_output().stdout).len(), 10);
}

#[test]
fn test_cli_predict_invalid_residue() {
    let (weights, _dir) = TestNetwork::small().create_temp().unwrap();
    let mut cmd = Command::cargo_bin("alphapredict").unwrap();

    cmd.arg("predict")
        .arg("ACDZZ")
        .arg("--weights")
        .arg(&weights)
        .arg("--cpu");

    let assert = cmd.assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("invalid residue 'Z' at position 3"), "{stderr}");
}

#[test]
fn test_cli_missing_weights() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("alphapredict").unwrap();

    cmd.arg("predict")
        .arg(GOLDEN_SEQUENCE)
        .arg("--weights")
        .arg(dir.path().join("absent_hs3_nL2_.safetensors"))
        .arg("--cpu");

    cmd.assert().failure();
}

#[test]
fn test_cli_predict_fasta() {
    let (weights, _dir) = TestNetwork::small().create_temp().unwrap();
    let (fasta, _tmp) = TestFile::fasta_01().create_temp().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("scores.csv");
    let mut cmd = Command::cargo_bin("alphapredict").unwrap();

    cmd.arg("predict-fasta")
        .arg("--input")
        .arg(&fasta)
        .arg("--output")
        .arg(&output)
        .arg("--weights")
        .arg(&weights)
        .arg("--cpu");

    cmd.assert().success();
    let contents = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("sp|P69905|HBA_HUMAN Hemoglobin subunit alpha  Homo sapiens, "));
    assert_eq!(lines[0].split(", ").count(), 1 + 142);
    assert_eq!(lines[1].split(", ").count(), 1 + 76);
    assert_eq!(lines[2].split(", ").count(), 1 + 10);
}

#[test]
fn test_cli_predict_fasta_table() {
    let (weights, _dir) = TestNetwork::small().create_temp().unwrap();
    let (fasta, _tmp) = TestFile::fasta_01().create_temp().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("scores_long.csv");
    let mut cmd = Command::cargo_bin("alphapredict").unwrap();

    cmd.arg("predict-fasta")
        .arg("-i")
        .arg(&fasta)
        .arg("-o")
        .arg(&output)
        .arg("--table")
        .arg("--weights")
        .arg(&weights)
        .arg("--cpu");

    cmd.assert().success();
    let contents = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "id,position,residue,score");
    assert_eq!(lines.len(), 1 + 142 + 76 + 10);
    // ubiquitin is lower case in the file
    assert!(lines[143].starts_with("ubiquitin,1,M,"));
}

#[test]
fn test_cli_predict_fasta_invalid_record() {
    let (weights, _dir) = TestNetwork::small().create_temp().unwrap();
    let (fasta, _tmp) = TestFile::fasta_invalid().create_temp().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("alphapredict").unwrap();

    cmd.arg("predict-fasta")
        .arg("--input")
        .arg(&fasta)
        .arg("--output")
        .arg(out_dir.path().join("scores.csv"))
        .arg("--weights")
        .arg(&weights)
        .arg("--cpu");

    let assert = cmd.assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("gapped alignment row"), "{stderr}");
}

#[test]
fn test_cli_graph() {
    let (weights, _dir) = TestNetwork::small().create_temp().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("profile.svg");
    let mut cmd = Command::cargo_bin("alphapredict").unwrap();

    cmd.arg("graph")
        .arg(GOLDEN_SEQUENCE)
        .arg("--output")
        .arg(&output)
        .arg("--title")
        .arg("Golden peptide")
        .arg("--shade")
        .arg("2-4")
        .arg("--shade")
        .arg("8-10")
        .arg("--weights")
        .arg(&weights)
        .arg("--cpu");

    cmd.assert().success();
    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("Golden peptide"));
    assert_eq!(svg.matches("shaded-region").count(), 2);
}

#[test]
fn test_cli_networks() {
    let mut cmd = Command::cargo_bin("alphapredict").unwrap();
    let assert = cmd.arg("networks").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.lines().count(), 7);
    assert!(stdout.contains("V7 (default)\thidden_size=100\tnum_layers=2"));
}
