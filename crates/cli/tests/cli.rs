use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn quasievo() -> Command {
    Command::cargo_bin("quasievo").unwrap()
}

#[test]
fn test_info_default_parameters() {
    quasievo()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error Threshold (1/p): 20.0"))
        .stdout(predicate::str::contains("Mutation Load (L×p): 1.00"))
        .stdout(predicate::str::contains("Fitness Advantage: 20%"));
}

#[test]
fn test_info_stable_state() {
    quasievo()
        .args(["info", "-L", "10", "-p", "0.05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ STABLE"));
}

#[test]
fn test_info_catastrophe_state() {
    quasievo()
        .args(["info", "-L", "50", "-p", "0.05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ CATASTROPHE"))
        .stdout(predicate::str::contains("🔥"));
}

#[test]
fn test_info_rejects_bad_rate() {
    quasievo()
        .args(["info", "-p", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mutation rate"));
}

#[test]
fn test_run_rejects_zero_population() {
    quasievo()
        .args(["run", "-n", "0", "-g", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid population size"));
}

#[test]
fn test_run_pretty_reports() {
    quasievo()
        .args(["run", "-g", "20", "--report-every", "10", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Population Statistics (generation 20)"))
        .stdout(predicate::str::contains("Simulation complete!"));
}

#[test]
fn test_run_json_history() {
    let output = quasievo()
        .args(["run", "-L", "20", "-p", "0", "-n", "50", "-g", "5", "--seed", "3"])
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 6);
    for (generation, record) in records.iter().enumerate() {
        assert_eq!(record["generation"], generation);
        assert_eq!(record["wildtype_freq"], 1.0);
        assert_eq!(record["entropy"], 0.0);
    }
}

#[test]
fn test_run_csv_to_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("history.csv");

    quasievo()
        .args(["run", "-L", "1", "-p", "1", "-n", "10", "-g", "1", "--seed", "9"])
        .args(["--format", "csv", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("History written to"));

    let csv = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("generation,avg_hamming,wildtype_freq"));
    assert!(lines[2].starts_with("1,1,0,"));
}

#[test]
fn test_run_show_genomes() {
    quasievo()
        .args(["run", "-L", "8", "-p", "0", "-n", "40", "-g", "2"])
        .args(["--show-genomes", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first 5 individuals"))
        .stdout(predicate::str::contains("11111111  ★ WT"))
        .stdout(predicate::str::contains("... and 35 more"));
}

#[test]
fn test_run_show_genomes_default_count() {
    quasievo()
        .args(["run", "-L", "6", "-p", "0", "-n", "40", "-g", "1"])
        .arg("--show-genomes")
        .assert()
        .success()
        .stdout(predicate::str::contains("first 30 individuals"))
        .stdout(predicate::str::contains("111111  ★ WT"))
        .stdout(predicate::str::contains("... and 10 more"));
}

#[test]
fn test_init_writes_config() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.json");

    quasievo()
        .args(["init", "-L", "30", "-p", "0.02", "--seed", "5", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Configuration initialized successfully!",
        ));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["genome_length"], 30);
    assert_eq!(json["mutation_rate"], 0.02);
    assert_eq!(json["population_size"], 100);
    assert_eq!(json["seed"], 5);
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    quasievo()
        .arg("init")
        .arg("--output")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    quasievo()
        .args(["init", "--force", "--output"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_run_from_config_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.json");

    quasievo()
        .args(["init", "-L", "12", "-n", "25", "--output"])
        .arg(&path)
        .assert()
        .success();

    quasievo()
        .args(["info", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Genome Length: 12"))
        .stdout(predicate::str::contains("Population Size: 25"));

    // flags override the file
    quasievo()
        .args(["info", "-n", "7", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Population Size: 7"));
}

#[test]
fn test_info_missing_config_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("absent.json");

    quasievo()
        .args(["info", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read configuration file"))
        .stderr(predicate::str::contains("Invalid configuration document").not());
}

#[test]
fn test_run_with_threads_and_progress() {
    quasievo()
        .args(["-t", "2", "run", "-g", "10", "--progress", "--seed", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final generation: 10"));
}
