use curve_io::{Error, TrialReader};
use std::fs;
use tempfile::TempDir;

fn write_trial(dir: &TempDir, name: &str, rows: &[(u64, f64, f64)]) {
    let mut table = String::from("steps,total_accuracy,not_all_accuracy\n");
    for (step, total, not_all) in rows {
        table.push_str(&format!("{step},{total},{not_all}\n"));
    }
    fs::write(dir.path().join(name), table).unwrap();
}

#[test]
fn reads_numbered_trials_in_index_order() {
    let dir = TempDir::new().unwrap();
    write_trial(&dir, "trial_0.csv", &[(0, 0.5, 0.4), (10, 1.0, 1.0)]);
    write_trial(&dir, "trial_1.csv", &[(0, 0.6, 0.5), (10, 0.9, 0.8), (20, 1.0, 1.0)]);
    write_trial(&dir, "trial_2.csv", &[(0, 0.7, 0.7)]);

    let trials = TrialReader::new(dir.path()).read_trials([2, 0, 1]).unwrap();
    assert_eq!(trials.indices(), vec![0, 1, 2]);
    assert_eq!(trials.get(1).unwrap().steps(), &[0, 10, 20]);
    assert_eq!(trials.get(2).unwrap().condition("not_all"), Some(&[0.7][..]));
}

#[test]
fn subset_of_indices_reads_only_those_files() {
    let dir = TempDir::new().unwrap();
    write_trial(&dir, "trial_3.csv", &[(0, 0.5, 0.5)]);

    let trials = TrialReader::new(dir.path()).read_trials([3]).unwrap();
    assert_eq!(trials.len(), 1);
}

#[test]
fn missing_file_reports_its_path() {
    let dir = TempDir::new().unwrap();
    write_trial(&dir, "trial_0.csv", &[(0, 0.5, 0.5)]);

    let err = TrialReader::new(dir.path()).read_trials(0..2).unwrap_err();
    match err {
        Error::Open { path, .. } => assert!(path.ends_with("trial_1.csv")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn custom_file_naming() {
    let dir = TempDir::new().unwrap();
    write_trial(&dir, "run-5.txt", &[(0, 0.5, 0.5), (10, 0.7, 0.6)]);

    let reader = TrialReader::new(dir.path()).with_prefix("run-").with_extension("txt");
    let trials = reader.read_trials([5]).unwrap();
    assert_eq!(trials.get(5).unwrap().len(), 2);
}
