//! Reading trials from CSV tables
//!
//! One file holds one trial. The header must contain `steps` and
//! `total_accuracy`; every other column named `<condition>_accuracy` becomes
//! a condition series. Remaining columns are ignored.

use crate::error::{Error, Result};
use curve_core::{Trial, TrialSet, TOTAL_ACCURACY};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Column holding the step number of each row
pub const STEPS_COLUMN: &str = "steps";

/// Suffix marking an accuracy column
pub const ACCURACY_SUFFIX: &str = "_accuracy";

fn check_unique_columns(headers: &csv::StringRecord) -> Result<()> {
    let mut seen = HashSet::new();
    for name in headers.iter() {
        let tracked = name == STEPS_COLUMN || name.ends_with(ACCURACY_SUFFIX);
        if tracked && !seen.insert(name) {
            return Err(Error::DuplicateColumn(name.to_string()));
        }
    }
    Ok(())
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}

fn parse_field<T: std::str::FromStr>(
    record: &csv::StringRecord,
    index: usize,
    row: usize,
    column: &str,
) -> Result<T> {
    let value = record.get(index).unwrap_or("").trim();
    value.parse().map_err(|_| Error::Parse {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// Parse one trial from CSV data
///
/// Rows are numbered from 1, not counting the header. A header naming the
/// same step or accuracy column twice is rejected.
pub fn read_trial<R: Read>(reader: R) -> Result<Trial> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    check_unique_columns(&headers)?;

    let steps_index = column_index(&headers, STEPS_COLUMN)?;
    let total_index = column_index(&headers, TOTAL_ACCURACY)?;
    let condition_columns: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter(|&(_, name)| name != TOTAL_ACCURACY)
        .filter_map(|(index, name)| {
            name.strip_suffix(ACCURACY_SUFFIX)
                .filter(|condition| !condition.is_empty())
                .map(|_| (index, name))
        })
        .collect();

    let mut steps = Vec::new();
    let mut total = Vec::new();
    let mut conditions: Vec<Vec<f64>> = vec![Vec::new(); condition_columns.len()];

    for (offset, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = offset + 1;
        steps.push(parse_field::<u64>(&record, steps_index, row, STEPS_COLUMN)?);
        total.push(parse_field::<f64>(&record, total_index, row, TOTAL_ACCURACY)?);
        for (series, &(index, name)) in conditions.iter_mut().zip(&condition_columns) {
            series.push(parse_field::<f64>(&record, index, row, name)?);
        }
    }

    let trial = condition_columns
        .iter()
        .zip(conditions)
        .fold(Trial::new(steps, total), |trial, (&(_, name), series)| {
            let condition = name.strip_suffix(ACCURACY_SUFFIX).unwrap_or(name);
            trial.with_condition(condition, series)
        });
    debug!(
        rows = trial.len(),
        conditions = condition_columns.len(),
        "Parsed trial"
    );
    Ok(trial)
}

/// Reads numbered trial files from one directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialReader {
    pub directory: PathBuf,
    pub file_prefix: String,
    pub file_extension: String,
}

impl TrialReader {
    /// Reader for `<directory>/trial_<index>.csv`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            file_prefix: "trial_".to_string(),
            file_extension: "csv".to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = extension.into();
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Location of a trial's file
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.directory.join(format!(
            "{}{}.{}",
            self.file_prefix, index, self.file_extension
        ))
    }

    /// Read and validate one trial
    pub fn read_trial(&self, index: usize) -> Result<Trial> {
        let path = self.path_for(index);
        debug!(path = %path.display(), "Reading trial {}", index);
        let file = File::open(&path).map_err(|source| Error::Open { path, source })?;
        let trial = read_trial(file)?;
        trial.validate(index)?;
        Ok(trial)
    }

    /// Read every listed trial, keyed by its index
    #[instrument(skip_all, fields(directory = %self.directory.display()))]
    pub fn read_trials<I: IntoIterator<Item = usize>>(&self, indices: I) -> Result<TrialSet> {
        let mut trials = TrialSet::new();
        for index in indices {
            trials.insert(index, self.read_trial(index)?);
        }
        debug!("Read {} trials", trials.len());
        Ok(trials)
    }
}
