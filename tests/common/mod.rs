//! Shared utilities for pipeline tests

use curve_stats::curve_core::Trial;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt::Write as _;
use std::path::Path;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Noisy saturating curve starting at 0.5
pub fn curve(rng: &mut ChaCha8Rng, len: usize, plateau: f64, tau: f64) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let clean = plateau - (plateau - 0.5) * (-(i as f64) / tau).exp();
            (clean + rng.gen_range(-0.01..=0.01)).clamp(0.0, 1.0)
        })
        .collect()
}

/// Trial with one curve per `(condition, plateau, tau)`; overall accuracy is their mean
pub fn trial(rng: &mut ChaCha8Rng, len: usize, conditions: &[(&str, f64, f64)]) -> Trial {
    let curves: Vec<(&str, Vec<f64>)> = conditions
        .iter()
        .map(|&(name, plateau, tau)| (name, curve(rng, len, plateau, tau)))
        .collect();
    let total = (0..len)
        .map(|i| curves.iter().map(|(_, c)| c[i]).sum::<f64>() / curves.len() as f64)
        .collect();
    let steps = (0..len as u64).map(|i| i * 10).collect();
    curves
        .into_iter()
        .fold(Trial::new(steps, total), |trial, (name, c)| trial.with_condition(name, c))
}

/// Write a trial in the on-disk CSV layout
pub fn write_csv(path: &Path, trial: &Trial) -> std::io::Result<()> {
    let names: Vec<&str> = trial.condition_names().collect();
    let mut table = String::from("steps,total_accuracy");
    for name in &names {
        let _ = write!(table, ",{name}_accuracy");
    }
    table.push('\n');
    for (i, step) in trial.steps().iter().enumerate() {
        let _ = write!(table, "{step},{}", trial.total_accuracy()[i]);
        for name in &names {
            let series = trial.condition(name).unwrap_or_default();
            let _ = write!(table, ",{}", series[i]);
        }
        table.push('\n');
    }
    std::fs::write(path, table)
}
