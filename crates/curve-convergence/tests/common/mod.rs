//! Shared utilities for integration tests

use curve_core::Trial;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const STEP_INTERVAL: u64 = 10;

/// Seeded generator so every run sees the same curves
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Saturating accuracy curve `plateau - (plateau - start) * exp(-i / tau)` with uniform noise
pub fn learning_curve(
    rng: &mut ChaCha8Rng,
    len: usize,
    start: f64,
    plateau: f64,
    tau: f64,
    noise: f64,
) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let clean = plateau - (plateau - start) * (-(i as f64) / tau).exp();
            (clean + rng.gen_range(-noise..=noise)).clamp(0.0, 1.0)
        })
        .collect()
}

/// Step series recorded every `STEP_INTERVAL` steps
pub fn steps(len: usize) -> Vec<u64> {
    (0..len as u64).map(|i| i * STEP_INTERVAL).collect()
}

/// Trial whose conditions follow `(name, plateau, tau)` curves; overall accuracy is their mean
pub fn trial(rng: &mut ChaCha8Rng, len: usize, conditions: &[(&str, f64, f64)]) -> Trial {
    let curves: Vec<(&str, Vec<f64>)> = conditions
        .iter()
        .map(|&(name, plateau, tau)| (name, learning_curve(rng, len, 0.5, plateau, tau, 0.01)))
        .collect();
    let total = (0..len)
        .map(|i| curves.iter().map(|(_, c)| c[i]).sum::<f64>() / curves.len() as f64)
        .collect();
    curves
        .into_iter()
        .fold(Trial::new(steps(len), total), |trial, (name, curve)| {
            trial.with_condition(name, curve)
        })
}
