//! End-to-end analysis of one experiment
//!
//! filter bad trials → aggregate convergence points → summaries and paired
//! differences → plots

use crate::error::Result;
use crate::experiment::ExperimentConfig;
use curve_convergence::{ConvergenceAggregator, ConvergenceSummary, ForwardMeanDetector, TrialFilter};
use curve_core::{Error as CoreError, TrialSet};
use curve_io::TrialReader;
use curve_plot::{
    build_bar_plot, build_box_plot, build_line_plot, ConditionStyles, PlotConfig, PlotSink,
    DEFAULT_PALETTE,
};
use curve_summary::{summarize_conditions, ConditionSummary, PairedComparison};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Results of analysing one experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub experiment: String,
    /// Trials dropped because their overall accuracy never converged
    pub removed_trials: usize,
    pub surviving_trials: Vec<usize>,
    pub convergence: ConvergenceSummary,
    pub conditions: Vec<ConditionSummary>,
    pub comparisons: Vec<PairedComparison>,
}

impl ExperimentReport {
    pub fn condition(&self, name: &str) -> Option<&ConditionSummary> {
        self.conditions.iter().find(|c| c.condition == name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Analyse trials that are already loaded
///
/// Bad trials are removed from `trials` in place. Plots are built only when
/// the configuration asks for them and the sink is enabled.
///
/// # Errors
///
/// - `InvalidConfig` for an inconsistent configuration
/// - `EmptyInput` when no trial survives filtering
/// - any error of the filter, aggregator, summaries or plot builders
#[instrument(skip_all, fields(experiment = %config.name, trials = trials.len()))]
pub fn analyze<P: PlotSink>(
    config: &ExperimentConfig,
    trials: &mut TrialSet,
    mut sink: P,
) -> Result<ExperimentReport> {
    config.validate()?;
    let detector = ForwardMeanDetector::new(config.convergence);

    let removed_trials = TrialFilter::new(detector).remove_bad_trials(trials)?;
    if trials.is_empty() {
        return Err(CoreError::EmptyInput(format!(
            "{}: no trials left after removing {} bad trials",
            config.name, removed_trials
        ))
        .into());
    }

    let convergence = ConvergenceAggregator::new(detector).aggregate(trials, &config.conditions)?;
    let conditions =
        summarize_conditions(&convergence, &config.conditions, config.confidence_level)?;
    for summary in &conditions {
        info!("{}", summary);
    }

    let comparisons = config
        .comparisons
        .iter()
        .map(|c| PairedComparison::from_summary(&convergence, &c.first, &c.second))
        .collect::<std::result::Result<Vec<_>, CoreError>>()?;
    for comparison in &comparisons {
        info!(
            "{} - {}: mean difference {:.2} over {} trials",
            comparison.first,
            comparison.second,
            comparison.mean_difference(),
            comparison.differences.len()
        );
    }

    if config.plots && sink.is_enabled() {
        render_plots(config, trials, &convergence, &mut sink)?;
    } else {
        debug!("Skipping plots");
    }

    Ok(ExperimentReport {
        experiment: config.name.clone(),
        removed_trials,
        surviving_trials: trials.indices(),
        convergence,
        conditions,
        comparisons,
    })
}

fn render_plots<P: PlotSink>(
    config: &ExperimentConfig,
    trials: &TrialSet,
    convergence: &ConvergenceSummary,
    sink: &mut P,
) -> Result<()> {
    let styles = ConditionStyles::from_palette(&config.conditions, &DEFAULT_PALETTE)?;
    let (lower, upper) = config.y_range;
    let mut plot_config = PlotConfig::new(styles).with_y_range(lower, upper);
    plot_config.confidence_level = config.confidence_level;

    let boxes = build_box_plot(convergence, &config.conditions)?;
    sink.render_box(&format!("{} convergence points", config.name), &boxes)?;

    let bars = build_bar_plot(convergence, &config.conditions, &plot_config)?;
    sink.render_bar(&format!("{} mean convergence points", config.name), &bars)?;

    let lines = build_line_plot(trials, &config.conditions, &plot_config)?;
    sink.render_line(&format!("{} accuracy", config.name), &lines)?;
    Ok(())
}

/// Load trials `0..config.trials` through `reader`, then analyse them
pub fn run_experiment<P: PlotSink>(
    config: &ExperimentConfig,
    reader: &TrialReader,
    sink: P,
) -> Result<ExperimentReport> {
    config.validate()?;
    let mut trials = reader.read_trials(0..config.trials)?;
    info!("Loaded {} trials for {}", trials.len(), config.name);
    analyze(config, &mut trials, sink)
}
