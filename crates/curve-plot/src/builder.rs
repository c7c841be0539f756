//! Builders turning trials and convergence summaries into plot descriptions

use crate::types::{Bar, BarPlot, BoxPlot, LinePlot, LineSeries, PlotConfig};
use curve_convergence::ConvergenceSummary;
use curve_core::{Error, Result, TrialSet};
use curve_series::{median_unequal_lengths, EwmaSmoother};
use curve_summary::{BoxSummary, ConditionSummary};
use tracing::{debug, instrument};

const TRIAL_LINE_WIDTH: f64 = 1.0;

fn missing_condition(summary: &ConvergenceSummary, condition: &str) -> Error {
    Error::InvalidInput(format!(
        "Condition '{condition}' is not in the summary (have: {})",
        summary.conditions().collect::<Vec<_>>().join(", ")
    ))
}

/// Accuracy curves of every trial with a median curve per condition
///
/// Each (trial, condition) series is smoothed and drawn faintly over that
/// trial's steps. The point-wise median of the smoothed series is smoothed
/// again and drawn bold and labelled. Median x values come from the steps of
/// the longest trial, which covers every median position.
#[instrument(skip_all, fields(trials = trials.len(), conditions = conditions.len()))]
pub fn build_line_plot<S: AsRef<str>>(
    trials: &TrialSet,
    conditions: &[S],
    config: &PlotConfig,
) -> Result<LinePlot> {
    config.validate()?;
    if trials.is_empty() {
        return Err(Error::EmptyInput("no trials to plot".to_string()));
    }
    trials.validate()?;
    let smoother = EwmaSmoother::new(config.smoothing)?;

    let longest = trials
        .iter()
        .map(|(_, trial)| trial)
        .max_by_key(|trial| trial.len())
        .ok_or_else(|| Error::empty_input("line plot"))?;

    let mut series = Vec::with_capacity((trials.len() + 1) * conditions.len());
    for condition in conditions {
        let condition = condition.as_ref();
        let color = config.styles.color(condition)?;

        let mut smoothed = Vec::with_capacity(trials.len());
        for (&index, trial) in trials {
            let accuracy = trial.condition(condition).ok_or_else(|| Error::MissingSeries {
                trial: index,
                series: condition.to_string(),
            })?;
            let y = smoother.smooth(accuracy);
            series.push(LineSeries {
                label: None,
                color: color.to_string(),
                alpha: config.trial_alpha,
                line_width: TRIAL_LINE_WIDTH,
                x: trial.steps().iter().map(|&s| s as f64).collect(),
                y: y.clone(),
            });
            smoothed.push(y);
        }

        let median = smoother.smooth(&median_unequal_lengths(&smoothed)?);
        let x = longest.steps()[..median.len()]
            .iter()
            .map(|&s| s as f64)
            .collect();
        debug!(condition, points = median.len(), "Built median line");
        series.push(LineSeries {
            label: Some(condition.to_string()),
            color: color.to_string(),
            alpha: 1.0,
            line_width: config.median_line_width,
            x,
            y: median,
        });
    }

    Ok(LinePlot {
        series,
        y_range: config.y_range,
    })
}

/// One box per condition over its convergence steps
pub fn build_box_plot<S: AsRef<str>>(
    summary: &ConvergenceSummary,
    conditions: &[S],
) -> Result<BoxPlot> {
    let boxes = conditions
        .iter()
        .map(|condition| -> Result<BoxSummary> {
            let condition = condition.as_ref();
            let points = summary
                .get_f64(condition)
                .ok_or_else(|| missing_condition(summary, condition))?;
            BoxSummary::from_sample(condition, &points)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(BoxPlot { boxes })
}

/// Mean convergence step per condition with confidence-interval error bars
pub fn build_bar_plot<S: AsRef<str>>(
    summary: &ConvergenceSummary,
    conditions: &[S],
    config: &PlotConfig,
) -> Result<BarPlot> {
    let bars = conditions
        .iter()
        .map(|condition| -> Result<Bar> {
            let condition = condition.as_ref();
            let points = summary
                .get_f64(condition)
                .ok_or_else(|| missing_condition(summary, condition))?;
            let stats = ConditionSummary::from_points(condition, &points, config.confidence_level)?;
            Ok(Bar {
                label: condition.to_string(),
                color: config.styles.color(condition)?.to_string(),
                height: stats.mean,
                lower_error: stats.interval.lower_error(),
                upper_error: stats.interval.upper_error(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(BarPlot {
        bars,
        y_min: 0.0,
        confidence_level: config.confidence_level,
    })
}
