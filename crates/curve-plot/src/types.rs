//! Plot configuration and plot descriptions
//!
//! Plots are described as plain numeric data. Drawing them is the job of
//! whatever [`PlotSink`](crate::sink::PlotSink) receives them.

use curve_core::{Error, Result};
use curve_series::SmoothingParameters;
use curve_summary::{BoxSummary, DEFAULT_CONFIDENCE_LEVEL};
use serde::{Deserialize, Serialize};

/// Colors used when styles are assigned from a palette
pub const DEFAULT_PALETTE: [&str; 3] = ["red", "green", "blue"];

/// Display color of one condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionStyle {
    pub condition: String,
    pub color: String,
}

/// Mapping from condition name to display color
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionStyles {
    styles: Vec<ConditionStyle>,
}

impl ConditionStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color of a condition, replacing any earlier one
    pub fn with(mut self, condition: impl Into<String>, color: impl Into<String>) -> Self {
        let condition = condition.into();
        let color = color.into();
        match self.styles.iter_mut().find(|s| s.condition == condition) {
            Some(style) => style.color = color,
            None => self.styles.push(ConditionStyle { condition, color }),
        }
        self
    }

    /// Give each condition the next color of `palette`
    ///
    /// Fails with `EmptyInput` when there are more conditions than colors.
    pub fn from_palette<S: AsRef<str>, C: AsRef<str>>(conditions: &[S], palette: &[C]) -> Result<Self> {
        if conditions.len() > palette.len() {
            return Err(Error::EmptyInput(format!(
                "{} conditions requested but only {} display colors available",
                conditions.len(),
                palette.len()
            )));
        }
        Ok(conditions
            .iter()
            .zip(palette)
            .fold(Self::new(), |styles, (condition, color)| {
                styles.with(condition.as_ref(), color.as_ref())
            }))
    }

    /// Color of a condition
    pub fn color(&self, condition: &str) -> Result<&str> {
        self.styles
            .iter()
            .find(|s| s.condition == condition)
            .map(|s| s.color.as_str())
            .ok_or_else(|| {
                Error::EmptyInput(format!("no display color configured for '{condition}'"))
            })
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConditionStyle> {
        self.styles.iter()
    }
}

/// Settings shared by the plot builders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub styles: ConditionStyles,
    /// Fixed y-axis range, `None` to let the renderer choose
    pub y_range: Option<(f64, f64)>,
    pub smoothing: SmoothingParameters,
    /// Opacity of the per-trial lines
    pub trial_alpha: f64,
    /// Line width of the median lines
    pub median_line_width: f64,
    /// Confidence level of the bar plot error bars
    pub confidence_level: f64,
}

impl PlotConfig {
    pub fn new(styles: ConditionStyles) -> Self {
        Self {
            styles,
            y_range: None,
            smoothing: SmoothingParameters::default(),
            trial_alpha: 0.3,
            median_line_width: 2.0,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }

    pub fn with_y_range(mut self, lower: f64, upper: f64) -> Self {
        self.y_range = Some((lower, upper));
        self
    }

    pub fn with_smoothing(mut self, smoothing: SmoothingParameters) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some((lower, upper)) = self.y_range {
            if !(lower < upper) {
                return Err(Error::InvalidParameter(format!(
                    "y range ({lower}, {upper}) must be increasing"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.trial_alpha) {
            return Err(Error::InvalidParameter(format!(
                "Trial line alpha {} must be in [0, 1]",
                self.trial_alpha
            )));
        }
        self.smoothing.validate()
    }
}

/// One line of a line plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    /// Legend entry, `None` for unlabelled lines
    pub label: Option<String>,
    pub color: String,
    pub alpha: f64,
    pub line_width: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Accuracy curves of every trial plus one median curve per condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePlot {
    pub series: Vec<LineSeries>,
    pub y_range: Option<(f64, f64)>,
}

impl LinePlot {
    /// The labelled (median) lines
    pub fn labelled(&self) -> impl Iterator<Item = &LineSeries> {
        self.series.iter().filter(|s| s.label.is_some())
    }
}

/// Distribution of convergence points per condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlot {
    pub boxes: Vec<BoxSummary>,
}

/// One bar with asymmetric error bars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub color: String,
    pub height: f64,
    pub lower_error: f64,
    pub upper_error: f64,
}

/// Mean convergence point per condition with confidence intervals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPlot {
    pub bars: Vec<Bar>,
    /// Bars always start at this value
    pub y_min: f64,
    pub confidence_level: f64,
}
