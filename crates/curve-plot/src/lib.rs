//! Plot descriptions for learning-curve experiments
//!
//! Three figures are produced per experiment:
//!
//! - **Line plot**: smoothed accuracy of every trial, faint, plus a bold
//!   median curve per condition
//! - **Box plot**: distribution of convergence steps per condition
//! - **Bar plot**: mean convergence step per condition with confidence
//!   interval error bars
//!
//! Builders only produce data. A [`PlotSink`] decides what happens to it;
//! [`NullPlotSink`] drops everything and [`RecordingPlotSink`] keeps it in
//! memory.

pub mod builder;
pub mod sink;
pub mod types;

pub use builder::{build_bar_plot, build_box_plot, build_line_plot};
pub use sink::{NullPlotSink, PlotSink, RecordedPlot, RecordingPlotSink};
pub use types::{
    Bar, BarPlot, BoxPlot, ConditionStyle, ConditionStyles, LinePlot, LineSeries, PlotConfig,
    DEFAULT_PALETTE,
};
