//! Rendering interface for plot descriptions
//!
//! The analysis builds plots as data and hands them to a [`PlotSink`]. Which
//! backend draws them, if any, is up to the caller.

use crate::types::{BarPlot, BoxPlot, LinePlot};
use curve_core::Result;

/// Receives finished plots
///
/// `title` names the figure, e.g. the experiment and plot kind.
pub trait PlotSink {
    fn render_line(&mut self, title: &str, plot: &LinePlot) -> Result<()>;

    fn render_box(&mut self, title: &str, plot: &BoxPlot) -> Result<()>;

    fn render_bar(&mut self, title: &str, plot: &BarPlot) -> Result<()>;

    /// Whether plots should be built for this sink at all
    fn is_enabled(&self) -> bool {
        true
    }
}

impl<P: PlotSink + ?Sized> PlotSink for &mut P {
    fn render_line(&mut self, title: &str, plot: &LinePlot) -> Result<()> {
        (**self).render_line(title, plot)
    }

    fn render_box(&mut self, title: &str, plot: &BoxPlot) -> Result<()> {
        (**self).render_box(title, plot)
    }

    fn render_bar(&mut self, title: &str, plot: &BarPlot) -> Result<()> {
        (**self).render_bar(title, plot)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Sink that discards every plot
///
/// Reports itself as disabled so callers can skip building plots entirely.
#[derive(Default, Clone, Copy, Debug)]
pub struct NullPlotSink;

impl PlotSink for NullPlotSink {
    #[inline(always)]
    fn render_line(&mut self, _: &str, _: &LinePlot) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn render_box(&mut self, _: &str, _: &BoxPlot) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn render_bar(&mut self, _: &str, _: &BarPlot) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}

/// A plot received by a [`RecordingPlotSink`]
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedPlot {
    Line(LinePlot),
    Box(BoxPlot),
    Bar(BarPlot),
}

/// Sink that keeps every plot in memory, in the order received
#[derive(Default, Clone, Debug)]
pub struct RecordingPlotSink {
    plots: Vec<(String, RecordedPlot)>,
}

impl RecordingPlotSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plots(&self) -> &[(String, RecordedPlot)] {
        &self.plots
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.plots.iter().map(|(title, _)| title.as_str())
    }

    pub fn get(&self, title: &str) -> Option<&RecordedPlot> {
        self.plots.iter().find(|(t, _)| t == title).map(|(_, plot)| plot)
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }
}

impl PlotSink for RecordingPlotSink {
    fn render_line(&mut self, title: &str, plot: &LinePlot) -> Result<()> {
        self.plots.push((title.to_string(), RecordedPlot::Line(plot.clone())));
        Ok(())
    }

    fn render_box(&mut self, title: &str, plot: &BoxPlot) -> Result<()> {
        self.plots.push((title.to_string(), RecordedPlot::Box(plot.clone())));
        Ok(())
    }

    fn render_bar(&mut self, title: &str, plot: &BarPlot) -> Result<()> {
        self.plots.push((title.to_string(), RecordedPlot::Bar(plot.clone())));
        Ok(())
    }
}
