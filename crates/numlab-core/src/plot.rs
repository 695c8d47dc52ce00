//! Declarative 2-D line figures, lowered to plotly for rendering.
//!
//! `Figure` collects the line series and layout the plotting lesson
//! builds up statement by statement; `to_plot` turns the accumulated
//! description into a `plotly::Plot` that can be written out as
//! standalone HTML. The builder itself stays inspectable so tests can
//! check trace names and styles without rendering anything.
use std::path::Path;

use itertools_num::linspace;
use ndarray::Array1;
use plotly::common::{DashType, Line, Mode};
use plotly::layout::Layout;
use plotly::{Plot, Scatter};

use crate::error::EvalError;

/// Dash style of one line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    fn dash(self) -> DashType {
        match self {
            LineStyle::Solid => DashType::Solid,
            LineStyle::Dashed => DashType::Dash,
            LineStyle::Dotted => DashType::Dot,
        }
    }
}

/// One line series of a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub name: String,
    pub color: &'static str,
    pub style: LineStyle,
}

/// A figure under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    width: usize,
    height: usize,
    title: Option<String>,
    lines: Vec<LineSpec>,
    legend: bool,
}

impl Figure {
    pub fn new(width: usize, height: usize) -> Self {
        Figure {
            width,
            height,
            title: None,
            lines: Vec::new(),
            legend: false,
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Add one line series. The two coordinate arrays must have the
    /// same length.
    pub fn add_line(
        &mut self,
        x: &Array1<f64>,
        y: &Array1<f64>,
        name: &str,
        color: &'static str,
        style: LineStyle,
    ) -> Result<(), EvalError> {
        if x.len() != y.len() {
            return Err(EvalError::mismatch(
                "plot",
                format!("x of length {} against y of length {}", x.len(), y.len()),
            ));
        }
        self.lines.push(LineSpec {
            x: x.to_vec(),
            y: y.to_vec(),
            name: name.to_string(),
            color,
            style,
        });
        Ok(())
    }

    pub fn show_legend(&mut self) {
        self.legend = true;
    }

    pub fn legend_shown(&self) -> bool {
        self.legend
    }

    pub fn lines(&self) -> &[LineSpec] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lower the accumulated description to a renderable plot.
    pub fn to_plot(&self) -> Plot {
        let mut plot = Plot::new();
        for spec in &self.lines {
            let trace = Scatter::new(spec.x.clone(), spec.y.clone())
                .mode(Mode::Lines)
                .name(&spec.name)
                .line(Line::new().color(spec.color).dash(spec.style.dash()));
            plot.add_trace(trace);
        }
        let mut layout = Layout::new()
            .width(self.width)
            .height(self.height)
            .show_legend(self.legend);
        if let Some(title) = &self.title {
            layout = layout.title(title.as_str());
        }
        plot.set_layout(layout);
        plot
    }

    /// Render the figure as a standalone HTML file.
    pub fn write_html<P: AsRef<Path>>(&self, path: P) {
        self.to_plot().write_html(path);
    }
}

/// Evenly spaced sample grid over `[start, stop]`.
pub fn sample_grid(start: f64, stop: f64, n: usize) -> Array1<f64> {
    let samples: Vec<f64> = linspace(start, stop, n).collect();
    Array1::from_vec(samples)
}
