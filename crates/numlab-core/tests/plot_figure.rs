//! Integration tests for figure building and rendering.

use ndarray::Array1;

use numlab_core::plot::{sample_grid, Figure, LineStyle};

fn demo_figure() -> Figure {
    let t = sample_grid(0.0, 2.0, 100);
    let squared = t.mapv(|x| x * x);
    let mut figure = Figure::new(500, 500);
    figure.set_title("Figure 1. Three curves");
    figure.add_line(&t, &t, "linear", "black", LineStyle::Solid).unwrap();
    figure
        .add_line(&t, &squared, "quadratic", "black", LineStyle::Dashed)
        .unwrap();
    figure.show_legend();
    figure
}

// ---------------------------------------------------------------------------
// Sample grid
// ---------------------------------------------------------------------------

#[test]
fn sample_grid_spans_the_interval() {
    let t = sample_grid(0.0, 2.0, 100);
    assert_eq!(t.len(), 100);
    assert!((t[0] - 0.0).abs() < 1e-12);
    assert!((t[99] - 2.0).abs() < 1e-12);
    // strictly increasing
    for w in t.to_vec().windows(2) {
        assert!(w[1] > w[0]);
    }
}

// ---------------------------------------------------------------------------
// Figure building
// ---------------------------------------------------------------------------

#[test]
fn figure_accumulates_lines_and_layout() {
    let figure = demo_figure();
    assert_eq!(figure.line_count(), 2);
    assert_eq!(figure.title(), Some("Figure 1. Three curves"));
    assert!(figure.legend_shown());
    assert_eq!(figure.lines()[0].style, LineStyle::Solid);
    assert_eq!(figure.lines()[1].style, LineStyle::Dashed);
    assert_eq!(figure.lines()[1].name, "quadratic");
}

#[test]
fn mismatched_coordinates_are_rejected() {
    let mut figure = Figure::new(500, 500);
    let x = Array1::from_vec(vec![0.0, 1.0]);
    let y = Array1::from_vec(vec![0.0]);
    assert!(figure.add_line(&x, &y, "bad", "black", LineStyle::Solid).is_err());
}

#[test]
fn lowering_to_a_plot_succeeds() {
    // shape checks happen at build time; lowering is infallible
    let _plot = demo_figure().to_plot();
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn write_html_produces_a_standalone_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("figure.html");
    demo_figure().write_html(&path);

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(!html.is_empty());
    assert!(html.contains("quadratic"), "trace name missing from html");
}
