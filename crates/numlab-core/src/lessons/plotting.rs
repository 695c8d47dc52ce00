//! Lesson 4: declarative line figures.
//!
//! Builds one figure statement by statement: a sample grid, a titled
//! 500×500 canvas, three black curves in distinct dash styles, and a
//! legend. The final snippet is display-suppressed, matching the
//! trailing-semicolon convention of interactive plotting.
use crate::error::EvalError;
use crate::plot::{sample_grid, Figure, LineStyle};
use crate::session::{Session, Snippet};
use crate::value::Value;

fn active_figure(session: &mut Session) -> Result<&mut Figure, EvalError> {
    session
        .figure_mut()
        .ok_or_else(|| EvalError::NameNotFound("figure".to_string()))
}

fn add_curve(
    session: &mut Session,
    exponent: i64,
    name: &str,
    style: LineStyle,
) -> Result<(), EvalError> {
    let t = session.lookup("t")?;
    let x = t.clone().into_array1()?;
    let y = t.pow(&Value::Int(exponent))?.into_array1()?;
    active_figure(session)?.add_line(&x, &y, name, "black", style)
}

pub fn snippets() -> Vec<Snippet> {
    vec![
        Snippet::stmt("t = linspace(0.0, 2.0, 100)", |s| {
            s.assign("t", Value::Array1(sample_grid(0.0, 2.0, 100)));
            Ok(())
        }),
        Snippet::stmt("figure(500, 500)", |s| {
            s.begin_figure(Figure::new(500, 500));
            Ok(())
        }),
        Snippet::stmt("title(\"Figure 1. Three curves\")", |s| {
            active_figure(s)?.set_title("Figure 1. Three curves");
            Ok(())
        }),
        Snippet::stmt("plot(t, t, label = \"linear\", color = \"black\")", |s| {
            add_curve(s, 1, "linear", LineStyle::Solid)
        }),
        Snippet::stmt(
            "plot(t, t^2, label = \"quadratic\", color = \"black\", style = dashed)",
            |s| add_curve(s, 2, "quadratic", LineStyle::Dashed),
        ),
        Snippet::stmt(
            "plot(t, t^3, label = \"cubic\", color = \"black\", style = dotted)",
            |s| add_curve(s, 3, "cubic", LineStyle::Dotted),
        ),
        Snippet::silent("legend();", |s| {
            active_figure(s)?.show_legend();
            Ok(())
        }),
    ]
}
