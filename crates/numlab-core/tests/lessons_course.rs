//! End-to-end run of the full lesson catalogue.

use std::str::FromStr;

use numlab_core::error::EvalError;
use numlab_core::lessons::{course, Lesson};
use numlab_core::session::{Runner, RunnerOptions, Session};

// ---------------------------------------------------------------------------
// Catalogue structure
// ---------------------------------------------------------------------------

#[test]
fn every_lesson_has_snippets() {
    for lesson in Lesson::ALL {
        assert!(!lesson.snippets().is_empty(), "{} is empty", lesson.name());
    }
}

#[test]
fn course_concatenates_all_lessons_in_order() {
    let total: usize = Lesson::ALL.iter().map(|l| l.snippets().len()).sum();
    let all = course();
    assert_eq!(all.len(), total);
    assert_eq!(all[0].source(), "2 + 2");
}

#[test]
fn lesson_names_parse() {
    assert_eq!(Lesson::from_str("intro").unwrap(), Lesson::Intro);
    assert_eq!(Lesson::from_str("Plotting").unwrap(), Lesson::Plotting);
    assert!(Lesson::from_str("calculus").is_err());
}

// ---------------------------------------------------------------------------
// Full run
// ---------------------------------------------------------------------------

#[test]
fn the_whole_course_runs_with_exactly_the_intended_failures() {
    let runner = Runner::new(RunnerOptions::default());
    let mut session = Session::new();
    let mut out = Vec::new();
    let snippets = course();
    let report = runner.run(&mut session, &snippets, &mut out).unwrap();

    assert_eq!(report.evaluated, snippets.len());
    assert!(!report.halted);

    // the two pedagogical failures of the intro lesson, and nothing else
    assert_eq!(report.failures.len(), 2, "failures: {:?}", report.failures);
    assert_eq!(report.failures[0].source, "f(1)");
    assert!(matches!(report.failures[0].error, EvalError::Arithmetic(_)));
    assert_eq!(report.failures[1].source, "f(\"Mary\")");
    assert!(matches!(
        report.failures[1].error,
        EvalError::TypeMismatch { .. }
    ));
}

#[test]
fn course_output_shows_the_expected_results() {
    let runner = Runner::new(RunnerOptions::default());
    let mut session = Session::new();
    let mut out = Vec::new();
    runner.run(&mut session, &course(), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("Leo Messi"), "missing string concat result");
    assert!(output.contains("[0, 2, 4, 6, 8]"), "missing range result");
    assert!(
        output.contains("error: TypeMismatch"),
        "missing the reported type mismatch"
    );
    assert!(output.contains("dtype:"), "missing series rendering");
}

#[test]
fn the_plotting_lesson_builds_the_figure() {
    let runner = Runner::new(RunnerOptions::default());
    let mut session = Session::new();
    let mut out = Vec::new();
    let report = runner
        .run(&mut session, &Lesson::Plotting.snippets(), &mut out)
        .unwrap();
    assert!(report.failures.is_empty(), "failures: {:?}", report.failures);

    let figure = session.figure().expect("figure should be present");
    assert_eq!(figure.line_count(), 3);
    assert_eq!(figure.title(), Some("Figure 1. Three curves"));
    assert!(figure.legend_shown());

    let names: Vec<&str> = figure.lines().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["linear", "quadratic", "cubic"]);
}

#[test]
fn lessons_are_self_contained() {
    // the frames lesson rebinds its array inputs, so it runs alone
    let runner = Runner::new(RunnerOptions::default());
    let mut session = Session::new();
    let mut out = Vec::new();
    let report = runner
        .run(&mut session, &Lesson::Frames.snippets(), &mut out)
        .unwrap();
    assert!(report.failures.is_empty(), "failures: {:?}", report.failures);
}
