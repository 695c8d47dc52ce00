//! Session state and the tutorial runner.
//!
//! A `Session` owns the variable bindings accumulated by earlier
//! snippets plus the figure currently under construction. The `Runner`
//! evaluates a snippet sequence in declaration order, auto-displaying
//! bare-expression results the way an interactive prompt would. By
//! default it reports failures verbatim and continues with the next
//! snippet.
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::plot::Figure;
use crate::value::Value;

/// Variable bindings and the active figure, exclusively owned by the
/// single execution thread for the lifetime of the run.
#[derive(Debug, Default)]
pub struct Session {
    bindings: Vec<(String, Value)>,
    figure: Option<Figure>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Bind a name, replacing any earlier binding in place.
    pub fn assign(&mut self, name: &str, value: Value) {
        match self.bindings.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value,
            None => self.bindings.push((name.to_string(), value)),
        }
    }

    /// Look a name up; referencing an undefined name is a
    /// `NameNotFound`.
    pub fn lookup(&self, name: &str) -> Result<Value, EvalError> {
        self.bindings
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .ok_or_else(|| EvalError::NameNotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(n, _)| n.as_str())
    }

    /// Start a new figure, replacing any previous one.
    pub fn begin_figure(&mut self, figure: Figure) {
        self.figure = Some(figure);
    }

    pub fn figure_mut(&mut self) -> Option<&mut Figure> {
        self.figure.as_mut()
    }

    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    pub fn take_figure(&mut self) -> Option<Figure> {
        self.figure.take()
    }
}

/// How a snippet's result is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Bare expression: the value is displayed.
    Auto,
    /// Expression whose display is suppressed (the trailing-semicolon
    /// convention of the plotting section).
    Silent,
    /// Assignment or definition: nothing is displayed.
    Statement,
}

type EvalFn = Box<dyn Fn(&mut Session) -> Result<Option<Value>, EvalError>>;

/// One standalone statement of the tutorial sequence.
pub struct Snippet {
    source: &'static str,
    mode: DisplayMode,
    run: EvalFn,
}

impl Snippet {
    /// A bare expression whose value is auto-displayed.
    pub fn expr<F>(source: &'static str, f: F) -> Self
    where
        F: Fn(&mut Session) -> Result<Value, EvalError> + 'static,
    {
        Snippet {
            source,
            mode: DisplayMode::Auto,
            run: Box::new(move |s| f(s).map(Some)),
        }
    }

    /// An assignment or definition; evaluates for its side effect only.
    pub fn stmt<F>(source: &'static str, f: F) -> Self
    where
        F: Fn(&mut Session) -> Result<(), EvalError> + 'static,
    {
        Snippet {
            source,
            mode: DisplayMode::Statement,
            run: Box::new(move |s| f(s).map(|_| None)),
        }
    }

    /// An expression with display suppressed.
    pub fn silent<F>(source: &'static str, f: F) -> Self
    where
        F: Fn(&mut Session) -> Result<(), EvalError> + 'static,
    {
        Snippet {
            source,
            mode: DisplayMode::Silent,
            run: Box::new(move |s| f(s).map(|_| None)),
        }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn eval(&self, session: &mut Session) -> Result<Option<Value>, EvalError> {
        (self.run)(session)
    }
}

impl std::fmt::Debug for Snippet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Snippet")
            .field("source", &self.source)
            .field("mode", &self.mode)
            .finish()
    }
}

/// Runner behavior, loadable from a JSON config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerOptions {
    /// Keep going after a failing snippet (the interactive behavior).
    pub continue_on_error: bool,
    /// Echo each snippet's source before its result.
    pub echo_source: bool,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            continue_on_error: true,
            echo_source: true,
        }
    }
}

/// One recorded snippet failure.
#[derive(Debug)]
pub struct SnippetFailure {
    pub source: String,
    pub error: EvalError,
}

/// Aggregate outcome of one runner pass.
#[derive(Debug, Default)]
pub struct RunReport {
    pub evaluated: usize,
    pub displayed: usize,
    pub failures: Vec<SnippetFailure>,
    pub halted: bool,
}

/// Sequential snippet evaluator.
#[derive(Debug, Default)]
pub struct Runner {
    options: RunnerOptions,
}

impl Runner {
    pub fn new(options: RunnerOptions) -> Self {
        Runner { options }
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    /// Evaluate `snippets` in order against `session`, writing sources,
    /// displayed values, and failure reports to `out`.
    ///
    /// A failing snippet terminates only its own evaluation; unless
    /// `continue_on_error` is unset, the run proceeds to the next
    /// snippet and the failure is recorded in the report.
    pub fn run<W: Write>(
        &self,
        session: &mut Session,
        snippets: &[Snippet],
        out: &mut W,
    ) -> std::io::Result<RunReport> {
        let mut report = RunReport::default();
        for snippet in snippets {
            if self.options.echo_source {
                writeln!(out, ">>> {}", snippet.source())?;
            }
            log::debug!("evaluating: {}", snippet.source());
            report.evaluated += 1;
            match snippet.eval(session) {
                Ok(Some(value)) => {
                    if snippet.mode() == DisplayMode::Auto {
                        writeln!(out, "{}", value)?;
                        report.displayed += 1;
                    }
                }
                Ok(None) => {}
                Err(error) => {
                    log::warn!("snippet '{}' failed: {}", snippet.source(), error);
                    writeln!(out, "error: {}", error)?;
                    report.failures.push(SnippetFailure {
                        source: snippet.source().to_string(),
                        error,
                    });
                    if !self.options.continue_on_error {
                        report.halted = true;
                        break;
                    }
                }
            }
        }
        Ok(report)
    }
}
