//! numlab-core: an interactive numerical-programming tutorial as a library.
//!
//! This crate models a two-lesson introductory course as data: a dynamic
//! value model (`value`), a failure taxonomy (`error`), a session with
//! ordered variable bindings and a sequential snippet runner (`session`),
//! labeled 1-D/2-D containers (`table`), small numeric kernels
//! (`numeric`), declarative figure building over plotly (`plot`), and the
//! fixed snippet catalogue itself (`lessons`).
//!
//! The design favors small, testable modules: every snippet is an
//! independent closure over the session, every failure surfaces as one of
//! four `EvalError` conditions, and the runner reports failures verbatim
//! while continuing with the next snippet, the way an interactive prompt
//! would.
pub mod error;
pub mod lessons;
pub mod numeric;
pub mod plot;
pub mod session;
pub mod table;
pub mod value;
