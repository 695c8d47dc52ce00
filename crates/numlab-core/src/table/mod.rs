//! Labeled one- and two-dimensional containers.
//!
//! `Series` pairs every stored value with an explicit index label;
//! `Frame` is an ordered set of named columns sharing one row index.
//! Both support selection by name, row filtering through boolean masks,
//! and the summary queries the lessons demonstrate (`head`, `info`,
//! `describe`).
mod frame;
mod series;

pub use frame::Frame;
pub use series::{Label, Series};
