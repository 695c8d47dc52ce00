use std::fmt;
use std::fmt::Write as _;

use ndarray::Array2;
use statrs::statistics::{Data, OrderStatistics, Statistics};

use super::series::{Label, Series};
use crate::error::EvalError;
use crate::value::Value;

/// Labeled 2-D container: ordered named columns over one shared row
/// index. Columns keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    index: Vec<Label>,
    columns: Vec<(String, Vec<Value>)>,
}

impl Frame {
    /// Build a frame from `(name, series)` pairs.
    ///
    /// All columns must have the same length; the row index is taken
    /// from the first column. Duplicate column names and ragged columns
    /// are rejected.
    pub fn from_columns<'a, I>(columns: I) -> Result<Frame, EvalError>
    where
        I: IntoIterator<Item = (&'a str, Series)>,
    {
        let mut index: Option<Vec<Label>> = None;
        let mut cols: Vec<(String, Vec<Value>)> = Vec::new();
        for (name, series) in columns {
            if cols.iter().any(|(existing, _)| existing == name) {
                return Err(EvalError::mismatch(
                    "frame construction",
                    format!("duplicate column '{}'", name),
                ));
            }
            match &index {
                None => index = Some(series.index().to_vec()),
                Some(idx) => {
                    if idx.len() != series.len() {
                        return Err(EvalError::mismatch(
                            "frame construction",
                            format!(
                                "column '{}' has {} rows, expected {}",
                                name,
                                series.len(),
                                idx.len()
                            ),
                        ));
                    }
                }
            }
            cols.push((name.to_string(), series.values().to_vec()));
        }
        Ok(Frame {
            index: index.unwrap_or_default(),
            columns: cols,
        })
    }

    /// Build a frame from a 2-D numeric array with positional row and
    /// column labels.
    pub fn from_matrix(m: &Array2<f64>) -> Frame {
        let (nrows, ncols) = m.dim();
        let index = (0..nrows as i64).map(Label::Int).collect();
        let columns = (0..ncols)
            .map(|c| {
                let cells = m.column(c).iter().map(|&x| Value::Float(x)).collect();
                (c.to_string(), cells)
            })
            .collect();
        Frame { index, columns }
    }

    pub fn nrows(&self) -> usize {
        self.index.len()
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// The column names as a displayable list.
    pub fn columns_value(&self) -> Value {
        Value::List(
            self.columns
                .iter()
                .map(|(name, _)| Value::Str(name.clone()))
                .collect(),
        )
    }

    pub fn index_labels(&self) -> &[Label] {
        &self.index
    }

    pub fn index_value(&self) -> Value {
        Value::List(
            self.index
                .iter()
                .map(|label| match label {
                    Label::Int(n) => Value::Int(*n),
                    Label::Str(s) => Value::Str(s.clone()),
                })
                .collect(),
        )
    }

    /// Select one column by name.
    pub fn column(&self, name: &str) -> Result<Series, EvalError> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, cells)| {
                Series::from_parts(Some(name.to_string()), self.index.clone(), cells.clone())
            })
            .ok_or_else(|| EvalError::NameNotFound(name.to_string()))
    }

    /// Select a subset of columns by name, in the order given.
    pub fn select(&self, names: &[&str]) -> Result<Frame, EvalError> {
        let mut columns = Vec::with_capacity(names.len());
        for &name in names {
            let (_, cells) = self
                .columns
                .iter()
                .find(|(existing, _)| existing == name)
                .ok_or_else(|| EvalError::NameNotFound(name.to_string()))?;
            columns.push((name.to_string(), cells.clone()));
        }
        Ok(Frame {
            index: self.index.clone(),
            columns,
        })
    }

    /// Keep the rows where the parallel mask is true, retaining their
    /// original labels.
    pub fn filter_rows(&self, mask: &[bool]) -> Result<Frame, EvalError> {
        if mask.len() != self.nrows() {
            return Err(EvalError::mismatch(
                "row filter",
                format!("{} rows against mask of length {}", self.nrows(), mask.len()),
            ));
        }
        let keep: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| if m { Some(i) } else { None })
            .collect();
        let index = keep.iter().map(|&i| self.index[i].clone()).collect();
        let columns = self
            .columns
            .iter()
            .map(|(name, cells)| {
                (
                    name.clone(),
                    keep.iter().map(|&i| cells[i].clone()).collect(),
                )
            })
            .collect();
        Ok(Frame { index, columns })
    }

    pub fn head(&self, n: usize) -> Frame {
        let n = n.min(self.nrows());
        Frame {
            index: self.index[..n].to_vec(),
            columns: self
                .columns
                .iter()
                .map(|(name, cells)| (name.clone(), cells[..n].to_vec()))
                .collect(),
        }
    }

    /// The cell values row by row, as a nested list.
    pub fn values(&self) -> Value {
        let rows = (0..self.nrows())
            .map(|r| {
                Value::List(
                    self.columns
                        .iter()
                        .map(|(_, cells)| cells[r].clone())
                        .collect(),
                )
            })
            .collect();
        Value::List(rows)
    }

    /// Structural summary: dimensions plus per-column non-null count
    /// and dtype.
    pub fn info(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Frame with {} rows and {} columns", self.nrows(), self.ncols());
        let name_width = self
            .columns
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(6)
            .max("column".len());
        let _ = writeln!(out, " #  {:<nw$}  non-null  dtype", "column", nw = name_width);
        for (i, (name, cells)) in self.columns.iter().enumerate() {
            let series = Series::from_values(cells.clone());
            let _ = writeln!(
                out,
                " {}  {:<nw$}  {:>8}  {}",
                i,
                name,
                series.len(),
                series.dtype(),
                nw = name_width
            );
        }
        out.pop();
        out
    }

    /// Summary statistics over the numeric columns.
    ///
    /// Returns a frame indexed by count/mean/std/min/25%/50%/75%/max.
    /// Standard deviation is the sample estimate; quartiles follow the
    /// statrs percentile definition.
    pub fn describe(&self) -> Frame {
        let stat_labels = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];
        let index = stat_labels.iter().map(|&s| Label::from(s)).collect();
        let mut columns = Vec::new();
        for (name, cells) in &self.columns {
            let numeric: Option<Vec<f64>> = cells.iter().map(crate::value::as_f64).collect();
            let Some(xs) = numeric else {
                continue;
            };
            if xs.is_empty() {
                continue;
            }
            let mean = Statistics::mean(xs.iter());
            let std = Statistics::std_dev(xs.iter());
            let min = Statistics::min(xs.iter());
            let max = Statistics::max(xs.iter());
            let mut data = Data::new(xs.clone());
            let stats = vec![
                xs.len() as f64,
                mean,
                std,
                min,
                data.percentile(25),
                data.percentile(50),
                data.percentile(75),
                max,
            ];
            columns.push((name.clone(), stats.into_iter().map(Value::Float).collect()));
        }
        Frame { index, columns }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let index_width = self
            .index
            .iter()
            .map(|l| l.to_string().len())
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|(name, cells)| {
                cells
                    .iter()
                    .map(|v| v.to_string().len())
                    .max()
                    .unwrap_or(0)
                    .max(name.len())
            })
            .collect();

        write!(f, "{:iw$}", "", iw = index_width)?;
        for ((name, _), width) in self.columns.iter().zip(widths.iter().copied()) {
            write!(f, "  {:>w$}", name, w = width)?;
        }
        for (r, label) in self.index.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:>iw$}", label.to_string(), iw = index_width)?;
            for ((_, cells), width) in self.columns.iter().zip(widths.iter().copied()) {
                write!(f, "  {:>w$}", cells[r].to_string(), w = width)?;
            }
        }
        Ok(())
    }
}
