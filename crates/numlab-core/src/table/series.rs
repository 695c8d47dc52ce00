use std::fmt;

use ndarray::Array1;

use crate::error::EvalError;
use crate::value::Value;

/// Index label of a row: positional integer or explicit string.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Int(i64),
    Str(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Int(n) => write!(f, "{}", n),
            Label::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Int(value)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Str(value.to_string())
    }
}

impl Label {
    fn as_value(&self) -> Value {
        match self {
            Label::Int(n) => Value::Int(*n),
            Label::Str(s) => Value::Str(s.clone()),
        }
    }
}

/// Labeled 1-D container: a parallel index/value pair with an optional
/// name (set when the series is a frame column).
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: Option<String>,
    index: Vec<Label>,
    values: Vec<Value>,
}

impl Series {
    /// Build a series from explicit values and labels.
    pub fn new(values: Vec<Value>, index: Vec<Label>) -> Result<Self, EvalError> {
        if values.len() != index.len() {
            return Err(EvalError::mismatch(
                "series construction",
                format!("{} values against {} labels", values.len(), index.len()),
            ));
        }
        Ok(Series {
            name: None,
            index,
            values,
        })
    }

    /// Build a series with a default positional index.
    pub fn from_values(values: Vec<Value>) -> Self {
        let index = (0..values.len() as i64).map(Label::Int).collect();
        Series {
            name: None,
            index,
            values,
        }
    }

    pub fn from_array(arr: &Array1<f64>) -> Self {
        Series::from_values(arr.iter().map(|&x| Value::Float(x)).collect())
    }

    pub fn from_ints<I: IntoIterator<Item = i64>>(values: I) -> Self {
        Series::from_values(values.into_iter().map(Value::Int).collect())
    }

    /// Repeat one scalar `n` times.
    pub fn repeat(value: Value, n: usize) -> Self {
        Series::from_values(vec![value; n])
    }

    pub(crate) fn from_parts(name: Option<String>, index: Vec<Label>, values: Vec<Value>) -> Self {
        Series {
            name,
            index,
            values,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn index(&self) -> &[Label] {
        &self.index
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The index as a displayable list of labels.
    pub fn index_value(&self) -> Value {
        Value::List(self.index.iter().map(Label::as_value).collect())
    }

    /// The stored values: a numeric array when every cell is numeric,
    /// otherwise a plain list.
    pub fn values_value(&self) -> Value {
        match self.numeric() {
            Some(xs) => Value::Array1(Array1::from_vec(xs)),
            None => Value::List(self.values.clone()),
        }
    }

    /// All cells as `f64`, or `None` if any cell is non-numeric.
    pub fn numeric(&self) -> Option<Vec<f64>> {
        self.values.iter().map(crate::value::as_f64).collect()
    }

    /// Column dtype as reported by `info`.
    pub fn dtype(&self) -> &'static str {
        let mut all_int = true;
        let mut all_str = true;
        let mut all_bool = true;
        let mut all_numeric = true;
        for v in &self.values {
            match v {
                Value::Int(_) => {
                    all_str = false;
                    all_bool = false;
                }
                Value::Float(_) => {
                    all_int = false;
                    all_str = false;
                    all_bool = false;
                }
                Value::Bool(_) => {
                    all_int = false;
                    all_str = false;
                }
                Value::Str(_) => {
                    all_int = false;
                    all_bool = false;
                    all_numeric = false;
                }
                _ => {
                    all_int = false;
                    all_str = false;
                    all_bool = false;
                    all_numeric = false;
                }
            }
        }
        if all_bool {
            "bool"
        } else if all_int {
            "int"
        } else if all_numeric {
            "float"
        } else if all_str {
            "str"
        } else {
            "mixed"
        }
    }

    pub fn gt_scalar(&self, rhs: f64) -> Result<Vec<bool>, EvalError> {
        self.compare_scalar(rhs, ">", |x, y| x > y)
    }

    pub fn lt_scalar(&self, rhs: f64) -> Result<Vec<bool>, EvalError> {
        self.compare_scalar(rhs, "<", |x, y| x < y)
    }

    fn compare_scalar(
        &self,
        rhs: f64,
        op: &str,
        cmp: fn(f64, f64) -> bool,
    ) -> Result<Vec<bool>, EvalError> {
        self.values
            .iter()
            .map(|v| {
                crate::value::as_f64(v)
                    .map(|x| cmp(x, rhs))
                    .ok_or_else(|| EvalError::mismatch(op, v.kind().name()))
            })
            .collect()
    }

    /// Keep the rows where the parallel mask is true, retaining their
    /// original labels.
    pub fn filter(&self, mask: &[bool]) -> Result<Series, EvalError> {
        if mask.len() != self.len() {
            return Err(EvalError::mismatch(
                "row filter",
                format!("{} rows against mask of length {}", self.len(), mask.len()),
            ));
        }
        let mut index = Vec::new();
        let mut values = Vec::new();
        for (i, &keep) in mask.iter().enumerate() {
            if keep {
                index.push(self.index[i].clone());
                values.push(self.values[i].clone());
            }
        }
        Ok(Series {
            name: self.name.clone(),
            index,
            values,
        })
    }

    pub fn head(&self, n: usize) -> Series {
        let n = n.min(self.len());
        Series {
            name: self.name.clone(),
            index: self.index[..n].to_vec(),
            values: self.values[..n].to_vec(),
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label_width = self
            .index
            .iter()
            .map(|l| l.to_string().len())
            .max()
            .unwrap_or(0);
        let value_width = self
            .values
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(0);
        for (label, value) in self.index.iter().zip(self.values.iter()) {
            writeln!(
                f,
                "{:<lw$}  {:>vw$}",
                label.to_string(),
                value.to_string(),
                lw = label_width,
                vw = value_width
            )?;
        }
        match &self.name {
            Some(name) => write!(f, "name: {}, dtype: {}", name, self.dtype()),
            None => write!(f, "dtype: {}", self.dtype()),
        }
    }
}
