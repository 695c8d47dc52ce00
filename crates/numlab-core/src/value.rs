//! Dynamic value model for the tutorial session.
//!
//! Every snippet evaluates to (or binds) a `Value`. The enum covers the
//! transient data the lessons work with: scalars, lists, ranges,
//! dictionaries, fixed-shape numeric arrays with boolean masks, and the
//! labeled containers from the `table` module. Operations return
//! `Result<Value, EvalError>` so that a bad operand surfaces as a
//! `TypeMismatch` instead of a panic.
use std::collections::BTreeMap;
use std::fmt;

use ndarray::{s, Array1, Array2};

use crate::error::EvalError;
use crate::table::{Frame, Series};

/// Classification of a value, itself displayable (the lessons show
/// `kind(x)` as an expression result).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Int,
    Float,
    Bool,
    Str,
    List,
    Range,
    Dict,
    Array,
    Mask,
    Series,
    Frame,
    Type,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Str => "str",
            Kind::List => "list",
            Kind::Range => "range",
            Kind::Dict => "dict",
            Kind::Array => "array",
            Kind::Mask => "mask",
            Kind::Series => "series",
            Kind::Frame => "frame",
            Kind::Type => "type",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Vec<Value>),
    Range { start: i64, stop: i64, step: i64 },
    Dict(BTreeMap<String, Value>),
    Array1(Array1<f64>),
    Array2(Array2<f64>),
    Mask1(Array1<bool>),
    Mask2(Array2<bool>),
    Series(Series),
    Frame(Frame),
    Kind(Kind),
}

/// Numeric view of a scalar, with booleans coerced to 0/1.
pub(crate) fn as_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Int(n) => Some(*n as f64),
        Value::Float(x) => Some(*x),
        Value::Bool(b) => Some(*b as i64 as f64),
        _ => None,
    }
}

fn as_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Int(n) => Some(*n),
        Value::Bool(b) => Some(*b as i64),
        _ => None,
    }
}

fn is_numeric(v: &Value) -> bool {
    as_f64(v).is_some()
}

fn mismatch1(op: &str, v: &Value) -> EvalError {
    EvalError::mismatch(op, v.kind().name())
}

fn mismatch2(op: &str, lhs: &Value, rhs: &Value) -> EvalError {
    EvalError::mismatch(op, format!("{} and {}", lhs.kind(), rhs.kind()))
}

fn clamp_range(len: usize, start: Option<usize>, stop: Option<usize>) -> (usize, usize) {
    let a = start.unwrap_or(0).min(len);
    let b = stop.unwrap_or(len).min(len);
    (a, b.max(a))
}

fn range_items(start: i64, stop: i64, step: i64) -> Result<Vec<i64>, EvalError> {
    if step == 0 {
        return Err(EvalError::arithmetic("range() step must not be zero"));
    }
    let mut items = Vec::new();
    let mut v = start;
    if step > 0 {
        while v < stop {
            items.push(v);
            v += step;
        }
    } else {
        while v > stop {
            items.push(v);
            v += step;
        }
    }
    Ok(items)
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Bool,
            Value::Str(_) => Kind::Str,
            Value::List(_) => Kind::List,
            Value::Range { .. } => Kind::Range,
            Value::Dict(_) => Kind::Dict,
            Value::Array1(_) | Value::Array2(_) => Kind::Array,
            Value::Mask1(_) | Value::Mask2(_) => Kind::Mask,
            Value::Series(_) => Kind::Series,
            Value::Frame(_) => Kind::Frame,
            Value::Kind(_) => Kind::Type,
        }
    }

    /// Elementwise binary arithmetic over scalars and arrays.
    ///
    /// Scalar∘scalar keeps integers integral when `int_op` is given;
    /// any float operand, or an array on either side, takes the float
    /// path. Shapes must agree for array∘array.
    fn elementwise(
        &self,
        rhs: &Value,
        op: &str,
        int_op: Option<fn(i64, i64) -> Result<i64, EvalError>>,
        float_op: fn(f64, f64) -> Result<f64, EvalError>,
    ) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Array1(a), Value::Array1(b)) => {
                if a.len() != b.len() {
                    return Err(EvalError::mismatch(
                        op,
                        format!("arrays of length {} and {}", a.len(), b.len()),
                    ));
                }
                let mut out = a.clone();
                for (o, y) in out.iter_mut().zip(b.iter()) {
                    *o = float_op(*o, *y)?;
                }
                Ok(Value::Array1(out))
            }
            (Value::Array2(a), Value::Array2(b)) => {
                if a.dim() != b.dim() {
                    return Err(EvalError::mismatch(op, "arrays of different shapes"));
                }
                let mut out = a.clone();
                for (o, y) in out.iter_mut().zip(b.iter()) {
                    *o = float_op(*o, *y)?;
                }
                Ok(Value::Array2(out))
            }
            (Value::Array1(a), other) if is_numeric(other) => {
                let y = as_f64(other).unwrap_or_default();
                let mut out = a.clone();
                for o in out.iter_mut() {
                    *o = float_op(*o, y)?;
                }
                Ok(Value::Array1(out))
            }
            (other, Value::Array1(a)) if is_numeric(other) => {
                let x = as_f64(other).unwrap_or_default();
                let mut out = a.clone();
                for o in out.iter_mut() {
                    *o = float_op(x, *o)?;
                }
                Ok(Value::Array1(out))
            }
            (Value::Array2(a), other) if is_numeric(other) => {
                let y = as_f64(other).unwrap_or_default();
                let mut out = a.clone();
                for o in out.iter_mut() {
                    *o = float_op(*o, y)?;
                }
                Ok(Value::Array2(out))
            }
            (other, Value::Array2(a)) if is_numeric(other) => {
                let x = as_f64(other).unwrap_or_default();
                let mut out = a.clone();
                for o in out.iter_mut() {
                    *o = float_op(x, *o)?;
                }
                Ok(Value::Array2(out))
            }
            (lhs, rhs) => match (as_i64(lhs), as_i64(rhs), int_op) {
                (Some(x), Some(y), Some(iop)) => Ok(Value::Int(iop(x, y)?)),
                _ => match (as_f64(lhs), as_f64(rhs)) {
                    (Some(x), Some(y)) => Ok(Value::Float(float_op(x, y)?)),
                    _ => Err(mismatch2(op, lhs, rhs)),
                },
            },
        }
    }

    pub fn add(&self, rhs: &Value) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),
            (Value::List(a), Value::List(b)) => {
                let mut out = a.clone();
                out.extend(b.iter().cloned());
                Ok(Value::List(out))
            }
            _ => self.elementwise(
                rhs,
                "+",
                Some(|x, y| {
                    x.checked_add(y)
                        .ok_or_else(|| EvalError::arithmetic("integer overflow in +"))
                }),
                |x, y| Ok(x + y),
            ),
        }
    }

    pub fn sub(&self, rhs: &Value) -> Result<Value, EvalError> {
        self.elementwise(
            rhs,
            "-",
            Some(|x, y| {
                x.checked_sub(y)
                    .ok_or_else(|| EvalError::arithmetic("integer overflow in -"))
            }),
            |x, y| Ok(x - y),
        )
    }

    pub fn mul(&self, rhs: &Value) -> Result<Value, EvalError> {
        self.elementwise(
            rhs,
            "*",
            Some(|x, y| {
                x.checked_mul(y)
                    .ok_or_else(|| EvalError::arithmetic("integer overflow in *"))
            }),
            |x, y| Ok(x * y),
        )
    }

    /// True division: the result of scalar division is always a float,
    /// and a zero divisor is an `ArithmeticError` rather than an infinity.
    pub fn div(&self, rhs: &Value) -> Result<Value, EvalError> {
        self.elementwise(rhs, "/", None, |x, y| {
            if y == 0.0 {
                Err(EvalError::arithmetic("division by zero"))
            } else {
                Ok(x / y)
            }
        })
    }

    /// Exponentiation. Integer base and non-negative integer exponent
    /// stay integral; everything else goes through `f64::powf`.
    pub fn pow(&self, rhs: &Value) -> Result<Value, EvalError> {
        if let (Some(b), Some(e)) = (as_i64(self), as_i64(rhs)) {
            return if e >= 0 {
                let exp = u32::try_from(e)
                    .map_err(|_| EvalError::arithmetic("integer overflow in exponentiation"))?;
                b.checked_pow(exp)
                    .map(Value::Int)
                    .ok_or_else(|| EvalError::arithmetic("integer overflow in exponentiation"))
            } else if b == 0 {
                Err(EvalError::arithmetic("zero raised to a negative power"))
            } else {
                Ok(Value::Float((b as f64).powi(e as i32)))
            };
        }
        self.elementwise(rhs, "^", None, |x, y| Ok(x.powf(y)))
    }

    /// Equality with numeric coercion: `5 == 5.0` holds, and values of
    /// unrelated kinds compare unequal rather than failing.
    pub fn equals(&self, rhs: &Value) -> Result<Value, EvalError> {
        let eq = match (as_f64(self), as_f64(rhs)) {
            (Some(x), Some(y)) => x == y,
            _ => self == rhs,
        };
        Ok(Value::Bool(eq))
    }

    pub fn lt(&self, rhs: &Value) -> Result<Value, EvalError> {
        self.compare(rhs, "<", |x, y| x < y, |a, b| a < b)
    }

    pub fn gt(&self, rhs: &Value) -> Result<Value, EvalError> {
        self.compare(rhs, ">", |x, y| x > y, |a, b| a > b)
    }

    fn compare(
        &self,
        rhs: &Value,
        op: &str,
        num_cmp: fn(f64, f64) -> bool,
        str_cmp: fn(&str, &str) -> bool,
    ) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Array1(a), other) if is_numeric(other) => {
                let y = as_f64(other).unwrap_or_default();
                Ok(Value::Mask1(a.mapv(|x| num_cmp(x, y))))
            }
            (Value::Array2(a), other) if is_numeric(other) => {
                let y = as_f64(other).unwrap_or_default();
                Ok(Value::Mask2(a.mapv(|x| num_cmp(x, y))))
            }
            (Value::Str(a), Value::Str(b)) => Ok(Value::Bool(str_cmp(a, b))),
            (lhs, rhs) => match (as_f64(lhs), as_f64(rhs)) {
                (Some(x), Some(y)) => Ok(Value::Bool(num_cmp(x, y))),
                _ => Err(mismatch2(op, lhs, rhs)),
            },
        }
    }

    pub fn len(&self) -> Result<Value, EvalError> {
        let n = match self {
            Value::List(items) => items.len(),
            Value::Str(s) => s.chars().count(),
            Value::Dict(map) => map.len(),
            Value::Array1(a) => a.len(),
            Value::Mask1(m) => m.len(),
            Value::Series(s) => s.len(),
            Value::Range { start, stop, step } => range_items(*start, *stop, *step)?.len(),
            other => return Err(mismatch1("len", other)),
        };
        Ok(Value::Int(n as i64))
    }

    /// Bounds-checked element access; negative indices count from the end.
    pub fn index(&self, i: i64) -> Result<Value, EvalError> {
        match self {
            Value::List(items) => {
                let idx = resolve_index(i, items.len())?;
                Ok(items[idx].clone())
            }
            Value::Array1(a) => {
                let idx = resolve_index(i, a.len())?;
                Ok(Value::Float(a[idx]))
            }
            other => Err(mismatch1("indexing", other)),
        }
    }

    /// Half-open slice, clamped to the container bounds.
    pub fn slice(&self, start: Option<usize>, stop: Option<usize>) -> Result<Value, EvalError> {
        match self {
            Value::List(items) => {
                let (a, b) = clamp_range(items.len(), start, stop);
                Ok(Value::List(items[a..b].to_vec()))
            }
            Value::Str(text) => {
                let chars: Vec<char> = text.chars().collect();
                let (a, b) = clamp_range(chars.len(), start, stop);
                Ok(Value::Str(chars[a..b].iter().collect()))
            }
            Value::Array1(arr) => {
                let (a, b) = clamp_range(arr.len(), start, stop);
                Ok(Value::Array1(arr.slice(s![a..b]).to_owned()))
            }
            other => Err(mismatch1("slicing", other)),
        }
    }

    /// Two-dimensional row/column slice of a 2-D array.
    pub fn slice2(
        &self,
        rows: (Option<usize>, Option<usize>),
        cols: (Option<usize>, Option<usize>),
    ) -> Result<Value, EvalError> {
        match self {
            Value::Array2(m) => {
                let (nr, nc) = m.dim();
                let (r0, r1) = clamp_range(nr, rows.0, rows.1);
                let (c0, c1) = clamp_range(nc, cols.0, cols.1);
                Ok(Value::Array2(m.slice(s![r0..r1, c0..c1]).to_owned()))
            }
            other => Err(mismatch1("slicing", other)),
        }
    }

    pub fn shape(&self) -> Result<Value, EvalError> {
        let dims = match self {
            Value::Array1(a) => vec![a.len()],
            Value::Mask1(m) => vec![m.len()],
            Value::Array2(m) => {
                let (r, c) = m.dim();
                vec![r, c]
            }
            Value::Mask2(m) => {
                let (r, c) = m.dim();
                vec![r, c]
            }
            other => return Err(mismatch1("shape", other)),
        };
        Ok(Value::List(dims.into_iter().map(|d| Value::Int(d as i64)).collect()))
    }

    /// Select the elements of a 1-D array where a parallel boolean mask
    /// is true.
    pub fn mask_select(&self, mask: &Value) -> Result<Value, EvalError> {
        match (self, mask) {
            (Value::Array1(a), Value::Mask1(m)) => {
                if a.len() != m.len() {
                    return Err(EvalError::mismatch(
                        "mask selection",
                        format!("array of length {} against mask of length {}", a.len(), m.len()),
                    ));
                }
                let selected = a
                    .iter()
                    .zip(m.iter())
                    .filter(|(_, &keep)| keep)
                    .map(|(v, _)| *v)
                    .collect::<Array1<f64>>();
                Ok(Value::Array1(selected))
            }
            (lhs, rhs) => Err(mismatch2("mask selection", lhs, rhs)),
        }
    }

    /// Realize a lazy range into a concrete list of integers.
    pub fn to_list(&self) -> Result<Value, EvalError> {
        match self {
            Value::Range { start, stop, step } => Ok(Value::List(
                range_items(*start, *stop, *step)?
                    .into_iter()
                    .map(Value::Int)
                    .collect(),
            )),
            other => Err(mismatch1("to_list", other)),
        }
    }

    /// Dictionary insertion; an existing key is replaced, keeping keys
    /// unique.
    pub fn insert(&mut self, key: &str, value: Value) -> Result<(), EvalError> {
        match self {
            Value::Dict(map) => {
                map.insert(key.to_string(), value);
                Ok(())
            }
            other => Err(mismatch1("key insertion", other)),
        }
    }

    /// Dictionary key lookup; a missing key is a `NameNotFound`.
    pub fn get(&self, key: &str) -> Result<Value, EvalError> {
        match self {
            Value::Dict(map) => map
                .get(key)
                .cloned()
                .ok_or_else(|| EvalError::NameNotFound(key.to_string())),
            other => Err(mismatch1("key lookup", other)),
        }
    }

    pub fn into_array1(self) -> Result<Array1<f64>, EvalError> {
        match self {
            Value::Array1(a) => Ok(a),
            other => Err(mismatch1("array access", &other)),
        }
    }

    pub fn into_array2(self) -> Result<Array2<f64>, EvalError> {
        match self {
            Value::Array2(a) => Ok(a),
            other => Err(mismatch1("array access", &other)),
        }
    }

    pub fn into_series(self) -> Result<Series, EvalError> {
        match self {
            Value::Series(s) => Ok(s),
            other => Err(mismatch1("series access", &other)),
        }
    }

    pub fn into_frame(self) -> Result<Frame, EvalError> {
        match self {
            Value::Frame(f) => Ok(f),
            other => Err(mismatch1("frame access", &other)),
        }
    }
}

fn resolve_index(i: i64, len: usize) -> Result<usize, EvalError> {
    let idx = if i < 0 { i + len as i64 } else { i };
    if idx < 0 || idx >= len as i64 {
        Err(EvalError::IndexOutOfRange { index: i, len })
    } else {
        Ok(idx as usize)
    }
}

/// Format a value as it appears inside a container: strings are quoted
/// so that `["a", 2]` stays unambiguous.
pub(crate) fn fmt_nested(v: &Value, f: &mut fmt::Formatter) -> fmt::Result {
    match v {
        Value::Str(s) => write!(f, "\"{}\"", s),
        other => write!(f, "{}", other),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            // {:?} keeps the decimal point on round floats
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt_nested(item, f)?;
                }
                f.write_str("]")
            }
            Value::Range { start, stop, step } => {
                write!(f, "range({}, {}, {})", start, stop, step)
            }
            Value::Dict(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "\"{}\": ", key)?;
                    fmt_nested(value, f)?;
                }
                f.write_str("}")
            }
            Value::Array1(a) => write!(f, "{}", a),
            Value::Array2(a) => write!(f, "{}", a),
            Value::Mask1(m) => write!(f, "{}", m),
            Value::Mask2(m) => write!(f, "{}", m),
            Value::Series(s) => write!(f, "{}", s),
            Value::Frame(fr) => write!(f, "{}", fr),
            Value::Kind(k) => write!(f, "{}", k),
        }
    }
}
