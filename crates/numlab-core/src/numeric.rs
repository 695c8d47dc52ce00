//! Pure numeric kernels demonstrated by the lessons.
//!
//! Each function is stateless and works on scalars or elementwise on
//! arrays. Invalid input propagates as an `EvalError`; nothing here is
//! caught or recovered.
use crate::error::EvalError;
use crate::value::{as_f64, Value};

/// Square root. Scalars (including booleans, coerced to 0/1) must be
/// non-negative; arrays map elementwise.
pub fn sqrt(v: &Value) -> Result<Value, EvalError> {
    match v {
        Value::Int(_) | Value::Float(_) | Value::Bool(_) => {
            let x = as_f64(v).unwrap_or_default();
            if x < 0.0 {
                Err(EvalError::arithmetic("square root of a negative number"))
            } else {
                Ok(Value::Float(x.sqrt()))
            }
        }
        Value::Array1(a) => Ok(Value::Array1(a.mapv(f64::sqrt))),
        Value::Array2(a) => Ok(Value::Array2(a.mapv(f64::sqrt))),
        other => Err(EvalError::mismatch("sqrt", other.kind().name())),
    }
}

/// Natural exponential, elementwise on arrays.
pub fn exp(v: &Value) -> Result<Value, EvalError> {
    match v {
        Value::Int(_) | Value::Float(_) | Value::Bool(_) => {
            Ok(Value::Float(as_f64(v).unwrap_or_default().exp()))
        }
        Value::Array1(a) => Ok(Value::Array1(a.mapv(f64::exp))),
        Value::Array2(a) => Ok(Value::Array2(a.mapv(f64::exp))),
        other => Err(EvalError::mismatch("exp", other.kind().name())),
    }
}

/// 1 / (1 - x^2). Fails with an `ArithmeticError` at x = ±1 and with a
/// `TypeMismatch` on non-numeric input.
pub fn inverse_square(x: &Value) -> Result<Value, EvalError> {
    let denom = Value::Int(1).sub(&x.pow(&Value::Int(2))?)?;
    Value::Int(1).div(&denom)
}

/// x·y / (x^2 + y^2). Fails with an `ArithmeticError` at the origin.
pub fn normalized_product(x: &Value, y: &Value) -> Result<Value, EvalError> {
    let num = x.mul(y)?;
    let denom = x.pow(&Value::Int(2))?.add(&y.pow(&Value::Int(2))?)?;
    num.div(&denom)
}

/// 1 / (1 + e^t), elementwise on arrays.
pub fn logistic(t: &Value) -> Result<Value, EvalError> {
    let denom = Value::Int(1).add(&exp(t)?)?;
    Value::Int(1).div(&denom)
}
