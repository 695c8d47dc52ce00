//! Integration tests for the demonstration kernels.

use numlab_core::error::EvalError;
use numlab_core::numeric::{exp, inverse_square, logistic, normalized_product, sqrt};
use numlab_core::value::Value;

// ---------------------------------------------------------------------------
// sqrt / exp
// ---------------------------------------------------------------------------

#[test]
fn sqrt_of_scalars() {
    let root = sqrt(&Value::Int(2)).unwrap();
    match root {
        Value::Float(x) => assert!((x - 1.4142135623730951).abs() < 1e-15),
        other => panic!("expected float, got {:?}", other),
    }
}

#[test]
fn sqrt_coerces_booleans() {
    assert_eq!(sqrt(&Value::Bool(false)).unwrap(), Value::Float(0.0));
    assert_eq!(sqrt(&Value::Bool(true)).unwrap(), Value::Float(1.0));
}

#[test]
fn sqrt_of_a_negative_scalar_fails() {
    assert!(matches!(
        sqrt(&Value::Int(-1)).unwrap_err(),
        EvalError::Arithmetic(_)
    ));
}

#[test]
fn sqrt_of_a_string_is_type_mismatch() {
    assert!(matches!(
        sqrt(&Value::Str("Mary".to_string())).unwrap_err(),
        EvalError::TypeMismatch { .. }
    ));
}

#[test]
fn exp_of_zero_is_one() {
    assert_eq!(exp(&Value::Int(0)).unwrap(), Value::Float(1.0));
}

// ---------------------------------------------------------------------------
// inverse_square: 1 / (1 - x^2)
// ---------------------------------------------------------------------------

#[test]
fn inverse_square_on_a_number() {
    let out = inverse_square(&Value::Int(2)).unwrap();
    match out {
        Value::Float(x) => assert!((x + 1.0 / 3.0).abs() < 1e-12),
        other => panic!("expected float, got {:?}", other),
    }
}

#[test]
fn inverse_square_at_one_divides_by_zero() {
    assert!(matches!(
        inverse_square(&Value::Int(1)).unwrap_err(),
        EvalError::Arithmetic(_)
    ));
}

#[test]
fn inverse_square_on_a_string_is_type_mismatch() {
    assert!(matches!(
        inverse_square(&Value::Str("Mary".to_string())).unwrap_err(),
        EvalError::TypeMismatch { .. }
    ));
}

// ---------------------------------------------------------------------------
// normalized_product: x*y / (x^2 + y^2)
// ---------------------------------------------------------------------------

#[test]
fn normalized_product_of_ones() {
    assert_eq!(
        normalized_product(&Value::Int(1), &Value::Int(1)).unwrap(),
        Value::Float(0.5)
    );
}

#[test]
fn normalized_product_at_the_origin_fails() {
    assert!(matches!(
        normalized_product(&Value::Int(0), &Value::Int(0)).unwrap_err(),
        EvalError::Arithmetic(_)
    ));
}

// ---------------------------------------------------------------------------
// logistic: 1 / (1 + e^t)
// ---------------------------------------------------------------------------

#[test]
fn logistic_at_zero_is_one_half() {
    assert_eq!(logistic(&Value::Int(0)).unwrap(), Value::Float(0.5));
}

#[test]
fn logistic_is_bounded() {
    for t in [-20, -3, 0, 3, 20] {
        match logistic(&Value::Int(t)).unwrap() {
            Value::Float(x) => assert!(x > 0.0 && x < 1.0, "logistic({}) = {}", t, x),
            other => panic!("expected float, got {:?}", other),
        }
    }
}
