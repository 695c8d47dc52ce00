//! Integration tests for array construction, subsetting, and masking.

use ndarray::{arr2, Array1};

use numlab_core::error::EvalError;
use numlab_core::numeric::{logistic, sqrt};
use numlab_core::value::Value;

fn arr1() -> Value {
    Value::Array1(Array1::from_vec(vec![2.0, 7.0, 14.0, 5.0, 9.0]))
}

fn arr2_value() -> Value {
    Value::Array2(arr2(&[[0.0, 7.0, 2.0, 3.0], [3.0, 9.0, -5.0, 1.0]]))
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

#[test]
fn shape_queries() {
    assert_eq!(arr1().shape().unwrap(), Value::List(vec![Value::Int(5)]));
    assert_eq!(
        arr2_value().shape().unwrap(),
        Value::List(vec![Value::Int(2), Value::Int(4)])
    );
}

#[test]
fn shape_of_a_scalar_fails() {
    assert!(matches!(
        Value::Int(2).shape().unwrap_err(),
        EvalError::TypeMismatch { .. }
    ));
}

// ---------------------------------------------------------------------------
// Elementwise math
// ---------------------------------------------------------------------------

#[test]
fn sqrt_maps_elementwise() {
    let out = sqrt(&arr1()).unwrap().into_array1().unwrap();
    assert_eq!(out.len(), 5);
    assert!((out[0] - 2.0_f64.sqrt()).abs() < 1e-12);
    assert!((out[2] - 14.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn logistic_maps_elementwise_on_matrices() {
    let out = logistic(&arr2_value()).unwrap().into_array2().unwrap();
    assert_eq!(out.dim(), (2, 4));
    // t = 0 gives exactly 1/2
    assert!((out[(0, 0)] - 0.5).abs() < 1e-12);
    // t = -5 is close to 1
    assert!(out[(1, 2)] > 0.99);
}

#[test]
fn scalar_array_arithmetic_broadcasts() {
    let doubled = arr1().mul(&Value::Int(2)).unwrap().into_array1().unwrap();
    assert_eq!(doubled, Array1::from_vec(vec![4.0, 14.0, 28.0, 10.0, 18.0]));

    let shifted = Value::Int(1).add(&arr1()).unwrap().into_array1().unwrap();
    assert_eq!(shifted[0], 3.0);
}

#[test]
fn array_arithmetic_requires_matching_lengths() {
    let short = Value::Array1(Array1::from_vec(vec![1.0, 2.0]));
    let err = arr1().add(&short).unwrap_err();
    assert!(matches!(err, EvalError::TypeMismatch { .. }), "got {:?}", err);
}

#[test]
fn dividing_by_an_array_with_zeros_fails() {
    let with_zero = Value::Array1(Array1::from_vec(vec![1.0, 0.0]));
    let err = Value::Int(1).div(&with_zero).unwrap_err();
    assert!(matches!(err, EvalError::Arithmetic(_)), "got {:?}", err);
}

// ---------------------------------------------------------------------------
// Subsetting
// ---------------------------------------------------------------------------

#[test]
fn one_dimensional_slicing() {
    let head = arr1().slice(None, Some(3)).unwrap();
    assert_eq!(head, Value::Array1(Array1::from_vec(vec![2.0, 7.0, 14.0])));
}

#[test]
fn two_dimensional_slicing() {
    let sub = arr2_value().slice2((None, Some(1)), (Some(1), None)).unwrap();
    assert_eq!(sub, Value::Array2(arr2(&[[7.0, 2.0, 3.0]])));
}

#[test]
fn comparison_produces_a_mask() {
    let mask = arr1().gt(&Value::Int(3)).unwrap();
    assert_eq!(
        mask,
        Value::Mask1(Array1::from_vec(vec![false, true, true, true, true]))
    );
}

#[test]
fn mask_selection_keeps_order() {
    let arr = arr1();
    let mask = arr.gt(&Value::Int(3)).unwrap();
    let selected = arr.mask_select(&mask).unwrap();
    assert_eq!(
        selected,
        Value::Array1(Array1::from_vec(vec![7.0, 14.0, 5.0, 9.0]))
    );
}

#[test]
fn literal_mask_matches_expression_mask() {
    let arr = arr1();
    let by_expr = arr.mask_select(&arr.gt(&Value::Int(3)).unwrap()).unwrap();
    let literal = Value::Mask1(Array1::from_vec(vec![false, true, true, true, true]));
    let by_literal = arr.mask_select(&literal).unwrap();
    assert_eq!(by_expr, by_literal);
}

#[test]
fn mask_length_must_match() {
    let short = Value::Mask1(Array1::from_vec(vec![true, false]));
    let err = arr1().mask_select(&short).unwrap_err();
    assert!(matches!(err, EvalError::TypeMismatch { .. }), "got {:?}", err);
}
