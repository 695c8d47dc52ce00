//! Lesson 2: fixed-shape numeric arrays.
//!
//! Construction, shape queries, elementwise math, slicing, and boolean
//! masking.
use ndarray::{arr2, Array1};

use crate::numeric::{logistic, sqrt};
use crate::session::Snippet;
use crate::value::Value;

pub(crate) fn arr1() -> Value {
    Value::Array1(Array1::from_vec(vec![2.0, 7.0, 14.0, 5.0, 9.0]))
}

pub(crate) fn arr2_value() -> Value {
    Value::Array2(arr2(&[[0.0, 7.0, 2.0, 3.0], [3.0, 9.0, -5.0, 1.0]]))
}

pub fn snippets() -> Vec<Snippet> {
    vec![
        // Construction
        Snippet::stmt("arr1 = array([2, 7, 14, 5, 9])", |s| {
            s.assign("arr1", arr1());
            Ok(())
        }),
        Snippet::expr("arr1", |s| s.lookup("arr1")),
        Snippet::stmt("arr2 = array([[0, 7, 2, 3], [3, 9, -5, 1]])", |s| {
            s.assign("arr2", arr2_value());
            Ok(())
        }),
        Snippet::expr("arr2", |s| s.lookup("arr2")),
        Snippet::expr("arr1.shape()", |s| s.lookup("arr1")?.shape()),
        Snippet::expr("arr2.shape()", |s| s.lookup("arr2")?.shape()),
        // Elementwise math
        Snippet::expr("sqrt(arr1)", |s| sqrt(&s.lookup("arr1")?)),
        Snippet::stmt("fn f(t) = 1 / (1 + exp(t))", |_| Ok(())),
        Snippet::expr("f(arr2)", |s| logistic(&s.lookup("arr2")?)),
        // Subsetting
        Snippet::expr("arr1[..3]", |s| s.lookup("arr1")?.slice(None, Some(3))),
        Snippet::expr("arr2[..1, 1..]", |s| {
            s.lookup("arr2")?.slice2((None, Some(1)), (Some(1), None))
        }),
        Snippet::expr("arr1 > 3", |s| s.lookup("arr1")?.gt(&Value::Int(3))),
        Snippet::expr("arr2 > 2", |s| s.lookup("arr2")?.gt(&Value::Int(2))),
        Snippet::expr("arr1[arr1 > 3]", |s| {
            let arr = s.lookup("arr1")?;
            let mask = arr.gt(&Value::Int(3))?;
            arr.mask_select(&mask)
        }),
        Snippet::expr("arr1[[false, true, true, true, true]]", |s| {
            let mask = Value::Mask1(Array1::from_vec(vec![false, true, true, true, true]));
            s.lookup("arr1")?.mask_select(&mask)
        }),
    ]
}
