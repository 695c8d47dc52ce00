//! Lesson 3: labeled series and frames.
//!
//! Series construction from arrays and explicit labels, frame
//! construction from columns and matrices, structural queries,
//! summaries, and selection/filtering.
use crate::session::Snippet;
use crate::table::{Frame, Label, Series};
use crate::value::Value;

use super::arrays::{arr1, arr2_value};

fn text(s: &str) -> Value {
    Value::Str(s.to_string())
}

fn demo_frame() -> Result<Frame, crate::error::EvalError> {
    Frame::from_columns([
        ("v1", Series::from_ints(0..5)),
        (
            "v2",
            Series::from_values(vec![text("a"), text("b"), text("c"), text("d"), text("e")]),
        ),
        ("v3", Series::repeat(Value::Float(-1.3), 5)),
    ])
}

pub fn snippets() -> Vec<Snippet> {
    vec![
        // Inputs carried over from the array lesson, rebound so this
        // lesson also runs on its own
        Snippet::stmt("arr1 = array([2, 7, 14, 5, 9])", |s| {
            s.assign("arr1", arr1());
            Ok(())
        }),
        Snippet::stmt("arr2 = array([[0, 7, 2, 3], [3, 9, -5, 1]])", |s| {
            s.assign("arr2", arr2_value());
            Ok(())
        }),
        // Series
        Snippet::stmt("s1 = series(arr1)", |s| {
            let arr = s.lookup("arr1")?.into_array1()?;
            s.assign("s1", Value::Series(Series::from_array(&arr)));
            Ok(())
        }),
        Snippet::expr("s1", |s| s.lookup("s1")),
        Snippet::expr("s1.values()", |s| {
            Ok(s.lookup("s1")?.into_series()?.values_value())
        }),
        Snippet::expr("s1.index()", |s| {
            Ok(s.lookup("s1")?.into_series()?.index_value())
        }),
        Snippet::stmt("s2 = series([1, 5, \"Messi\"], [\"a\", \"b\", \"c\"])", |s| {
            let series = Series::new(
                vec![Value::Int(1), Value::Int(5), text("Messi")],
                vec![Label::from("a"), Label::from("b"), Label::from("c")],
            )?;
            s.assign("s2", Value::Series(series));
            Ok(())
        }),
        Snippet::expr("s2", |s| s.lookup("s2")),
        Snippet::expr("s2.index()", |s| {
            Ok(s.lookup("s2")?.into_series()?.index_value())
        }),
        // Frames
        Snippet::stmt(
            "df = frame({v1: range(0, 5), v2: [\"a\", \"b\", \"c\", \"d\", \"e\"], v3: repeat(-1.3, 5)})",
            |s| {
                s.assign("df", Value::Frame(demo_frame()?));
                Ok(())
            },
        ),
        Snippet::expr("df", |s| s.lookup("df")),
        Snippet::expr("df.values()", |s| Ok(s.lookup("df")?.into_frame()?.values())),
        Snippet::expr("df.index()", |s| {
            Ok(s.lookup("df")?.into_frame()?.index_value())
        }),
        Snippet::expr("df.columns()", |s| {
            Ok(s.lookup("df")?.into_frame()?.columns_value())
        }),
        Snippet::expr("frame(arr2)", |s| {
            let m = s.lookup("arr2")?.into_array2()?;
            Ok(Value::Frame(Frame::from_matrix(&m)))
        }),
        // Exploring
        Snippet::expr("df.head(2)", |s| {
            Ok(Value::Frame(s.lookup("df")?.into_frame()?.head(2)))
        }),
        Snippet::expr("df.info()", |s| {
            Ok(Value::Str(s.lookup("df")?.into_frame()?.info()))
        }),
        Snippet::expr("df.describe()", |s| {
            Ok(Value::Frame(s.lookup("df")?.into_frame()?.describe()))
        }),
        // Subsetting
        Snippet::expr("df[\"v2\"]", |s| {
            Ok(Value::Series(s.lookup("df")?.into_frame()?.column("v2")?))
        }),
        Snippet::expr("df[[\"v1\", \"v2\"]]", |s| {
            Ok(Value::Frame(
                s.lookup("df")?.into_frame()?.select(&["v1", "v2"])?,
            ))
        }),
        Snippet::expr("df[df[\"v1\"] > 2]", |s| {
            let df = s.lookup("df")?.into_frame()?;
            let mask = df.column("v1")?.gt_scalar(2.0)?;
            Ok(Value::Frame(df.filter_rows(&mask)?))
        }),
        Snippet::expr("df[df[\"v1\"] > 2][\"v2\"]", |s| {
            let df = s.lookup("df")?.into_frame()?;
            let mask = df.column("v1")?.gt_scalar(2.0)?;
            Ok(Value::Series(df.filter_rows(&mask)?.column("v2")?))
        }),
    ]
}
