//! Lesson 1: language primitives.
//!
//! Arithmetic and assignment, type classification, booleans, strings,
//! lists, ranges, dictionaries, and two small demonstration functions.
//! Two calls fail on purpose so the learner sees how failures are
//! reported without stopping the run.
use std::collections::BTreeMap;

use crate::numeric::{inverse_square, normalized_product, sqrt};
use crate::session::Snippet;
use crate::value::Value;

fn int(v: i64) -> Value {
    Value::Int(v)
}

fn text(s: &str) -> Value {
    Value::Str(s.to_string())
}

pub fn snippets() -> Vec<Snippet> {
    vec![
        // Arithmetic and assignment
        Snippet::expr("2 + 2", |_| int(2).add(&int(2))),
        Snippet::stmt("a = 2 + 2", |s| {
            let v = int(2).add(&int(2))?;
            s.assign("a", v);
            Ok(())
        }),
        Snippet::expr("a", |s| s.lookup("a")),
        Snippet::stmt("a = 7 - 2", |s| {
            let v = int(7).sub(&int(2))?;
            s.assign("a", v);
            Ok(())
        }),
        Snippet::expr("a", |s| s.lookup("a")),
        Snippet::stmt("b = 2 * 3", |s| {
            let v = int(2).mul(&int(3))?;
            s.assign("b", v);
            Ok(())
        }),
        Snippet::expr("b - 1", |s| s.lookup("b")?.sub(&int(1))),
        Snippet::expr("b^2", |s| s.lookup("b")?.pow(&int(2))),
        Snippet::expr("sqrt(2)", |_| sqrt(&int(2))),
        // Numeric kinds
        Snippet::expr("kind(a)", |s| Ok(Value::Kind(s.lookup("a")?.kind()))),
        Snippet::expr("kind(2.5)", |_| Ok(Value::Kind(Value::Float(2.5).kind()))),
        Snippet::expr("kind(2)", |_| Ok(Value::Kind(int(2).kind()))),
        Snippet::expr("kind(2.0)", |_| Ok(Value::Kind(Value::Float(2.0).kind()))),
        Snippet::expr("2 + 2.5", |_| int(2).add(&Value::Float(2.5))),
        // Booleans
        Snippet::stmt("d = 5 < a", |s| {
            let v = int(5).lt(&s.lookup("a")?)?;
            s.assign("d", v);
            Ok(())
        }),
        Snippet::expr("d", |s| s.lookup("d")),
        Snippet::expr("kind(d)", |s| Ok(Value::Kind(s.lookup("d")?.kind()))),
        Snippet::expr("a == 4", |s| s.lookup("a")?.equals(&int(4))),
        Snippet::expr("sqrt(d)", |s| sqrt(&s.lookup("d")?)),
        Snippet::expr("1 - d", |s| int(1).sub(&s.lookup("d")?)),
        // Strings
        Snippet::stmt("c = \"Messi\"", |s| {
            s.assign("c", text("Messi"));
            Ok(())
        }),
        Snippet::expr("kind(c)", |s| Ok(Value::Kind(s.lookup("c")?.kind()))),
        Snippet::expr("\"Leo\" + \" \" + \"Messi\"", |_| {
            text("Leo").add(&text(" "))?.add(&text("Messi"))
        }),
        // Lists
        Snippet::stmt(
            "mylist = [\"Messi\", \"Cristiano\", \"Neymar\", \"Mbappé\"]",
            |s| {
                s.assign(
                    "mylist",
                    Value::List(vec![
                        text("Messi"),
                        text("Cristiano"),
                        text("Neymar"),
                        text("Mbappé"),
                    ]),
                );
                Ok(())
            },
        ),
        Snippet::expr("len(mylist)", |s| s.lookup("mylist")?.len()),
        Snippet::stmt("newlist = mylist + [2, 3]", |s| {
            let v = s.lookup("mylist")?.add(&Value::List(vec![int(2), int(3)]))?;
            s.assign("newlist", v);
            Ok(())
        }),
        Snippet::expr("newlist", |s| s.lookup("newlist")),
        Snippet::expr("len(newlist)", |s| s.lookup("newlist")?.len()),
        Snippet::expr("mylist[0..2]", |s| s.lookup("mylist")?.slice(Some(0), Some(2))),
        Snippet::expr("mylist[2..]", |s| s.lookup("mylist")?.slice(Some(2), None)),
        Snippet::expr("mylist[..3]", |s| s.lookup("mylist")?.slice(None, Some(3))),
        // Ranges
        Snippet::stmt("myrange = range(0, 10, 2)", |s| {
            s.assign(
                "myrange",
                Value::Range {
                    start: 0,
                    stop: 10,
                    step: 2,
                },
            );
            Ok(())
        }),
        Snippet::expr("myrange.to_list()", |s| s.lookup("myrange")?.to_list()),
        Snippet::expr("range(5, 12).to_list()", |_| {
            Value::Range {
                start: 5,
                stop: 12,
                step: 1,
            }
            .to_list()
        }),
        Snippet::expr("range(0, 10).to_list()", |_| {
            Value::Range {
                start: 0,
                stop: 10,
                step: 1,
            }
            .to_list()
        }),
        // Dictionaries
        Snippet::stmt(
            "my_dict = {\"name\": \"Joan\", \"gender\": \"F\", \"age\": 32}",
            |s| {
                let mut map = BTreeMap::new();
                map.insert("name".to_string(), text("Joan"));
                map.insert("gender".to_string(), text("F"));
                map.insert("age".to_string(), int(32));
                s.assign("my_dict", Value::Dict(map));
                Ok(())
            },
        ),
        Snippet::expr("my_dict[\"name\"]", |s| s.lookup("my_dict")?.get("name")),
        // Functions
        Snippet::stmt("fn f(x) = 1 / (1 - x^2)", |_| Ok(())),
        Snippet::expr("f(2)", |_| inverse_square(&int(2))),
        Snippet::expr("f(1)", |_| inverse_square(&int(1))),
        Snippet::expr("f(\"Mary\")", |_| inverse_square(&text("Mary"))),
        Snippet::stmt("fn g(x, y) = x * y / (x^2 + y^2)", |_| Ok(())),
        Snippet::expr("g(1, 1)", |_| normalized_product(&int(1), &int(1))),
    ]
}
