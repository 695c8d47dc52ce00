//! The tutorial lesson catalogue.
//!
//! Each lesson is a fixed, ordered sequence of snippets evaluated
//! top-to-bottom. Lessons are self-contained: a lesson rebinds every
//! input it needs, so any subset can run against a fresh session.
pub mod arrays;
pub mod frames;
pub mod intro;
pub mod plotting;

use std::str::FromStr;

use crate::session::Snippet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lesson {
    Intro,
    Arrays,
    Frames,
    Plotting,
}

impl Lesson {
    pub const ALL: [Lesson; 4] = [Lesson::Intro, Lesson::Arrays, Lesson::Frames, Lesson::Plotting];

    pub fn name(self) -> &'static str {
        match self {
            Lesson::Intro => "intro",
            Lesson::Arrays => "arrays",
            Lesson::Frames => "frames",
            Lesson::Plotting => "plotting",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Lesson::Intro => "numbers, booleans, strings, lists, ranges, dictionaries, functions",
            Lesson::Arrays => "numeric arrays, elementwise math, slicing, boolean masks",
            Lesson::Frames => "labeled series and frames, selection, filtering, summaries",
            Lesson::Plotting => "declarative line figures",
        }
    }

    pub fn snippets(self) -> Vec<Snippet> {
        match self {
            Lesson::Intro => intro::snippets(),
            Lesson::Arrays => arrays::snippets(),
            Lesson::Frames => frames::snippets(),
            Lesson::Plotting => plotting::snippets(),
        }
    }
}

impl FromStr for Lesson {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intro" => Ok(Lesson::Intro),
            "arrays" => Ok(Lesson::Arrays),
            "frames" => Ok(Lesson::Frames),
            "plotting" => Ok(Lesson::Plotting),
            _ => Err(format!(
                "Unknown lesson: {}. Available lessons: intro, arrays, frames, plotting",
                s
            )),
        }
    }
}

/// The whole course, in order.
pub fn course() -> Vec<Snippet> {
    Lesson::ALL.iter().flat_map(|l| l.snippets()).collect()
}
