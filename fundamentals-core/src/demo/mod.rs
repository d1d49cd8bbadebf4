//! Variable/type demonstrator
//!
//! Nine independent demonstrations, each collected as a numbered [`Section`]
//! of printable lines:
//!
//! ```text
//! 1. Explicit Type Declaration   6. Type Sizes
//! 2. Type Inference              7. Numeric Type Conversions
//! 3. Tuple Binding               8. String Conversions
//! 4. Zero Values                 9. Variable Scope
//! 5. Constants
//! ```

mod conversions;
mod declarations;
mod scope;

use std::fmt;
use std::io::Write;

use fundamentals_config::Program;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::type_info::observe;

pub use scope::{demonstrate_scope, CONFIRMATION};

pub(crate) const TARGET: &str = Program::TypesDemo.target();

pub const BANNER: &str = "=== Rust Variables and Types Demo ===";

/// One `name: value (type: T)` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub name: String,
    pub value: String,
    pub type_name: String,
    /// Wrap the value in single quotes
    pub quoted: bool,
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "{}: '{}' (type: {})", self.name, self.value, self.type_name)
        } else {
            write!(f, "{}: {} (type: {})", self.name, self.value, self.type_name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Line {
    Observed(Observation),
    Size { type_name: String, bytes: usize },
    Note { text: String },
}

impl Line {
    pub fn note(text: impl Into<String>) -> Self {
        Line::Note { text: text.into() }
    }
}

impl From<Observation> for Line {
    fn from(obs: Observation) -> Self {
        Line::Observed(obs)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Observed(obs) => write!(f, "{obs}"),
            Line::Size { type_name, bytes } => write!(f, "size of {type_name}: {bytes} bytes"),
            Line::Note { text } => write!(f, "{text}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub number: u8,
    pub title: &'static str,
    pub lines: Vec<Line>,
}

impl Section {
    fn new(number: u8, title: &'static str, lines: Vec<Line>) -> Self {
        debug!(target: TARGET, number, title, lines = lines.len(), "built section");
        Self {
            number,
            title,
            lines,
        }
    }

    pub fn header(&self) -> String {
        format!("{}. {}:", self.number, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: &'static str,
    pub sections: Vec<Section>,
}

impl Report {
    /// Run all nine demonstrations in order.
    pub fn build() -> Self {
        // 1. Explicit type declaration; reused by sections 6 and 8
        let name: String = String::from("Alice");
        let age: isize = 30;
        let temperature: f64 = 98.6;
        let is_active: bool = true;

        let explicit: Vec<Line> = vec![
            observe("name", &name).into(),
            observe("age", &age).into(),
            observe("temperature", &temperature).into(),
            observe("is_active", &is_active).into(),
        ];

        let sections = vec![
            Section::new(1, "Explicit Type Declaration", explicit),
            Section::new(2, "Type Inference", declarations::type_inference()),
            Section::new(3, "Tuple Binding", declarations::tuple_binding()),
            Section::new(4, "Zero Values", declarations::zero_values()),
            Section::new(5, "Constants", declarations::constants()),
            Section::new(
                6,
                "Type Sizes",
                conversions::type_sizes(&age, &temperature, &is_active, &name),
            ),
            Section::new(7, "Numeric Type Conversions", conversions::numeric(42)),
            Section::new(8, "String Conversions", conversions::string(age)),
            Section::new(9, "Variable Scope", scope::variable_scope()),
        ];

        Self {
            title: BANNER,
            sections,
        }
    }

    pub fn section(&self, number: u8) -> Option<&Section> {
        self.sections.iter().find(|s| s.number == number)
    }

    pub fn write_text<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "{}", self.title)?;
        for section in &self.sections {
            writeln!(w)?;
            writeln!(w, "{}", section.header())?;
            for line in &section.lines {
                writeln!(w, "{line}")?;
            }
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, w: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *w, self)?;
        writeln!(w)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_display() {
        let obs = Observation {
            name: "x".to_string(),
            value: "1".to_string(),
            type_name: "i32".to_string(),
            quoted: false,
        };
        assert_eq!(obs.to_string(), "x: 1 (type: i32)");
    }

    #[test]
    fn test_line_display() {
        assert_eq!(Line::note("hello").to_string(), "hello");
        let size = Line::Size {
            type_name: "f64".to_string(),
            bytes: 8,
        };
        assert_eq!(size.to_string(), "size of f64: 8 bytes");
    }

    #[test]
    fn test_explicit_section() {
        let report = Report::build();
        let lines: Vec<String> = report.section(1).unwrap().lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "name: Alice (type: String)",
                "age: 30 (type: isize)",
                "temperature: 98.6 (type: f64)",
                "is_active: true (type: bool)",
            ]
        );
    }

    #[test]
    fn test_write_text_headers() {
        let mut out = Vec::new();
        Report::build().write_text(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(BANNER));
        assert!(text.contains("\n\n1. Explicit Type Declaration:\n"));
        assert!(text.ends_with(&format!("{CONFIRMATION}\n")));
    }

    #[test]
    fn test_line_json_tag() {
        let value = serde_json::to_value(Line::note("hi")).unwrap();
        assert_eq!(value["kind"], "note");
        assert_eq!(value["text"], "hi");
    }
}
