//! 测试辅助工具
//!
//! Renders reports into memory so tests can inspect the exact output.

#![allow(dead_code)]

use fundamentals_core::{EnvReport, Report};

/// Render the types demo as text and return it
pub fn types_text() -> String {
    let mut out = Vec::new();
    Report::build()
        .write_text(&mut out)
        .expect("rendering into a Vec cannot fail");
    String::from_utf8(out).expect("report is valid UTF-8")
}

/// Render the types demo as JSON and parse it back
pub fn types_json() -> serde_json::Value {
    let mut out = Vec::new();
    Report::build()
        .write_json(&mut out)
        .expect("rendering into a Vec cannot fail");
    serde_json::from_slice(&out).expect("report is valid JSON")
}

/// Render the host's environment report as text
pub fn env_text() -> String {
    let mut out = Vec::new();
    EnvReport::collect()
        .write_text(&mut out)
        .expect("rendering into a Vec cannot fail");
    String::from_utf8(out).expect("report is valid UTF-8")
}

/// Lines directly following `header`, up to the next blank line
pub fn section_lines<'a>(text: &'a str, header: &str) -> Vec<&'a str> {
    text.lines()
        .skip_while(|line| *line != header)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect()
}
