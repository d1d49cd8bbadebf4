//! 类型信息
//!
//! Runtime-observed type names and in-memory sizes, taken from
//! `std::any::type_name_of_val` and `std::mem::size_of_val`.

use std::fmt::Display;

use crate::demo::{Line, Observation};

/// Strip module paths from a type name, including inside generic arguments.
///
/// `alloc::string::String` becomes `String`,
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else {
            out.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = out.len();
            }
        }
    }
    out
}

/// Short type name of the value's static type.
pub fn type_name_of<T: ?Sized>(value: &T) -> String {
    short_type_name(std::any::type_name_of_val(value))
}

/// `name: value (type: T)`
pub fn observe<T: Display + ?Sized>(name: &str, value: &T) -> Observation {
    Observation {
        name: name.to_string(),
        value: value.to_string(),
        type_name: type_name_of(value),
        quoted: false,
    }
}

/// Same as [`observe`], with the value wrapped in single quotes so an empty
/// string stays visible.
pub fn observe_quoted<T: Display + ?Sized>(name: &str, value: &T) -> Observation {
    Observation {
        quoted: true,
        ..observe(name, value)
    }
}

/// `size of T: n bytes`
pub fn size_line<T>(value: &T) -> Line {
    Line::Size {
        type_name: type_name_of(value),
        bytes: std::mem::size_of_val(value),
    }
}
