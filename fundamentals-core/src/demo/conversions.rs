//! Storage sizes and `as` / `to_string` / `parse` conversions.

use super::Line;
use crate::type_info::{observe, observe_quoted, size_line};

/// 6. `isize` and `String` sizes depend on the target's pointer width.
#[allow(clippy::ptr_arg)]
pub(super) fn type_sizes(age: &isize, temperature: &f64, is_active: &bool, name: &String) -> Vec<Line> {
    vec![
        size_line(age),
        size_line(temperature),
        size_line(is_active),
        size_line(name),
    ]
}

/// 7. isize -> f64 -> isize
pub(super) fn numeric(int_value: isize) -> Vec<Line> {
    let float_value: f64 = int_value as f64;
    let back_to_int: isize = float_value as isize;

    vec![
        observe("int_value", &int_value).into(),
        observe("float_value", &float_value).into(),
        observe("back_to_int", &back_to_int).into(),
    ]
}

/// 8. isize -> decimal String -> isize
pub(super) fn string(age: isize) -> Vec<Line> {
    let string_age = age.to_string();
    // the input is always a numeral produced above, the parse error is dropped
    let parsed_age: isize = string_age.parse().unwrap_or_default();

    vec![
        observe_quoted("age as string", &string_age).into(),
        observe("parsed back to int", &parsed_age).into(),
    ]
}
