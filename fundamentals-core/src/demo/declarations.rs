//! Declaration forms: inferred `let`, destructuring `let`, default values and
//! `const` items.

use super::Line;
use crate::type_info::{observe, observe_quoted};

/// 2. Types inferred from literals
pub(super) fn type_inference() -> Vec<Line> {
    let city = "New York";
    let score = 95.5;
    let count = 100;
    let enabled = false;

    vec![
        observe("city", &city).into(),
        observe("score", &score).into(),
        observe("count", &count).into(),
        observe("enabled", &enabled).into(),
    ]
}

/// 3. Several names introduced and inferred by a single pattern binding
pub(super) fn tuple_binding() -> Vec<Line> {
    let (country, rating, total, verified) = ("USA", 4.5, 250, true);

    vec![
        observe("country", &country).into(),
        observe("rating", &rating).into(),
        observe("total", &total).into(),
        observe("verified", &verified).into(),
    ]
}

/// 4. Rust has no uninitialised reads; `Default` supplies the zero value.
pub(super) fn zero_values() -> Vec<Line> {
    let empty_string: String = Default::default();
    let zero_int: isize = Default::default();
    let zero_float: f64 = Default::default();
    let false_bool: bool = Default::default();

    vec![
        observe_quoted("empty_string", &empty_string).into(),
        observe("zero_int", &zero_int).into(),
        observe("zero_float", &zero_float).into(),
        observe("false_bool", &false_bool).into(),
    ]
}

/// 5. `const` items always carry a type; an integer literal defaults to `i32`.
pub(super) fn constants() -> Vec<Line> {
    #[allow(clippy::approx_constant)]
    const PI: f64 = 3.14159;
    const MAX_RETRIES: i32 = 3;
    const GREETING: &str = "Welcome";

    vec![
        observe("PI", &PI).into(),
        observe("MAX_RETRIES", &MAX_RETRIES).into(),
        observe("GREETING", &GREETING).into(),
    ]
}
