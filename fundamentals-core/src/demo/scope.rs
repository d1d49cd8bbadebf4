//! Lexical scope: a binding lives only inside the block that declares it.

use tracing::trace;

use super::{Line, TARGET};

pub const CONFIRMATION: &str = "Main function continues after demonstrate_scope()";

/// Declares `local_var` and reports it from inside the function.
///
/// The binding does not exist once the call returns; naming it from the
/// caller is rejected by the compiler:
///
/// ```compile_fail
/// let _line = fundamentals_core::demo::demonstrate_scope();
/// println!("{}", local_var);
/// ```
pub fn demonstrate_scope() -> Line {
    let local_var = "I'm local to this function";
    trace!(target: TARGET, local_var, "inside demonstrate_scope");
    Line::note(format!("Inside function - local_var: {local_var}"))
}

/// 9.
pub(super) fn variable_scope() -> Vec<Line> {
    let inside = demonstrate_scope();
    vec![inside, Line::note(CONFIRMATION)]
}
