//! Miscellaneous helpers shared across the crate

/// Formats `file!()` and `line!()` location, optionally followed by the
/// debug representation of an expression, for use in error context.
#[macro_export]
macro_rules! format_dbg {
    ($dbg_expr:expr) => {
        format!(
            "[{}:{}] {}: {:?}",
            file!(),
            line!(),
            stringify!($dbg_expr),
            $dbg_expr
        )
    };
    () => {
        format!("[{}:{}]", file!(), line!())
    };
}

/// Relative tolerance used by [almost_eq] when none is given
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// Returns true if `val1` and `val2` are within a relative/absolute `epsilon` of each other
pub fn almost_eq(val1: f64, val2: f64, epsilon: Option<f64>) -> bool {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    ((val2 - val1) / (val1 + val2)).abs() < epsilon || (val2 - val1).abs() < epsilon
}

/// Returns `true` if `value` is finite and not negative
pub fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
