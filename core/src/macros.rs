//! Contract-checking macros.
//!
//! Each macro expands to a test of its condition followed, on failure, by a
//! call to [`bugcheck`](crate::check::bugcheck) carrying the expansion site's
//! `file!()` / `line!()` and a message built from the failing expression's
//! source text (via `stringify!`).
//!
//! # Example
//!
//! ```
//! use girder_core::{check, check_op};
//!
//! let len = 4usize;
//! let i = 2usize;
//! check!(len > 0);
//! check_op!(i, <, len);
//! ```

/// Asserts that a condition holds; the failure message is the condition's
/// source text.
#[macro_export]
macro_rules! check {
    ($cond:expr) => {
        if !$cond {
            $crate::check::bugcheck($crate::check::ContractViolation::new(
                ::core::file!(),
                ::core::line!(),
                ::core::stringify!($cond),
            ));
        }
    };
}

/// Asserts that two values are equal, reporting both operands' source text
/// and hex values on failure.
#[macro_export]
macro_rules! check_eq {
    ($a:expr, $b:expr) => {{
        let __a = $a;
        let __b = $b;
        if !(__a == __b) {
            $crate::check::bugcheck($crate::check::ContractViolation::new(
                ::core::file!(),
                ::core::line!(),
                ::std::format!(
                    "{} (0x{:x}) != {} (0x{:x})",
                    ::core::stringify!($a),
                    __a,
                    ::core::stringify!($b),
                    __b,
                ),
            ));
        }
    }};
}

/// Asserts that two values differ, reporting both operands' source text and
/// hex values on failure.
#[macro_export]
macro_rules! check_ne {
    ($a:expr, $b:expr) => {{
        let __a = $a;
        let __b = $b;
        if !(__a != __b) {
            $crate::check::bugcheck($crate::check::ContractViolation::new(
                ::core::file!(),
                ::core::line!(),
                ::std::format!(
                    "{} (0x{:x}) == {} (0x{:x})",
                    ::core::stringify!($a),
                    __a,
                    ::core::stringify!($b),
                    __b,
                ),
            ));
        }
    }};
}

/// Asserts an arbitrary comparison between two size-typed operands, reporting
/// both values in hex on failure. Operands are evaluated exactly once.
#[macro_export]
macro_rules! check_op {
    ($a:expr, $op:tt, $b:expr) => {{
        let __x: usize = $a;
        let __y: usize = $b;
        if !(__x $op __y) {
            $crate::check::bugcheck($crate::check::ContractViolation::new(
                ::core::file!(),
                ::core::line!(),
                ::std::format!(
                    "{} (0x{:x}) {} {} (0x{:x})",
                    ::core::stringify!($a),
                    __x,
                    ::core::stringify!($op),
                    ::core::stringify!($b),
                    __y,
                ),
            ));
        }
    }};
}

/// Unconditionally reports a contract violation; marks unreachable code.
///
/// Accepts a printf-style format template with positional arguments and
/// never returns.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::check::bugcheck($crate::check::ContractViolation::new(
            ::core::file!(),
            ::core::line!(),
            ::std::format!($($arg)+),
        ))
    };
}
