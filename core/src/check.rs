//! Fatal contract checking.
//!
//! Every invariant violation in this crate funnels into [`bugcheck`]: the
//! diagnostic is printed to stdout, an optional hook runs (a debugger-break
//! stand-in), and the process exits with a non-zero status. Nothing here is
//! catchable: a failed check is programmer error, not a runtime condition,
//! so there is no error value to propagate and no unwinding to intercept.
//!
//! Call sites normally go through the [`check!`](crate::check!),
//! [`check_eq!`](crate::check_eq!), [`check_ne!`](crate::check_ne!),
//! [`check_op!`](crate::check_op!) and [`fatal!`](crate::fatal!) macros, which
//! capture the source location and the failing expression's text.

use std::io::{self, Write};
use std::process;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Diagnostic record for a failed contract check.
///
/// Lives only for the duration of the [`bugcheck`] call that consumes it;
/// it is rendered into the banner and never stored or returned.
#[derive(Debug, Error)]
#[error("File: {file}\nLine: {line}\n{message}")]
pub struct ContractViolation {
    /// Source file of the failed check, from `file!()`.
    pub file: &'static str,
    /// Source line of the failed check, from `line!()`.
    pub line: u32,
    /// Human-readable description of what failed.
    pub message: String,
}

impl ContractViolation {
    pub fn new(file: &'static str, line: u32, message: impl Into<String>) -> Self {
        Self {
            file,
            line,
            message: message.into(),
        }
    }
}

/// Callback invoked after the diagnostic is printed and before the process
/// terminates.
pub type FatalHook = Box<dyn FnMut(&ContractViolation) + Send>;

static FATAL_HOOK: Mutex<Option<FatalHook>> = Mutex::new(None);

/// Installs a process-wide hook that runs on the fatal path, replacing any
/// previously installed hook.
///
/// The default is no hook. Typical uses are raising a debugger trap or
/// flushing host-side state before the process goes away. The hook must not
/// assume it can prevent termination; [`bugcheck`] exits unconditionally once
/// the hook returns.
pub fn set_fatal_hook(hook: FatalHook) {
    let mut slot = FATAL_HOOK.lock().unwrap_or_else(PoisonError::into_inner);
    *slot = Some(hook);
}

/// Renders the diagnostic banner exactly as [`bugcheck`] prints it.
pub fn render_bugcheck(violation: &ContractViolation) -> String {
    format!("Bugcheck\n\n{violation}\n\n")
}

/// Reports a contract violation and terminates the process.
///
/// Prints the banner to stdout under the stream's lock (concurrent callers
/// cannot interleave within one diagnostic), runs the fatal hook if one is
/// installed, then exits with a non-zero status. This function never returns.
pub fn bugcheck(violation: ContractViolation) -> ! {
    tracing::error!(
        file = violation.file,
        line = violation.line,
        message = %violation.message,
        "contract violation"
    );

    {
        let mut out = io::stdout().lock();
        let _ = out.write_all(render_bugcheck(&violation).as_bytes());
        let _ = out.flush();
    }

    let mut slot = FATAL_HOOK.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(hook) = slot.as_mut() {
        hook(&violation);
    }

    process::exit(-1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;
    use pretty_assertions::assert_eq;

    #[test]
    fn violation_display_is_file_line_message() {
        let v = ContractViolation::new("core/src/array.rs", 42, "i (0x4) < len (0x3)");
        assert_eq!(
            v.to_string(),
            "File: core/src/array.rs\nLine: 42\ni (0x4) < len (0x3)"
        );
    }

    #[test]
    fn banner_layout() {
        let v = ContractViolation::new("lib.rs", 7, "unreachable state");
        expect![[r#"
            Bugcheck

            File: lib.rs
            Line: 7
            unreachable state

        "#]]
        .assert_eq(&render_bugcheck(&v));
    }
}
