//! Line-oriented stdout helpers for diagnostic output.
//!
//! The stdout-facing functions are thin shells over generic writers so the
//! formatting can be exercised against in-memory buffers.

use std::io::{self, Write};

use crate::array::ArrayView;

/// Emits `s` followed by a newline to stdout.
pub fn write_line(s: &str) {
    let mut out = io::stdout().lock();
    let _ = write_line_to(&mut out, s);
}

/// Emits the view's values to stdout as comma-separated decimals on one line.
pub fn write_ints(view: &ArrayView<'_, i32>) {
    let mut out = io::stdout().lock();
    let _ = write_ints_to(&mut out, view);
}

pub fn write_line_to<W: Write>(out: &mut W, s: &str) -> io::Result<()> {
    writeln!(out, "{s}")
}

pub fn write_ints_to<W: Write>(out: &mut W, view: &ArrayView<'_, i32>) -> io::Result<()> {
    for (i, value) in view.as_slice().iter().enumerate() {
        if i > 0 {
            write!(out, ",")?;
        }
        write!(out, "{value}")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn line_is_terminated() {
        let out = rendered(|buf| write_line_to(buf, "hello"));
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn ints_are_comma_separated_without_trailing_comma() {
        let mut backing = [1i32, 2, 3];
        let view = ArrayView::new(&mut backing);
        let out = rendered(|buf| write_ints_to(buf, &view));
        assert_eq!(out, "1,2,3\n");
    }

    #[test]
    fn single_int_has_no_separator() {
        let mut backing = [-42i32];
        let view = ArrayView::new(&mut backing);
        let out = rendered(|buf| write_ints_to(buf, &view));
        assert_eq!(out, "-42\n");
    }

    #[test]
    fn empty_view_is_just_a_newline() {
        let mut backing: [i32; 0] = [];
        let view = ArrayView::new(&mut backing);
        let out = rendered(|buf| write_ints_to(buf, &view));
        assert_eq!(out, "\n");
    }
}
