//! Girder - runtime support primitives for generated native code.
//!
//! # Overview
//!
//! Girder is the support layer a code generator links its output against. It
//! provides:
//!
//! - Bounds-checked, non-owning views over contiguous storage
//!   ([`array::ArrayView`]) and an owning fixed-capacity buffer
//!   ([`array::FixedCapacityArray`])
//! - A fatal contract-checking facility ([`check`]) with the [`check!`],
//!   [`check_eq!`], [`check_ne!`], [`check_op!`] and [`fatal!`] macros
//! - Deterministic scalar/byte-to-text conversion ([`convert`])
//! - Line-oriented stdout helpers ([`write`])
//!
//! There is exactly one error kind in this crate, the contract violation, and
//! it is never returned to callers: a failed check prints a diagnostic banner
//! to stdout and terminates the process with a non-zero status. Generated
//! code treats every check as a termination point.
//!
//! # Quick Start
//!
//! ```
//! use girder::array::{ArrayView, FixedCapacityArray};
//! use girder::convert::{bool_str, bytes_hexstr, i32_str};
//!
//! // Wrap caller-owned storage in a bounds-checked view.
//! let mut backing = [1i32, 2, 3];
//! let view = ArrayView::new(&mut backing);
//! assert_eq!(view.len(), 3);
//! assert_eq!(*view.at(2), 3);
//!
//! // Copy it into an owning fixed-capacity buffer.
//! let mut fixed: FixedCapacityArray<i32, 4> = FixedCapacityArray::new();
//! fixed.assign(&view);
//! assert_eq!(fixed.len(), 3);
//!
//! // Render scalars for diagnostic output.
//! assert_eq!(i32_str(-7), "-7");
//! assert_eq!(bool_str(true), "true");
//! assert_eq!(bytes_hexstr(&[0x0A, 0xFF]), "0AFF");
//! ```

pub use girder_core::{array, check, convert, write};
pub use girder_core::{check_eq, check_ne, check_op, fatal};
pub use girder_core::{ArrayView, ContractViolation, FixedCapacityArray, bugcheck, set_fatal_hook};
