//! Core runtime-support primitives for generated native code.
//!
//! This crate is the support layer a code generator links its output against:
//! bounds-checked views over caller-owned storage, fixed-capacity buffers,
//! deterministic scalar-to-text conversion, and a fatal contract-checking
//! facility. There is deliberately no recoverable error surface here: a
//! failed contract check reports a diagnostic and terminates the process.
//!
//! Modules:
//!
//! - [`check`]: the bugcheck facility and the [`check!`], [`check_eq!`],
//!   [`check_ne!`], [`check_op!`] and [`fatal!`] macros.
//! - [`array`]: [`ArrayView`](array::ArrayView) and
//!   [`FixedCapacityArray`](array::FixedCapacityArray).
//! - [`convert`]: pure scalar/byte-to-text helpers.
//! - [`write`]: line-oriented stdout helpers.

pub mod array;
pub mod check;
pub mod convert;
mod macros;
pub mod write;

pub use array::{ArrayView, FixedCapacityArray};
pub use check::{ContractViolation, bugcheck, set_fatal_hook};
