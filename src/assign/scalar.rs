//! Scalar places.
//!
//! The mutable reference and the argument value cannot both be formed from
//! `x` in one call, so the value is bound first:
//!
//! ```compile_fail
//! use lang_cmp::assign::scalar::{assign_through, CONSTANT};
//!
//! let mut x: i32 = 1;
//! assign_through(&mut x, x + CONSTANT);
//! ```
//!
//! Passing the scalar itself instead of a reference is a type error:
//!
//! ```compile_fail
//! use lang_cmp::assign::scalar::{assign_through, CONSTANT};
//!
//! let mut x: i32 = 1;
//! let t = x + CONSTANT;
//! assign_through(x, t);
//! ```
//!
//! And an immutable binding cannot be reassigned at all:
//!
//! ```compile_fail
//! let x: i32 = 1;
//! x = x + 2;
//! ```

use crate::diagnostics::CheckError;
use crate::ensure_eq;

pub const CONSTANT: i32 = 2;

pub const LOCAL: &str = "local_scalar";
pub const INDIRECT: &str = "indirect_scalar";
pub const BY_VALUE: &str = "scalar_by_value";

/// Write `value` into the place behind `target`.
pub fn assign_through(target: &mut i32, value: i32) {
    *target = value;
}

/// Takes its own copy; the caller's binding is out of reach.
pub fn add_to_copy(mut target: i32, delta: i32) -> i32 {
    target = target + delta;
    target
}

pub fn local_scalar() -> Result<(), CheckError> {
    let mut x: i32 = 1;

    x = x + CONSTANT;

    ensure_eq!(LOCAL, x, 3);
    Ok(())
}

pub fn indirect_scalar() -> Result<(), CheckError> {
    let mut x: i32 = 1;

    let t = x + CONSTANT;
    assign_through(&mut x, t);

    ensure_eq!(INDIRECT, x, 3);
    Ok(())
}

pub fn scalar_by_value() -> Result<(), CheckError> {
    let x: i32 = 1;

    let copy = add_to_copy(x, CONSTANT);

    ensure_eq!(BY_VALUE, copy, 3);
    ensure_eq!(BY_VALUE, x, 1);
    Ok(())
}
