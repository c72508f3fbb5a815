//! Sequence elements.
//!
//! An index expression on a mutable array, `Vec`, or `&mut [T]` is a place.
//! Handing a helper `&mut x` shares the backing storage, so the helper's
//! writes land in the caller's sequence. A clone owns separate storage.

use crate::diagnostics::CheckError;
use crate::ensure_eq;

use super::scalar::CONSTANT;

pub const LOCAL: &str = "local_sequence";
pub const INDIRECT: &str = "indirect_sequence";
pub const DETACHED: &str = "sequence_copy_is_detached";

/// Write `value` into the first element. Empty slices are left untouched.
pub fn assign_first(target: &mut [i32], value: i32) {
    if let Some(first) = target.first_mut() {
        *first = value;
    }
}

pub fn local_sequence() -> Result<(), CheckError> {
    let mut x = vec![1, 1];

    x[0] = x[0] + CONSTANT;

    ensure_eq!(LOCAL, x[0], 3);
    ensure_eq!(LOCAL, x[1], 1);
    Ok(())
}

pub fn indirect_sequence() -> Result<(), CheckError> {
    let mut x = vec![1, 1];

    let t = x[0] + CONSTANT;
    assign_first(&mut x, t);

    ensure_eq!(INDIRECT, x, [3, 1]);
    Ok(())
}

pub fn sequence_copy_is_detached() -> Result<(), CheckError> {
    let x = vec![1, 1];

    let mut copy = x.clone();
    assign_first(&mut copy, x[0] + CONSTANT);

    ensure_eq!(DETACHED, copy, [3, 1]);
    ensure_eq!(DETACHED, x, [1, 1]);
    Ok(())
}
