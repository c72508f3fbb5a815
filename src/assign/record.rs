//! Record fields.
//!
//! The mutability of a record binding extends to its fields. A helper that
//! receives `&mut Record` writes into the caller's record; one that receives
//! the record by value works on a copy.

use crate::diagnostics::CheckError;
use crate::ensure_eq;

use super::scalar::CONSTANT;

pub const LOCAL: &str = "local_record";
pub const INDIRECT: &str = "indirect_record";
pub const BY_VALUE: &str = "record_by_value";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub i: i32,
    pub b: bool,
}

impl Record {
    pub fn new(i: i32, b: bool) -> Self {
        Self { i, b }
    }
}

/// Write `value` into `target.i`, leaving `target.b` alone.
pub fn assign_field(target: &mut Record, value: i32) {
    target.i = value;
}

/// Assigns into the parameter's own copy and hands it back.
pub fn assign_field_of_copy(mut target: Record, value: i32) -> Record {
    target.i = value;
    target
}

pub fn local_record() -> Result<(), CheckError> {
    let mut x = Record::new(1, true);

    x.i = x.i + CONSTANT;

    ensure_eq!(LOCAL, x.i, 3);
    ensure_eq!(LOCAL, x.b, true);
    Ok(())
}

pub fn indirect_record() -> Result<(), CheckError> {
    let mut x = Record::new(1, true);

    let t = x.i + CONSTANT;
    assign_field(&mut x, t);

    ensure_eq!(INDIRECT, x, Record::new(3, true));
    Ok(())
}

pub fn record_by_value() -> Result<(), CheckError> {
    let x = Record::new(1, true);

    let copy = assign_field_of_copy(x, x.i + CONSTANT);

    ensure_eq!(BY_VALUE, copy, Record::new(3, true));
    ensure_eq!(BY_VALUE, x, Record::new(1, true));
    Ok(())
}
