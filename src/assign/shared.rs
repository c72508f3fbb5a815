//! Shared handles.
//!
//! `Rc<RefCell<_>>` gives several owners one mutable cell, the closest
//! match to an object reference in a garbage-collected language. Assigning
//! through any handle is visible through every other.

use std::cell::RefCell;
use std::rc::Rc;

use crate::diagnostics::CheckError;
use crate::ensure_eq;

use super::scalar::CONSTANT;

pub const SHARED_CELL: &str = "shared_cell";

pub fn assign_shared(target: &Rc<RefCell<i32>>, value: i32) {
    *target.borrow_mut() = value;
}

pub fn shared_cell() -> Result<(), CheckError> {
    let x = Rc::new(RefCell::new(1));
    let alias = Rc::clone(&x);

    let t = *x.borrow() + CONSTANT;
    assign_shared(&alias, t);

    ensure_eq!(SHARED_CELL, *x.borrow(), 3);
    ensure_eq!(SHARED_CELL, Rc::strong_count(&x), 2);
    Ok(())
}
