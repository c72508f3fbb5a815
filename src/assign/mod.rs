//! Assignment into place expressions.
//!
//! Only place expressions (variables, index expressions, field accesses and
//! dereferences) may appear on the left of `=`, and the place must be
//! mutable: a `mut` binding, a `&mut` dereference, or part of a mutable
//! aggregate. Each submodule covers one kind of place, first assigned by
//! name and then through a reference handed to a helper.

pub mod literal;
pub mod record;
pub mod scalar;
pub mod sequence;
pub mod shared;
