//! Assignment into temporaries.
//!
//! A value expression used where a place is expected is promoted to a
//! temporary, and temporaries are mutable. So indexing a freshly built array
//! literal, or reaching into a field of a freshly built record literal,
//! yields a place that accepts `=`. The write is dropped with the temporary
//! at the end of the statement.
//!
//! Some garbage-collected languages accept the first of these and reject the
//! second. That asymmetry is recorded here as an observation only.
//!
//! A bare value expression is still not a place:
//!
//! ```compile_fail
//! 1 = 3;
//! ```
//!
//! Assignment evaluates to `()`, so it cannot be assigned into again:
//!
//! ```compile_fail
//! let mut x = 3;
//! (x = 2) = 1;
//! ```
//!
//! A reference parameter must be dereferenced to reach the place behind it:
//!
//! ```compile_fail
//! fn assign(r: &mut i32, v: i32) {
//!     r = v;
//! }
//! ```

use crate::diagnostics::CheckError;
use crate::ensure_eq;

use super::record::Record;

pub const SEQUENCE: &str = "sequence_literal";
pub const RECORD: &str = "record_literal";
pub const CALL_RESULT: &str = "call_result_place";

fn first_of(values: &mut [i32; 2]) -> &mut i32 {
    &mut values[0]
}

#[allow(unused_assignments)]
pub fn sequence_literal() -> Result<(), CheckError> {
    let x = [1, 1];

    [1, 1][0] = 3;

    ensure_eq!(SEQUENCE, x, [1, 1]);
    Ok(())
}

#[allow(unused_assignments)]
pub fn record_literal() -> Result<(), CheckError> {
    let x = Record::new(1, true);

    Record { i: 1, b: true }.i = 3;

    ensure_eq!(RECORD, x, Record::new(1, true));
    Ok(())
}

pub fn call_result_place() -> Result<(), CheckError> {
    let mut x = [1, 1];

    *first_of(&mut x) = 3;

    ensure_eq!(CALL_RESULT, x, [3, 1]);
    Ok(())
}
