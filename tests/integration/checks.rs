//! Reference scenarios for each assignment pattern, driven through the
//! public helpers rather than the registered check bodies.

use lang_cmp::assign::record::{Record, assign_field, assign_field_of_copy};
use lang_cmp::assign::scalar::{CONSTANT, add_to_copy, assign_through};
use lang_cmp::assign::sequence::assign_first;
use lang_cmp::check;

#[test]
fn direct_scalar_from_one_and_two() {
    let mut x = 1;
    x = x + CONSTANT;
    assert_eq!(x, 3);
}

#[test]
fn indirect_scalar_is_visible() {
    let mut x = 1;
    let t = x + CONSTANT;
    assign_through(&mut x, t);
    assert_eq!(x, 3);
}

#[test]
fn scalar_copy_is_not_visible() {
    let x = 1;
    assert_eq!(add_to_copy(x, CONSTANT), 3);
    assert_eq!(x, 1);
}

#[test]
fn indirect_sequence_shares_storage() {
    let mut x = vec![1, 1];
    let t = x[0] + CONSTANT;
    assign_first(&mut x, t);
    assert_eq!(x, [3, 1]);
}

#[test]
fn subslice_shares_storage_too() {
    let mut x = [1, 1, 1];
    assign_first(&mut x[1..], 5);
    assert_eq!(x, [1, 5, 1]);
}

#[test]
fn indirect_record_keeps_bool() {
    let mut x = Record::new(1, true);
    let t = x.i + CONSTANT;
    assign_field(&mut x, t);
    assert_eq!(x, Record { i: 3, b: true });
}

#[test]
fn record_by_value_needs_a_reference_to_be_visible() {
    let x = Record::new(1, true);
    let copy = assign_field_of_copy(x, x.i + CONSTANT);
    assert_eq!(x, Record::new(1, true));
    assert_eq!(copy, Record::new(3, true));
}

#[test]
fn fresh_literal_assignment_touches_no_binding() {
    let x = [1, 1];
    [1, 1][0] = 3;
    assert_eq!(x, [1, 1]);
}

#[test]
fn every_check_passes_standalone() {
    for c in check::CHECKS {
        assert!(c.run().is_ok(), "{} failed", c.name);
    }
}
