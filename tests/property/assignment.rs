// Property tests for assignment through places:
// 1. Direct reassignment stores the computed value and leaves siblings alone
// 2. Writes through a reference are visible to the caller
// 3. Shared sequences see helper writes; by-value records do not

use proptest::prelude::*;

use lang_cmp::assign::record::{Record, assign_field, assign_field_of_copy};
use lang_cmp::assign::scalar::{add_to_copy, assign_through};
use lang_cmp::assign::sequence::assign_first;

// Keep sums inside i32
fn arb_value() -> impl Strategy<Value = i32> {
    -1_000_000..1_000_000i32
}

fn arb_sequence() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(arb_value(), 1..16)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn direct_scalar(start in arb_value(), c in arb_value()) {
        let mut x = start;
        x = x + c;
        prop_assert_eq!(x, start + c);
    }

    #[test]
    fn indirect_scalar(start in arb_value(), c in arb_value()) {
        let mut x = start;
        let t = x + c;
        assign_through(&mut x, t);
        prop_assert_eq!(x, start + c);
    }

    #[test]
    fn scalar_copy_isolated(start in arb_value(), c in arb_value()) {
        let x = start;
        prop_assert_eq!(add_to_copy(x, c), start + c);
        prop_assert_eq!(x, start);
    }

    #[test]
    fn sequence_element(original in arb_sequence(), c in arb_value()) {
        let mut x = original.clone();
        x[0] = x[0] + c;
        prop_assert_eq!(x[0], original[0] + c);
        prop_assert_eq!(&x[1..], &original[1..]);
    }

    #[test]
    fn shared_sequence(original in arb_sequence(), c in arb_value()) {
        let mut x = original.clone();
        let t = x[0] + c;
        assign_first(&mut x, t);
        prop_assert_eq!(x[0], original[0] + c);
        prop_assert_eq!(&x[1..], &original[1..]);
    }

    #[test]
    fn record_field(i in arb_value(), b in any::<bool>(), c in arb_value()) {
        let mut x = Record::new(i, b);
        let t = x.i + c;
        assign_field(&mut x, t);
        prop_assert_eq!(x, Record::new(i + c, b));
    }

    #[test]
    fn record_by_value_isolated(i in arb_value(), b in any::<bool>(), c in arb_value()) {
        let x = Record::new(i, b);
        let copy = assign_field_of_copy(x, x.i + c);
        prop_assert_eq!(x, Record::new(i, b));
        prop_assert_eq!(copy, Record::new(i + c, b));
    }
}
