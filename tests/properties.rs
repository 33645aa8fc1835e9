use std::cmp::Ordering;

use dec_bigint::BigInt;
use proptest::prelude::*;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

proptest! {
    #[test]
    fn u64_round_trip(n in any::<u64>()) {
        prop_assert_eq!(BigInt::from(n).to_u64(), n);
        prop_assert_eq!(u64::try_from(&BigInt::from(n)).unwrap(), n);
    }

    #[test]
    fn decimal_round_trip(s in "0|[1-9][0-9]{0,80}") {
        prop_assert_eq!(big(&s).to_string(), s);
    }

    #[test]
    fn leading_zeros_are_ignored(zeros in "0{0,12}", s in "[1-9][0-9]{0,40}") {
        prop_assert_eq!(big(&format!("{}{}", zeros, s)), big(&s));
    }

    #[test]
    fn addition_commutes(a in "[0-9]{1,60}", b in "[0-9]{1,60}") {
        let (a, b) = (big(&a), big(&b));
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn addition_associates(a in "[0-9]{1,40}", b in "[0-9]{1,40}", c in "[0-9]{1,40}") {
        let (a, b, c) = (big(&a), big(&b), big(&c));
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn zero_is_additive_identity(a in "[0-9]{1,60}") {
        let a = big(&a);
        prop_assert_eq!(&a + &BigInt::zero(), a.clone());
        prop_assert_eq!(&a - &BigInt::zero(), a);
    }

    #[test]
    fn subtraction_inverts_addition(a in "[0-9]{1,60}", b in "[0-9]{1,60}") {
        let (a, b) = (big(&a), big(&b));
        prop_assert_eq!(&(&a + &b) - &b, a.clone());

        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        prop_assert_eq!(&(&hi - &lo) + &lo, hi);
    }

    #[test]
    fn ordering_is_total(a in "[0-9]{1,30}", b in "[0-9]{1,30}") {
        let (a, b) = (big(&a), big(&b));
        let holds = [a < b, a == b, a > b].iter().filter(|x| **x).count();
        prop_assert_eq!(holds, 1);
    }

    #[test]
    fn ordering_matches_u64(x in any::<u64>(), y in any::<u64>()) {
        prop_assert_eq!(BigInt::from(x).cmp(&BigInt::from(y)), x.cmp(&y));
    }

    #[test]
    fn arithmetic_matches_u64(x in 0..u64::MAX / 2, y in 0..u64::MAX / 2) {
        prop_assert_eq!((BigInt::from(x) + BigInt::from(y)).to_u64(), x + y);
        prop_assert_eq!(
            BigInt::from(x).checked_sub(&BigInt::from(y)).map(|d| d.to_u64()),
            x.checked_sub(y)
        );
    }

    #[test]
    fn increment_then_decrement(a in "[0-9]{1,40}") {
        let a = big(&a);
        let mut b = a.clone();
        prop_assert_eq!(b.post_increment(), a.clone());
        prop_assert_eq!(b.cmp(&a), Ordering::Greater);
        prop_assert_eq!(b.decrement().clone(), a);
    }
}

#[test]
fn concrete_scenarios() {
    assert_eq!((BigInt::from(999u32) + BigInt::from(1u32)).to_string(), "1000");
    assert_eq!(
        (big("123456789012345678901234567890") + BigInt::from(1u32)).to_string(),
        "123456789012345678901234567891"
    );
    assert_eq!((BigInt::from(1000u32) - BigInt::from(1u32)).to_string(), "999");
    assert_eq!(
        (big("1000000000000000000000") - big("999999999999999999999")).to_string(),
        "1"
    );
    assert_eq!(big("0005"), BigInt::from(5u32));
    assert!(BigInt::from(10u32) > BigInt::from(9u32));
    assert!(BigInt::from(9u32) < BigInt::from(10u32));
}
