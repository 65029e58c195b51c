// ============================================================================
// Ratio Property Tests
// Canonical form, reciprocal involution and ordering against BigRatio
// ============================================================================

use exact_ratio::prelude::*;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;
use proptest::prelude::*;
use std::cmp::Ordering;

fn nonzero_i64() -> impl Strategy<Value = i64> {
    any::<i64>().prop_filter("nonzero", |v| *v != 0)
}

/// Mix of small values and values near the i64 extremes.
fn edgy_i64() -> impl Strategy<Value = i64> {
    prop_oneof![
        -1000i64..1000,
        (i64::MIN..i64::MIN + 1000),
        (i64::MAX - 1000..=i64::MAX),
        any::<i64>(),
    ]
}

fn assert_canonical_big(r: &BigRatio) {
    assert!(r.denominator().is_positive());
    assert_eq!(r.numerator().gcd(r.denominator()), BigInt::from(1));
}

proptest! {
    #[test]
    fn prop_fixed_construction_is_canonical(n in edgy_i64(), d in edgy_i64()) {
        match Ratio64::new(n, d) {
            Ok(r) => {
                prop_assert!(r.denominator() > 0);
                let g = BigInt::from(r.numerator()).gcd(&BigInt::from(r.denominator()));
                prop_assert_eq!(g, BigInt::from(1));
                // Same value as the unbounded construction
                prop_assert_eq!(BigRatio::from(r), BigRatio::new(n, d).unwrap());
            },
            Err(RatioError::ZeroDenominator) => prop_assert_eq!(d, 0),
            Err(RatioError::Overflow) => {
                // Only when the reduced form needs -i64::MIN
                let big = BigRatio::new(n, d).unwrap();
                let min = BigInt::from(i64::MIN);
                let max = BigInt::from(i64::MAX);
                prop_assert!(big.numerator() > &max || big.denominator() > &max
                    || big.numerator() < &min);
            },
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn prop_zero_numerator_is_canonical_zero(d in nonzero_i64()) {
        let r = Ratio64::new(0, d).unwrap();
        prop_assert_eq!(r, Ratio64::zero());
        prop_assert_eq!(r.denominator(), 1);
        prop_assert_eq!(BigRatio::new(0, d).unwrap(), BigRatio::zero());
    }

    #[test]
    fn prop_big_construction_is_canonical(n in any::<i128>(), d in any::<i128>()) {
        prop_assume!(d != 0);
        let r = BigRatio::new(n, d).unwrap();
        assert_canonical_big(&r);
    }

    #[test]
    fn prop_reciprocal_involution(n in edgy_i64(), d in edgy_i64()) {
        if let Ok(r) = Ratio64::new(n, d) {
            if !r.is_zero() {
                if let Ok(inverse) = r.reciprocal() {
                    prop_assert_eq!(inverse.reciprocal().unwrap(), r);
                }
            }
        }
        if d != 0 && n != 0 {
            let big = BigRatio::new(n, d).unwrap();
            prop_assert_eq!(big.reciprocal().unwrap().reciprocal().unwrap(), big);
        }
    }

    #[test]
    fn prop_ordering_trichotomy(
        an in edgy_i64(), ad in edgy_i64(), bn in edgy_i64(), bd in edgy_i64()
    ) {
        let (Ok(a), Ok(b)) = (Ratio64::new(an, ad), Ratio64::new(bn, bd)) else {
            return Ok(());
        };
        let oracle = BigRatio::from(a).cmp(&BigRatio::from(b));
        prop_assert_eq!(a.cmp(&b), oracle);

        let holds = [a < b, a == b, a > b];
        prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);

        let integer_oracle = BigRatio::from(a).cmp_integer(&BigInt::from(bn));
        prop_assert_eq!(a.cmp_integer(bn), integer_oracle);
    }

    #[test]
    fn prop_checked_arithmetic_matches_big(
        an in -10_000i64..10_000, ad in 1i64..10_000, bn in edgy_i64(), bd in edgy_i64()
    ) {
        let a = Ratio64::new(an, ad).unwrap();
        let Ok(b) = Ratio64::new(bn, bd) else { return Ok(()); };
        let (big_a, big_b) = (BigRatio::from(a), BigRatio::from(b));

        let cases = [
            (a.checked_add(b), Some(&big_a + &big_b)),
            (a.checked_sub(b), Some(&big_a - &big_b)),
            (a.checked_mul(b), Some(&big_a * &big_b)),
            (a.checked_div(b), big_a.checked_div(&big_b).ok()),
        ];
        for (fixed, big) in cases {
            match (fixed, big) {
                (Ok(fixed), Some(big)) => prop_assert_eq!(BigRatio::from(fixed), big),
                (Err(RatioError::Overflow), Some(big)) => {
                    prop_assert!(big.try_to_fixed::<i64>().is_err());
                },
                (Err(RatioError::DivideByZero), None) => prop_assert!(b.is_zero()),
                (fixed, big) => prop_assert!(false, "mismatch {:?} vs {:?}", fixed, big),
            }
        }
    }

    #[test]
    fn prop_display_parse_round_trip(n in edgy_i64(), d in edgy_i64()) {
        if let Ok(r) = Ratio64::new(n, d) {
            prop_assert_eq!(r.to_string().parse::<Ratio64>().unwrap(), r);
        }
        if d != 0 {
            let big = BigRatio::new(n, d).unwrap();
            prop_assert_eq!(big.to_string().parse::<BigRatio>().unwrap(), big);
        }
    }
}

#[test]
fn test_narrow_width_trichotomy_exhaustive() {
    let values: Vec<Ratio8> = [i8::MIN, i8::MIN + 1, -3, -1, 0, 1, 2, 3, i8::MAX - 1, i8::MAX]
        .iter()
        .flat_map(|&n| {
            [1i8, 2, 3, i8::MAX, i8::MAX - 1]
                .into_iter()
                .filter_map(move |d| Ratio8::new(n, d).ok())
        })
        .collect();

    for a in &values {
        for b in &values {
            let oracle = BigRatio::from(*a).cmp(&BigRatio::from(*b));
            assert_eq!(a.cmp(b), oracle, "{a} vs {b}");
            assert_eq!(a == b, oracle == Ordering::Equal);
        }
    }
}
