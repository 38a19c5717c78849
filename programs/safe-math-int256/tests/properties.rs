use primitive_types::U256;
use proptest::prelude::*;
use safe_math_int256::{SafeMathInt256, I256};

fn full_range() -> impl Strategy<Value = I256> {
    prop_oneof![
        any::<[u64; 4]>().prop_map(|limbs| I256::from_raw(U256(limbs))),
        any::<i128>().prop_map(I256::from),
        Just(I256::MIN),
        Just(I256::MAX),
        Just(I256::ZERO),
        Just(I256::MINUS_ONE),
    ]
}

proptest! {
    // i64 operands never overflow in i128, so i128 is an exact oracle
    #[test]
    fn matches_i128_for_small_operands(a in any::<i64>(), b in any::<i64>()) {
        let (wa, wb) = (a as i128, b as i128);
        let (ia, ib) = (I256::from(wa), I256::from(wb));

        prop_assert_eq!(SafeMathInt256::add(ia, ib).unwrap(), I256::from(wa + wb));
        prop_assert_eq!(SafeMathInt256::sub(ia, ib).unwrap(), I256::from(wa - wb));
        prop_assert_eq!(SafeMathInt256::mul(ia, ib).unwrap(), I256::from(wa * wb));
        if b == 0 {
            prop_assert!(SafeMathInt256::div(ia, ib).is_err());
        } else {
            prop_assert_eq!(SafeMathInt256::div(ia, ib).unwrap(), I256::from(wa / wb));
        }
    }

    #[test]
    fn sign_round_trips_through_i128(a in any::<i128>()) {
        let value = I256::from(a);
        prop_assert_eq!(value.is_negative(), a < 0);
        prop_assert_eq!(i128::try_from(value).unwrap(), a);
        prop_assert_eq!(value.to_string(), a.to_string());
    }

    #[test]
    fn min_max_partition_the_pair(a in full_range(), b in full_range()) {
        let lo = SafeMathInt256::min(a, b);
        let hi = SafeMathInt256::max(a, b);

        prop_assert!(lo <= hi);
        prop_assert!((lo == a && hi == b) || (lo == b && hi == a));
        if let Ok(sum) = SafeMathInt256::add(a, b) {
            prop_assert_eq!(SafeMathInt256::add(lo, hi).unwrap(), sum);
        }
    }

    #[test]
    fn div_undoes_mul(a in full_range(), b in full_range()) {
        prop_assume!(!b.is_zero());
        if let Ok(product) = SafeMathInt256::mul(a, b) {
            prop_assert_eq!(SafeMathInt256::div(product, b).unwrap(), a);
        }
    }

    #[test]
    fn add_undoes_sub(a in full_range(), b in full_range()) {
        if let Ok(diff) = SafeMathInt256::sub(a, b) {
            prop_assert_eq!(SafeMathInt256::add(diff, b).unwrap(), a);
        }
    }

    #[test]
    fn add_and_mul_commute(a in full_range(), b in full_range()) {
        prop_assert_eq!(SafeMathInt256::add(a, b).ok(), SafeMathInt256::add(b, a).ok());
        prop_assert_eq!(SafeMathInt256::mul(a, b).ok(), SafeMathInt256::mul(b, a).ok());
    }

    #[test]
    fn results_stay_in_range(a in full_range(), b in full_range()) {
        for result in [
            SafeMathInt256::add(a, b),
            SafeMathInt256::sub(a, b),
            SafeMathInt256::mul(a, b),
            SafeMathInt256::div(a, b),
        ] {
            if let Ok(value) = result {
                prop_assert!(value >= SafeMathInt256::get_min() && value <= SafeMathInt256::get_max());
            }
        }
    }

    #[test]
    fn fxp_mul_matches_mul_then_div(a in any::<i64>(), b in any::<i64>(), base in 1i64..=1_000_000_000_000_000_000) {
        let expected = (a as i128) * (b as i128) / (base as i128);
        let actual = SafeMathInt256::fxp_mul(I256::from(a as i128), I256::from(b as i128), I256::from(base as i128));
        prop_assert_eq!(actual.unwrap(), I256::from(expected));
    }

    #[test]
    fn fxp_div_matches_scaled_quotient(a in any::<i64>(), b in any::<i64>(), base in 1i64..=1_000_000_000_000_000_000) {
        let actual = SafeMathInt256::fxp_div(I256::from(a as i128), I256::from(b as i128), I256::from(base as i128));
        if b == 0 {
            prop_assert!(actual.is_err());
        } else {
            let expected = (a as i128) * (base as i128) / (b as i128);
            prop_assert_eq!(actual.unwrap(), I256::from(expected));
        }
    }
}
