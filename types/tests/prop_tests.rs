use proptest::prelude::*;

use weft_types::{TokenAmount, Timestamp, WalletAddress};

proptest! {
    /// Checked add/sub round-trip: (a + b) - b == a whenever the add fits.
    #[test]
    fn amount_add_sub_roundtrip(a in 0u128..u128::MAX / 2, b in 0u128..u128::MAX / 2) {
        let a = TokenAmount::new(a);
        let b = TokenAmount::new(b);
        let sum = a.checked_add(b).unwrap();
        prop_assert_eq!(sum.checked_sub(b), Some(a));
    }

    /// saturating_sub never underflows and agrees with checked_sub when it fits.
    #[test]
    fn amount_saturating_sub_consistent(a in any::<u128>(), b in any::<u128>()) {
        let a = TokenAmount::new(a);
        let b = TokenAmount::new(b);
        match a.checked_sub(b) {
            Some(diff) => prop_assert_eq!(a.saturating_sub(b), diff),
            None => prop_assert_eq!(a.saturating_sub(b), TokenAmount::ZERO),
        }
    }

    /// Shifting a timestamp forward never moves it backwards.
    #[test]
    fn plus_secs_is_monotonic(start in any::<u64>(), delta in any::<u64>()) {
        let t = Timestamp::new(start);
        prop_assert!(t.plus_secs(delta) >= t);
    }

    /// Any prefixed, non-empty body parses and round-trips.
    #[test]
    fn address_parse_roundtrip(body in "[a-z0-9]{1,40}") {
        let raw = format!("weft_{body}");
        let addr = WalletAddress::parse(raw.clone()).unwrap();
        prop_assert_eq!(addr.as_str(), raw.as_str());
    }
}
