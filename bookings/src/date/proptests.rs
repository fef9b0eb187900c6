//! Property-based tests for `DateRange`.

use super::DateRange;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2050, 1, 1).unwrap()
}

// Ranges as (offset, length) pairs from a fixed base day.
fn range_strategy() -> impl Strategy<Value = DateRange> {
    (0i64..400, 0i64..30).prop_map(|(offset, len)| {
        let start = base() + Duration::days(offset);
        DateRange::new(start, start + Duration::days(len)).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 5000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn overlap_is_symmetric(a in range_strategy(), b in range_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn overlap_is_reflexive(a in range_strategy()) {
        prop_assert!(a.overlaps(&a));
    }

    // Two ranges overlap exactly when some day lies in both.
    #[test]
    fn overlap_matches_shared_day(a in range_strategy(), b in range_strategy()) {
        let mut day = a.start();
        let mut shared = false;
        while day <= a.end() {
            if b.contains(day) {
                shared = true;
                break;
            }
            day += Duration::days(1);
        }
        prop_assert_eq!(a.overlaps(&b), shared);
    }

    #[test]
    fn reversed_endpoints_rejected(offset in 0i64..400, len in 1i64..30) {
        let start = base() + Duration::days(offset);
        let end = start + Duration::days(len);
        prop_assert!(DateRange::new(end, start).is_err());
    }

    #[test]
    fn days_counts_both_endpoints(a in range_strategy()) {
        prop_assert_eq!(a.days(), (a.end() - a.start()).num_days() + 1);
    }
}
