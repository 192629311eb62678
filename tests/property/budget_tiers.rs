//! Property-based tests for budget tier classification

use nomora::budget::{self, BudgetTier};
use proptest::prelude::*;

/// Classification is total and monotonic in the amount
#[test]
fn test_budget_tier_monotonic_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any::<i64>(), any::<i64>()), |(a, b)| {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(budget::classify(low) <= budget::classify(high));
            Ok(())
        })
        .unwrap();
}

proptest! {
    #[test]
    fn test_tier_matches_thresholds(amount in -1_000_000i64..40_000_000i64) {
        let expected = if amount >= budget::ULTRA_HIGH_THRESHOLD {
            BudgetTier::UltraHigh
        } else if amount >= budget::HIGH_THRESHOLD {
            BudgetTier::High
        } else if amount >= budget::MID_THRESHOLD {
            BudgetTier::Mid
        } else if amount >= budget::LOW_THRESHOLD {
            BudgetTier::Low
        } else {
            BudgetTier::UltraLow
        };
        prop_assert_eq!(budget::classify(amount), expected);
    }

    #[test]
    fn test_every_tier_has_guidance(amount in any::<i64>()) {
        let tier = budget::classify(amount);
        prop_assert!(BudgetTier::ALL.contains(&tier));
        prop_assert!(!tier.guidance().is_empty());
    }
}
