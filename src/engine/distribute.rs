// ============================================================================
// Distribution
// Splits an integer amount by ratios without losing a single unit
// ============================================================================

use crate::interfaces::Calculator;
use crate::numeric::MoneyResult;
use std::cmp::Ordering;

/// Split `amount` proportionally to `ratios`.
///
/// Each share starts as `amount * ratio / total` (truncated); the units
/// lost to truncation are then handed out one at a time, in order, to the
/// shares whose ratio is non-zero. Shares always sum to `amount` and a zero
/// ratio always receives zero.
///
/// Ratios are expected non-negative; if they sum to zero the ratios are
/// returned as the shares (all zero).
///
/// # Example
/// ```
/// use exact_money::engine::distribute;
/// use exact_money::numeric::I64Calculator;
///
/// let shares = distribute(&I64Calculator, &1003, &[50, 50]).unwrap();
/// assert_eq!(shares, vec![502, 501]);
/// ```
pub fn distribute<C: Calculator>(
    calc: &C,
    amount: &C::Amount,
    ratios: &[C::Amount],
) -> MoneyResult<Vec<C::Amount>> {
    let total = ratios
        .iter()
        .try_fold(calc.zero(), |sum, ratio| calc.add(&sum, ratio))?;
    if calc.is_zero(&total) {
        return Ok(ratios.to_vec());
    }

    let mut remainder = amount.clone();
    let mut shares = Vec::with_capacity(ratios.len());
    for ratio in ratios {
        let share = calc.integer_divide(&calc.multiply(amount, ratio)?, &total)?;
        remainder = calc.subtract(&remainder, &share)?;
        shares.push(share);
    }

    // Leftover units carry the sign of the amount
    let (unit, direction) = if calc.is_negative(amount) {
        (calc.negate(&calc.one())?, Ordering::Less)
    } else {
        (calc.one(), Ordering::Greater)
    };

    let recipients: Vec<usize> = ratios
        .iter()
        .enumerate()
        .filter(|(_, ratio)| !calc.is_zero(ratio))
        .map(|(index, _)| index)
        .collect();

    // Truncation loses less than one unit per share, so one pass suffices
    for index in recipients {
        if calc.compare(&remainder, &calc.zero()) != direction {
            break;
        }
        if let Some(share) = shares.get_mut(index) {
            *share = calc.add(share, &unit)?;
            remainder = calc.subtract(&remainder, &unit)?;
        }
    }

    tracing::trace!(
        calculator = calc.name(),
        %amount,
        parts = shares.len(),
        "distributed amount"
    );

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{BigIntCalculator, I64Calculator};
    use num_bigint::BigInt;
    use proptest::prelude::*;

    #[test]
    fn test_even_split() {
        let shares = distribute(&I64Calculator, &1000, &[1, 1, 1, 1]).unwrap();
        assert_eq!(shares, vec![250, 250, 250, 250]);
    }

    #[test]
    fn test_remainder_goes_to_first_shares() {
        let shares = distribute(&I64Calculator, &100, &[1, 1, 1]).unwrap();
        assert_eq!(shares, vec![34, 33, 33]);
    }

    #[test]
    fn test_weighted_split() {
        let shares = distribute(&I64Calculator, &1003, &[25, 75]).unwrap();
        assert_eq!(shares, vec![251, 752]);
    }

    #[test]
    fn test_zero_ratio_gets_nothing() {
        let shares = distribute(&I64Calculator, &101, &[0, 1, 1]).unwrap();
        assert_eq!(shares, vec![0, 51, 50]);
    }

    #[test]
    fn test_negative_amount() {
        let shares = distribute(&I64Calculator, &-100, &[1, 1, 1]).unwrap();
        assert_eq!(shares, vec![-34, -33, -33]);
    }

    #[test]
    fn test_all_zero_ratios() {
        let shares = distribute(&I64Calculator, &100, &[0, 0]).unwrap();
        assert_eq!(shares, vec![0, 0]);
    }

    #[test]
    fn test_bigint() {
        let ratios = [BigInt::from(1), BigInt::from(2)];
        let shares = distribute(&BigIntCalculator, &BigInt::from(10), &ratios).unwrap();
        assert_eq!(shares, vec![BigInt::from(4), BigInt::from(6)]);
    }

    proptest! {
        #[test]
        fn prop_shares_sum_to_amount(
            amount in -1_000_000i64..1_000_000,
            ratios in prop::collection::vec(0i64..1_000, 1..8)
        ) {
            let shares = distribute(&I64Calculator, &amount, &ratios).unwrap();
            prop_assert_eq!(shares.len(), ratios.len());
            if ratios.iter().any(|ratio| *ratio > 0) {
                prop_assert_eq!(shares.iter().sum::<i64>(), amount);
            }
            for (share, ratio) in shares.iter().zip(&ratios) {
                if *ratio == 0 {
                    prop_assert_eq!(*share, 0);
                }
            }
        }
    }
}
