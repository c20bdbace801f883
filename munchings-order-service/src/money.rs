use bigdecimal::{BigDecimal, RoundingMode, Zero};
use serde::{Deserialize, Serialize};

pub const TAX_RATE_PERCENT: u32 = 8;

/// Currency amounts are kept to cents.
pub const MONEY_SCALE: i64 = 2;

pub fn round_money(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(MONEY_SCALE, RoundingMode::HalfUp)
}

pub fn tax_on(subtotal: &BigDecimal) -> BigDecimal {
    round_money(&(subtotal * BigDecimal::from(TAX_RATE_PERCENT) / BigDecimal::from(100)))
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Totals {
    pub subtotal: BigDecimal,
    pub tax: BigDecimal,
    pub total: BigDecimal,
}

impl Totals {
    pub fn from_subtotal(subtotal: BigDecimal) -> Self {
        let subtotal = round_money(&subtotal);
        let tax = tax_on(&subtotal);
        let total = &subtotal + &tax;
        Self {
            subtotal,
            tax,
            total,
        }
    }

    pub fn zero() -> Self {
        Self::from_subtotal(BigDecimal::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(cents: i64) -> BigDecimal {
        BigDecimal::new(cents.into(), 2)
    }

    #[test]
    fn test_tax_rounds_half_up_to_cents() {
        // 80.97 * 0.08 = 6.4776
        assert_eq!(tax_on(&money(8097)), money(648));
        // 69.96 * 0.08 = 5.5968
        assert_eq!(tax_on(&money(6996)), money(560));
        // 0.0625 * 8% = 0.005 rounds up
        assert_eq!(tax_on(&BigDecimal::new(625.into(), 4)), money(1));
    }

    #[test]
    fn test_totals_add_up() {
        let totals = Totals::from_subtotal(money(8097));
        assert_eq!(totals.subtotal, money(8097));
        assert_eq!(totals.tax, money(648));
        assert_eq!(totals.total, money(8745));
        assert_eq!(totals.total, &totals.subtotal + &totals.tax);
    }

    #[test]
    fn test_zero_totals() {
        let totals = Totals::zero();
        assert!(totals.subtotal.is_zero());
        assert!(totals.tax.is_zero());
        assert!(totals.total.is_zero());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tax_is_eight_percent_rounded_half_up(cents in 0i64..10_000_000) {
                prop_assert_eq!(tax_on(&money(cents)), money((cents * 8 + 50) / 100));
            }

            #[test]
            fn total_is_subtotal_plus_tax(cents in 0i64..10_000_000) {
                let totals = Totals::from_subtotal(money(cents));
                prop_assert_eq!(&totals.subtotal, &money(cents));
                prop_assert_eq!(&totals.tax, &tax_on(&totals.subtotal));
                prop_assert_eq!(&totals.total, &(&totals.subtotal + &totals.tax));
            }
        }
    }
}
