//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors that can occur while pricing cart lines.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Quantity × unit price does not fit in minor units.
    #[error("line total overflows for quantity {0}")]
    LineOverflow(u32),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates `unit_price × quantity`.
///
/// # Errors
///
/// Returns [`PricingError::LineOverflow`] if the result does not fit in minor units.
pub fn line_total(
    unit_price: Money<'static, Currency>,
    quantity: u32,
) -> Result<Money<'static, Currency>, PricingError> {
    let minor_units = unit_price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::LineOverflow(quantity))?;

    Ok(Money::from_minor(minor_units, unit_price.currency()))
}

/// Sums line totals, starting from zero in the given currency.
///
/// # Errors
///
/// - [`PricingError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn order_total<I>(
    totals: I,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError>
where
    I: IntoIterator<Item = Money<'static, Currency>>,
{
    let total = totals
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, total| acc.add(total))?;

    Ok(total)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn line_total_multiplies_unit_price() -> TestResult {
        let total = line_total(Money::from_minor(275, iso::USD), 3)?;

        assert_eq!(total, Money::from_minor(825, iso::USD));

        Ok(())
    }

    #[test]
    fn line_total_reports_overflow() {
        let result = line_total(Money::from_minor(i64::MAX, iso::USD), 2);

        assert!(matches!(result, Err(PricingError::LineOverflow(2))));
    }

    #[test]
    fn order_total_sums_lines() -> TestResult {
        let total = order_total(
            [
                Money::from_minor(200, iso::USD),
                Money::from_minor(450, iso::USD),
            ],
            iso::USD,
        )?;

        assert_eq!(total, Money::from_minor(650, iso::USD));

        Ok(())
    }

    #[test]
    fn order_total_of_nothing_is_zero() -> TestResult {
        let lines: [Money<'static, Currency>; 0] = [];

        let total = order_total(lines, iso::GBP)?;

        assert_eq!(total, Money::from_minor(0, iso::GBP));

        Ok(())
    }

    #[test]
    fn order_total_rejects_mixed_currencies() {
        let result = order_total(
            [
                Money::from_minor(200, iso::USD),
                Money::from_minor(200, iso::GBP),
            ],
            iso::USD,
        );

        assert!(matches!(result, Err(PricingError::Money(_))));
    }
}
