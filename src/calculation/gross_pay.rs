//! Gross pay calculation from minutes worked.

use rust_decimal::Decimal;

use super::MINUTES_PER_HOUR;

/// Decimal places gross pay is rounded to.
pub const PAY_DECIMAL_PLACES: u32 = 2;

/// Calculates gross pay for a set of daily minute totals.
///
/// Each day contributes `minutes * hourly_rate / 60`. The sum is rounded once
/// at the end (banker's rounding) and always carries two decimal places, so
/// whole amounts render as `18.00` rather than `18`.
///
/// # Examples
///
/// ```
/// use employee_portal::calculation::calculate_gross_pay;
/// use rust_decimal::Decimal;
///
/// let pay = calculate_gross_pay([60, 30, 0, 0, 0, 0, 0], Decimal::new(12, 0));
/// assert_eq!(pay.to_string(), "18.00");
/// ```
pub fn calculate_gross_pay<I>(daily_minutes: I, hourly_rate: Decimal) -> Decimal
where
    I: IntoIterator<Item = u32>,
{
    let minutes_per_hour = Decimal::from(MINUTES_PER_HOUR);

    let mut total: Decimal = daily_minutes
        .into_iter()
        .map(|minutes| Decimal::from(minutes) * hourly_rate / minutes_per_hour)
        .sum();

    total = total.round_dp(PAY_DECIMAL_PLACES);
    total.rescale(PAY_DECIMAL_PLACES);
    total
}
