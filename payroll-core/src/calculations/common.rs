//! Common utility functions for salary calculations.
//!
//! Rounding policy and currency formatting shared by the resolver,
//! aggregator, and validator.

use rust_decimal::Decimal;

/// Rounds a decimal value to the nearest whole rupee using half-up rounding.
///
/// Salary amounts carry no fractional currency units; every resolved
/// component value and every monthly figure passes through this function.
/// Midpoints round away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::round_rupee;
///
/// assert_eq!(round_rupee(dec!(47583.33)), dec!(47583));
/// assert_eq!(round_rupee(dec!(28800.5)), dec!(28801));
/// assert_eq!(round_rupee(dec!(-200.5)), dec!(-201)); // Away from zero
/// ```
pub fn round_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a rupee amount with Indian digit grouping.
///
/// The last three digits form one group and every two digits after that
/// form another, so 600000 renders as `6,00,000`. The amount is rounded
/// to a whole rupee first; no currency symbol is added.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::format_inr;
///
/// assert_eq!(format_inr(&dec!(600000)), "6,00,000");
/// assert_eq!(format_inr(&dec!(1500)), "1,500");
/// assert_eq!(format_inr(&dec!(999)), "999");
/// assert_eq!(format_inr(&dec!(-47583)), "-47,583");
/// ```
pub fn format_inr(value: &Decimal) -> String {
    let rounded = round_rupee(*value);
    let digits = round_rupee(rounded.abs()).normalize().to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, right) = rest.split_at(rest.len() - 2);
            groups.push(right);
            rest = left;
        }
        groups.push(rest);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if rounded < Decimal::ZERO {
        format!("-{grouped}")
    } else {
        grouped
    }
}
