//! Fixed two-decimal rounding of dose values.
//!
//! The exact binary value is rounded to the nearest hundredth. A true tie can
//! only happen when `8 * value` is an odd integer (the value ends in .125,
//! .375, .625 or .875); those round half away from zero.

/// Format `value` with exactly two decimal places.
pub fn to_fixed_2(value: f64) -> String {
    if !is_cent_tie(value) {
        return format!("{:.2}", value);
    }

    // n/8 has exactly three decimals, and the hundredths digit is 2 or 7
    // for every odd n, so bumping it never carries.
    let exact = format!("{:.3}", value);
    let mut digits: Vec<char> = exact.chars().collect();
    digits.pop();
    if let Some(last) = digits.last_mut() {
        if let Some(d) = last.to_digit(10) {
            *last = char::from_digit((d + 1) % 10, 10).unwrap_or(*last);
        }
    }
    digits.into_iter().collect()
}

/// The `f64` closest to [`to_fixed_2`] of `value`.
pub fn round_to_cents(value: f64) -> f64 {
    to_fixed_2(value).parse().unwrap_or(value)
}

fn is_cent_tie(value: f64) -> bool {
    let eighths = value * 8.0;
    eighths.is_finite() && eighths.fract() == 0.0 && (eighths % 2.0).abs() == 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(to_fixed_2(35.0), "35.00");
        assert_eq!(to_fixed_2(38.5), "38.50");
        assert_eq!(to_fixed_2(1.999), "2.00");
        assert_eq!(to_fixed_2(9.999), "10.00");
        assert_eq!(to_fixed_2(0.001), "0.00");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(to_fixed_2(0.125), "0.13");
        assert_eq!(to_fixed_2(0.375), "0.38");
        assert_eq!(to_fixed_2(10.625), "10.63");
        assert_eq!(to_fixed_2(2.875), "2.88");
        assert_eq!(to_fixed_2(-0.125), "-0.13");
    }

    #[test]
    fn test_near_ties_follow_binary_value() {
        // 2.675 and 1.005 are stored slightly below the written decimal.
        assert_eq!(to_fixed_2(2.675), "2.67");
        assert_eq!(to_fixed_2(1.005), "1.00");
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(42.0), 42.0);
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(38.499), 38.5);
    }
}
