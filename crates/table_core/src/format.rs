//! Fixed two-decimal formatting for numeric cells.

/// Formats `value` with exactly two fractional digits.
///
/// Rounds half away from zero on the shortest decimal representation of the
/// value, so `10.005` renders as `10.01` even though the nearest binary double
/// is slightly below it.
pub fn format_fixed2(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // `Display` for f64 never uses exponent notation.
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let frac: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();
    digits.push(frac.first().copied().unwrap_or(0));
    digits.push(frac.get(1).copied().unwrap_or(0));

    if frac.get(2).copied().unwrap_or(0) >= 5 {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if !carry {
                break;
            }
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let int_text: String = digits[..split].iter().map(|d| char::from(b'0' + d)).collect();
    let frac_text: String = digits[split..].iter().map(|d| char::from(b'0' + d)).collect();
    let negative = value.is_sign_negative() && digits.iter().any(|d| *d != 0);

    format!(
        "{}{int_text}.{frac_text}",
        if negative { "-" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use super::format_fixed2;

    #[test]
    fn rounds_half_up_on_displayed_decimal() {
        assert_eq!(format_fixed2(10.005), "10.01");
        assert_eq!(format_fixed2(0.125), "0.13");
        assert_eq!(format_fixed2(1.004), "1.00");
    }

    #[test]
    fn pads_short_fractions() {
        assert_eq!(format_fixed2(2.0), "2.00");
        assert_eq!(format_fixed2(1.5), "1.50");
        assert_eq!(format_fixed2(0.0), "0.00");
    }

    #[test]
    fn carries_into_integer_part() {
        assert_eq!(format_fixed2(9.995), "10.00");
        assert_eq!(format_fixed2(99.999), "100.00");
    }

    #[test]
    fn keeps_sign_only_for_nonzero_results() {
        assert_eq!(format_fixed2(-1.005), "-1.01");
        assert_eq!(format_fixed2(-0.001), "0.00");
    }
}
