//! Display formatting for unit values. Every function here is total: bad or
//! missing input degrades to a placeholder string instead of an error.

use crate::error::AmountError;
use crate::state::Amount;

pub const NOT_AVAILABLE: &str = "N/A";
pub const CURRENCY_SYMBOL: &str = "₨";
pub const AREA_UNIT: &str = "sq ft";

const AREA_MAX_FRACTION_DIGITS: u32 = 3;

/// Reads an amount as a number. Text may carry thousands separators.
pub fn parse_amount(value: Option<&Amount>) -> Result<f64, AmountError> {
    let number = match value {
        None => return Err(AmountError::Missing),
        Some(Amount::Number(n)) => *n,
        Some(Amount::Text(text)) => {
            let cleaned: String = text.chars().filter(|c| *c != ',').collect();
            let cleaned = cleaned.trim();
            if cleaned.is_empty() {
                return Err(AmountError::Empty);
            }
            cleaned
                .parse::<f64>()
                .map_err(|_| AmountError::NotNumeric(text.clone()))?
        }
    };

    if number.is_finite() {
        Ok(number)
    } else {
        Err(AmountError::NotFinite)
    }
}

/// PKR with no fractional digits, e.g. `₨1,250,000`. Unparseable text is
/// shown verbatim; anything else becomes [`NOT_AVAILABLE`].
pub fn format_currency(value: Option<&Amount>) -> String {
    match parse_amount(value) {
        Ok(number) => {
            let rounded = number.round();
            let sign = if rounded < 0.0 { "-" } else { "" };
            let digits = format!("{:.0}", rounded.abs());
            format!("{}{}{}", sign, CURRENCY_SYMBOL, group_digit_str(&digits))
        }
        Err(_) => match value {
            Some(Amount::Text(text)) if !text.trim().is_empty() => text.clone(),
            _ => NOT_AVAILABLE.to_string(),
        },
    }
}

pub fn format_area(value: Option<f64>) -> String {
    match value {
        Some(area) if area.is_finite() => format!("{} {}", format_number(area), AREA_UNIT),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Grouped decimal with up to three fraction digits, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.prec$}", value.abs(), prec = AREA_MAX_FRACTION_DIGITS as usize);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let is_zero = whole.bytes().all(|b| b == b'0') && fraction.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    let mut out = format!("{}{}", sign, group_digit_str(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

pub fn group_digits(value: u64) -> String {
    group_digit_str(&value.to_string())
}

/// Inserts thousands separators into a run of ASCII digits. Works on the
/// decimal text so values past `u64::MAX` keep every digit.
fn group_digit_str(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Uppercases the first character only; the rest is left untouched.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod amount_tests {
        use super::*;

        #[test]
        fn parses_numbers_and_grouped_text() {
            assert_eq!(parse_amount(Some(&Amount::Number(1_250_000.0))), Ok(1_250_000.0));
            assert_eq!(parse_amount(Some(&"1,250,000".into())), Ok(1_250_000.0));
            assert_eq!(parse_amount(Some(&" 42 ".into())), Ok(42.0));
        }

        #[test]
        fn rejects_missing_empty_and_words() {
            assert_eq!(parse_amount(None), Err(AmountError::Missing));
            assert_eq!(parse_amount(Some(&"".into())), Err(AmountError::Empty));
            assert_eq!(parse_amount(Some(&" , ".into())), Err(AmountError::Empty));
            assert_eq!(
                parse_amount(Some(&"Contact us".into())),
                Err(AmountError::NotNumeric("Contact us".into()))
            );
        }

        #[test]
        fn rejects_non_finite_values() {
            assert_eq!(parse_amount(Some(&Amount::Number(f64::NAN))), Err(AmountError::NotFinite));
            assert_eq!(parse_amount(Some(&"inf".into())), Err(AmountError::NotFinite));
        }
    }

    mod currency_tests {
        use super::*;

        #[test]
        fn missing_is_not_available() {
            assert_eq!(format_currency(None), "N/A");
        }

        #[test]
        fn formats_numbers_as_pkr() {
            assert_eq!(format_currency(Some(&Amount::Number(1_250_000.0))), "₨1,250,000");
            assert_eq!(format_currency(Some(&Amount::Number(0.0))), "₨0");
            assert_eq!(format_currency(Some(&Amount::Number(999.0))), "₨999");
        }

        #[test]
        fn formats_grouped_text_as_pkr() {
            assert_eq!(format_currency(Some(&"1,250,000".into())), "₨1,250,000");
        }

        #[test]
        fn rounds_to_whole_rupees() {
            assert_eq!(format_currency(Some(&Amount::Number(1234.5))), "₨1,235");
            assert_eq!(format_currency(Some(&Amount::Number(1234.4))), "₨1,234");
        }

        #[test]
        fn amounts_beyond_u64_keep_every_digit() {
            assert_eq!(
                format_currency(Some(&Amount::Number(1e20))),
                "₨100,000,000,000,000,000,000"
            );
            assert_eq!(
                format_currency(Some(&"100,000,000,000,000,000,000".into())),
                "₨100,000,000,000,000,000,000"
            );
        }

        #[test]
        fn negative_amounts_keep_sign() {
            assert_eq!(format_currency(Some(&Amount::Number(-5000.0))), "-₨5,000");
        }

        #[test]
        fn free_text_passes_through() {
            assert_eq!(format_currency(Some(&"Contact us".into())), "Contact us");
        }

        #[test]
        fn blank_text_is_not_available() {
            assert_eq!(format_currency(Some(&"".into())), "N/A");
            assert_eq!(format_currency(Some(&"   ".into())), "N/A");
        }
    }

    mod area_tests {
        use super::*;

        #[test]
        fn missing_is_not_available() {
            assert_eq!(format_area(None), "N/A");
            assert_eq!(format_area(Some(f64::INFINITY)), "N/A");
        }

        #[test]
        fn groups_and_appends_unit() {
            assert_eq!(format_area(Some(1200.0)), "1,200 sq ft");
            assert_eq!(format_area(Some(850.0)), "850 sq ft");
        }

        #[test]
        fn keeps_up_to_three_fraction_digits() {
            assert_eq!(format_area(Some(1200.5)), "1,200.5 sq ft");
            assert_eq!(format_area(Some(99.12345)), "99.123 sq ft");
        }

        #[test]
        fn huge_areas_keep_every_digit() {
            assert_eq!(format_area(Some(1e20)), "100,000,000,000,000,000,000 sq ft");
        }

        #[test]
        fn negative_zero_has_no_sign() {
            assert_eq!(format_number(-0.0001), "0");
            assert_eq!(format_number(-1500.25), "-1,500.25");
        }
    }

    #[test]
    fn group_digits_inserts_commas() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(100), "100");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(12_500_000), "12,500,000");
    }

    #[test]
    fn title_case_only_touches_first_char() {
        assert_eq!(title_case("ground"), "Ground");
        assert_eq!(title_case("first floor"), "First floor");
        assert_eq!(title_case("mEZZANINE"), "MEZZANINE");
        assert_eq!(title_case(""), "");
    }
}
