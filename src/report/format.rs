//! Display formatting. Rounding to cents happens here and nowhere else.

/// Two-decimal money string, optionally with `,` thousands separators.
pub fn format_money(value: f64, grouped: bool) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.2}", value);
    let formatted = if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    };
    if !grouped {
        return formatted;
    }

    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped_int = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped_int.push(',');
        }
        grouped_int.push(ch);
    }

    format!("{}{}.{}", sign, grouped_int, frac_part)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Hours and counts: integral values print without decimals.
pub fn format_quantity(value: f64) -> String {
    value.to_string()
}
