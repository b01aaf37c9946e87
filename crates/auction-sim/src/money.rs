/// Formats an integer amount with comma thousands separators, e.g. `72,800,000`.
pub fn format_amount<T: Into<i128>>(value: T) -> String {
    let value: i128 = value.into();
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Amount followed by the currency unit used throughout the catalog.
pub fn format_won<T: Into<i128>>(value: T) -> String {
    format!("{} won", format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_thousands() {
        assert_eq!(format_amount(0u64), "0");
        assert_eq!(format_amount(999u64), "999");
        assert_eq!(format_amount(1_000u64), "1,000");
        assert_eq!(format_amount(72_800_000u64), "72,800,000");
        assert_eq!(format_amount(-1_234_567i64), "-1,234,567");
    }

    #[test]
    fn appends_currency_unit() {
        assert_eq!(format_won(280_000_000u64), "280,000,000 won");
    }
}
