use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses a decimal value from a cell of upstream tabular data.
///
/// Everything that is not an ASCII digit, a sign or a decimal point is
/// stripped before parsing, so thousand separators and unit suffixes are
/// tolerated. Returns `None` when nothing parseable remains.
///
/// 例︰"1,234.5" => 1234.5、"+3.5" => 3.5、"--" => None
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let sanitized: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
        .collect();

    if sanitized.is_empty() {
        return None;
    }

    Decimal::from_str(&sanitized).ok()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    // 注意這個慣用法：在 tests 模組中，從外部範疇匯入所有名字。
    use super::*;

    #[test]
    fn test_parse_decimal_strips_thousand_separators() {
        assert_eq!(parse_decimal("1,234.5"), Some(dec!(1234.5)));
        assert_eq!(parse_decimal("12,345,678"), Some(dec!(12345678)));
    }

    #[test]
    fn test_parse_decimal_keeps_sign() {
        assert_eq!(parse_decimal("+3.5"), Some(dec!(3.5)));
        assert_eq!(parse_decimal("-2.75"), Some(dec!(-2.75)));
    }

    #[test]
    fn test_parse_decimal_strips_unit_suffix() {
        assert_eq!(parse_decimal("102.00元"), Some(dec!(102.00)));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("  "), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("--"), None);
    }
}
