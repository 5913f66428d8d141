use chrono::NaiveDate;

/// ISO 格式優先，其次為斜線日期（chrono 的數字欄位允許不補零）。
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parses a trading-day cell such as `2024-01-02`, `2024/01/02` or
/// `2024/1/2`. Returns `None` when no known format matches.
///
/// 證交所部分報表以民國年回傳（例︰113/01/04），此處不做民國轉西元，
/// 直接以字面年份解析，排序不受影響。
pub fn parse_trading_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}
