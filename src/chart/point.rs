use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::util;

/// 一筆日成交紀錄在折線圖上的點
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub close: Decimal,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
}

/// 從原始欄位與資料列取出可繪圖的點，依日期由舊到新穩定排序。
///
/// 欄位以字面包含「日期／收盤／最高／最低」來定位；找不到日期或收盤欄位時
/// 回傳空列表。日期或收盤價無法解析的資料列直接略過，最高與最低價則可有可無。
pub fn extract(fields: &[String], rows: &[Vec<String>]) -> Vec<ChartPoint> {
    let high_index = find_field(fields, "最高");
    let low_index = find_field(fields, "最低");
    let (date_index, close_index) = match (find_field(fields, "日期"), find_field(fields, "收盤")) {
        (Some(date), Some(close)) => (date, close),
        _ => return Vec::new(),
    };

    let mut points: Vec<ChartPoint> = rows
        .iter()
        .filter_map(|row| build_point(row, date_index, close_index, high_index, low_index))
        .collect();

    points.sort_by_key(|point| point.date);
    points
}

fn find_field(fields: &[String], fragment: &str) -> Option<usize> {
    fields.iter().position(|field| field.contains(fragment))
}

fn build_point(
    row: &[String],
    date_index: usize,
    close_index: usize,
    high_index: Option<usize>,
    low_index: Option<usize>,
) -> Option<ChartPoint> {
    let date = util::datetime::parse_trading_date(row.get(date_index)?)?;
    let close = util::text::parse_decimal(row.get(close_index)?)?;
    let high = high_index
        .and_then(|index| row.get(index))
        .and_then(|cell| util::text::parse_decimal(cell));
    let low = low_index
        .and_then(|index| row.get(index))
        .and_then(|cell| util::text::parse_decimal(cell));

    Some(ChartPoint { date, close, high, low })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn test_extract_only_parseable_rows_become_points() {
        let points = extract(
            &fields(&["日期", "開盤", "收盤"]),
            &[row(&["2024/01/02", "100", "102"]), row(&["2024/01/03", "101", "abc"])],
        );

        assert_eq!(
            points,
            vec![ChartPoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                close: dec!(102),
                high: None,
                low: None,
            }]
        );
    }

    #[test]
    fn test_extract_skips_unparseable_dates() {
        let points = extract(
            &fields(&["日期", "收盤"]),
            &[row(&["休市", "100"]), row(&["2024/01/03", "101"])],
        );

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn test_extract_sanitizes_thousand_separators() {
        let points = extract(
            &fields(&["日期", "收盤"]),
            &[row(&["2024/01/02", "1,234.5"])],
        );

        assert_eq!(points[0].close, dec!(1234.5));
    }

    #[test]
    fn test_extract_high_low_are_optional() {
        let points = extract(
            &fields(&["日期", "最高價", "最低價", "收盤價"]),
            &[row(&["2024/01/02", "105", "--", "102"])],
        );

        assert_eq!(points[0].high, Some(dec!(105)));
        assert_eq!(points[0].low, None);
    }

    #[test]
    fn test_extract_sorts_ascending_by_date() {
        let points = extract(
            &fields(&["日期", "收盤"]),
            &[
                row(&["2024/01/05", "103"]),
                row(&["2024/01/02", "101"]),
                row(&["2024/01/04", "102"]),
            ],
        );

        let dates: Vec<NaiveDate> = points.iter().map(|point| point.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_extract_without_date_or_close_column_is_empty() {
        assert!(extract(&fields(&["開盤", "收盤"]), &[row(&["100", "102"])]).is_empty());
        assert!(extract(&fields(&["日期", "開盤"]), &[row(&["2024/01/02", "100"])]).is_empty());
    }

    #[test]
    fn test_extract_skips_rows_shorter_than_needed() {
        let points = extract(
            &fields(&["日期", "開盤", "收盤"]),
            &[row(&["2024/01/02", "100"])],
        );

        assert!(points.is_empty());
    }
}
