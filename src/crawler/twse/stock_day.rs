use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    chart::point::{self, ChartPoint},
    crawler::{twse, FetchError},
    table::Table,
    util::http,
};

#[derive(Serialize, Deserialize, Debug)]
struct StockDayResponse {
    pub title: Option<String>,
    pub date: Option<String>,
    pub stat: Option<String>,
    pub fields: Option<Vec<String>>,
    pub data: Option<Vec<Vec<String>>>,
    pub notes: Option<Vec<String>>,
}

/// 個股單月日成交資訊的查詢結果
#[derive(Debug)]
pub struct StockDayDataset {
    pub title: Option<String>,
    pub date: Option<String>,
    pub stat: Option<String>,
    pub notes: Vec<String>,
    pub table: Table,
    pub points: Vec<ChartPoint>,
}

impl StockDayDataset {
    /// 狀態列：stat 與 notes 中的非空白文字以「 | 」串接。
    pub fn status_line(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.notes.len() + 1);

        if let Some(stat) = self.stat.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            parts.push(stat);
        }

        parts.extend(
            self.notes
                .iter()
                .map(|note| note.trim())
                .filter(|note| !note.is_empty()),
        );

        parts.join(" | ")
    }
}

/// 抓取個股的日成交資訊，查詢範圍為 date 所在月份（端點以每月一日為參數）。
pub async fn visit(date: NaiveDate, stock_no: &str) -> Result<StockDayDataset, FetchError> {
    let first_of_month = date.with_day(1).unwrap_or(date);
    let url = format!(
        "https://www.{}/rwd/zh/afterTrading/STOCK_DAY?date={}&stockNo={}&response=json",
        twse::HOST,
        first_of_month.format("%Y%m%d"),
        urlencoding::encode(stock_no)
    );

    let res = http::get_use_json::<StockDayResponse>(&url, Some(twse::build_headers())).await?;

    match res.stat.as_deref().map(str::trim) {
        Some(stat) if stat.eq_ignore_ascii_case("OK") => {}
        Some(stat) if !stat.is_empty() => return Err(FetchError::Stat(stat.to_string())),
        _ => return Err(FetchError::Stat("證交所回傳未成功的狀態。".to_string())),
    }

    let fields = res.fields.ok_or(FetchError::MissingField("fields"))?;
    let data = res.data.ok_or(FetchError::MissingField("data"))?;

    Ok(StockDayDataset {
        points: point::extract(&fields, &data),
        table: Table::from_response(&fields, &data),
        title: res.title,
        date: res.date,
        stat: res.stat,
        notes: res.notes.unwrap_or_default(),
    })
}
