use serde::{Deserialize, Serialize};

use crate::{
    crawler::{twse, FetchError},
    table::Table,
    util::http,
};

#[derive(Serialize, Deserialize, Debug)]
struct VariationResponse {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub stat: Option<String>,
    pub fields: Option<Vec<String>>,
    pub data: Option<Vec<Vec<String>>>,
}

/// 集中市場漲跌證券數統計的查詢結果
#[derive(Debug)]
pub struct VariationDataset {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub stat: Option<String>,
    pub table: Table,
}

impl VariationDataset {
    /// 報表抬頭：title 與 subtitle 以「 - 」串接，皆為空白時使用預設名稱。
    pub fn display_title(&self) -> String {
        let parts: Vec<&str> = [self.title.as_deref(), self.subtitle.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            "台灣證券交易所資料".to_string()
        } else {
            parts.join(" - ")
        }
    }

    /// 資料的日期與時間，空白的部分略過。
    pub fn timestamp(&self) -> String {
        [self.date.as_deref(), self.time.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<&str>>()
            .join(" ")
    }

    /// 狀態列：資料筆數，stat 有內容時附註在後。
    pub fn status_line(&self) -> String {
        let mut parts = vec![format!("資料筆數：{} 筆", self.table.rows.len())];

        if let Some(stat) = self.stat.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            parts.push(stat.to_string());
        }

        parts.join(" | ")
    }
}

/// 抓取集中市場漲跌證券數統計
pub async fn visit() -> Result<VariationDataset, FetchError> {
    let url = format!("https://www.{}/rwd/zh/variation/TWT84U?response=json", twse::HOST);
    let res = http::get_use_json::<VariationResponse>(&url, Some(twse::build_headers())).await?;
    let fields = res.fields.ok_or(FetchError::MissingField("fields"))?;
    let data = res.data.ok_or(FetchError::MissingField("data"))?;

    Ok(VariationDataset {
        table: Table::from_response(&fields, &data),
        title: res.title,
        subtitle: res.subtitle,
        date: res.date,
        time: res.time,
        stat: res.stat,
    })
}

#[cfg(test)]
mod tests {
    use crate::logging;

    use super::*;

    fn dataset() -> VariationDataset {
        VariationDataset {
            title: Some("113年08月29日 大盤統計資訊".to_string()),
            subtitle: Some(" 漲跌證券數 ".to_string()),
            date: Some("20240829".to_string()),
            time: Some("15:00:00".to_string()),
            stat: Some("OK".to_string()),
            table: Table::from_response(
                &["證券代號".to_string(), "證券名稱".to_string()],
                &[vec!["2330".to_string(), "台積電".to_string()]],
            ),
        }
    }

    #[test]
    fn test_display_title_joins_non_blank_parts() {
        let mut data = dataset();
        assert_eq!(
            data.display_title(),
            "113年08月29日 大盤統計資訊 - 漲跌證券數"
        );

        data.subtitle = Some("   ".to_string());
        assert_eq!(data.display_title(), "113年08月29日 大盤統計資訊");

        data.title = None;
        assert_eq!(data.display_title(), "台灣證券交易所資料");
    }

    #[test]
    fn test_timestamp_skips_blank_parts() {
        let mut data = dataset();
        assert_eq!(data.timestamp(), "20240829 15:00:00");

        data.time = None;
        assert_eq!(data.timestamp(), "20240829");

        data.date = Some(String::new());
        assert_eq!(data.timestamp(), "");
    }

    #[test]
    fn test_status_line_appends_stat_when_present() {
        let mut data = dataset();
        assert_eq!(data.status_line(), "資料筆數：1 筆 | OK");

        data.stat = None;
        assert_eq!(data.status_line(), "資料筆數：1 筆");
    }

    #[tokio::test]
    #[ignore]
    async fn test_visit() {
        logging::info_console("開始 visit".to_string());

        match visit().await {
            Ok(dataset) => {
                logging::info_console(format!(
                    "{} {} {}",
                    dataset.display_title(),
                    dataset.timestamp(),
                    dataset.status_line()
                ));
            }
            Err(why) => {
                logging::error_console(format!("Failed to visit because: {:?}", why));
            }
        }

        logging::info_console("結束 visit".to_string());
    }
}
