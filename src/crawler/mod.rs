use thiserror::Error;

/// 台灣證券交易所
pub mod twse;

/// 抓取遠端資料時的失敗分類。
///
/// 個別儲存格解析失敗不在此列：無法解析的資料列只會被略過，不會中斷整個查詢。
#[derive(Debug, Error)]
pub enum FetchError {
    /// 連線失敗或遠端回應非 2xx 狀態
    #[error("failed to fetch from remote site: {0}")]
    Transport(#[from] reqwest::Error),
    /// 回應內容不是預期形狀的 JSON
    #[error("failed to parse response JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// 回應缺少必要欄位
    #[error("response is missing the `{0}` field")]
    MissingField(&'static str),
    /// 證交所回傳未成功的狀態
    #[error("{0}")]
    Stat(String),
}
