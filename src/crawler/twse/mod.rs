use reqwest::header::HeaderMap;

/// 上市個股日成交資訊
pub mod stock_day;
/// 集中市場當日市場成交統計（大盤漲跌證券數）
pub mod variation;

const HOST: &str = "twse.com.tw";

/// 證交所要求的桌面瀏覽器標頭，缺少時部分端點會拒絕請求。
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

pub(crate) fn build_headers() -> HeaderMap {
    let mut h = HeaderMap::with_capacity(3);
    h.insert("User-Agent", USER_AGENT.parse().unwrap());
    h.insert("Accept-Language", "zh-TW,zh;q=0.9".parse().unwrap());
    h.insert("Referer", "https://www.twse.com.tw/".parse().unwrap());
    h
}
