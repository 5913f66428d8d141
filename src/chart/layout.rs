use chrono::NaiveDate;
use rust_decimal::{prelude::ToPrimitive, Decimal};

use super::point::ChartPoint;

/// 折線圖的可見狀態：有效點不足兩個（或畫布沒有面積）時沒有可畫的東西。
#[derive(Debug, Clone, PartialEq)]
pub enum ChartScene {
    Empty,
    Rendered(ChartLayout),
}

/// 一次繪製所需的全部幾何資料，座標原點在左上角。
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    /// 依日期順序的折線頂點
    pub vertices: Vec<(f64, f64)>,
    /// 左邊與下緣的座標軸線
    pub axes: [Segment; 2],
    pub low: Marker,
    pub high: Marker,
    pub min_close: f64,
    pub max_close: f64,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Low,
    High,
}

impl MarkerKind {
    pub fn label(&self) -> &'static str {
        match self {
            MarkerKind::Low => "低",
            MarkerKind::High => "高",
        }
    }
}

/// 最低或最高收盤價的標記
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub x: f64,
    pub y: f64,
    pub close: Decimal,
}

impl Marker {
    /// 例︰低:98.5
    pub fn label_text(&self) -> String {
        format!("{}:{}", self.kind.label(), format_price(self.close.to_f64().unwrap_or_default()))
    }
}

impl ChartLayout {
    /// 例︰收盤價範圍：100 ~ 102.5 | 期間：01/02 - 01/31
    pub fn summary(&self) -> String {
        format!(
            "收盤價範圍：{} ~ {} | 期間：{} - {}",
            format_price(self.min_close),
            format_price(self.max_close),
            self.first_date.format("%m/%d"),
            self.last_date.format("%m/%d")
        )
    }
}

/// 由繪圖點計算折線、座標軸與高低點標記。
///
/// 每次呼叫都重新計算（畫布大小改變時由呼叫端再叫一次）。
/// 收盤價全部相同時將範圍上下各擴 1，避免除以零的比例。
pub fn layout(points: &[ChartPoint], width: f64, height: f64) -> ChartScene {
    let valid: Vec<(&ChartPoint, f64)> = points
        .iter()
        .filter_map(|point| {
            point
                .close
                .to_f64()
                .filter(|close| close.is_finite())
                .map(|close| (point, close))
        })
        .collect();

    if valid.len() < 2 || width <= 0.0 || height <= 0.0 {
        return ChartScene::Empty;
    }

    let mut min_close = f64::INFINITY;
    let mut max_close = f64::NEG_INFINITY;
    for (_, close) in &valid {
        min_close = min_close.min(*close);
        max_close = max_close.max(*close);
    }

    if (max_close - min_close).abs() < f64::EPSILON {
        max_close += 1.0;
        min_close -= 1.0;
    }

    let last = valid.len() - 1;
    let project = |index: usize, close: f64| -> (f64, f64) {
        // 最後一點釘在右緣，避免寬度除不盡時的累積誤差
        let x = if index == last {
            width
        } else {
            index as f64 * (width / last as f64)
        };
        let normalized = (close - min_close) / (max_close - min_close);

        (x, height - normalized * height)
    };

    let vertices: Vec<(f64, f64)> = valid
        .iter()
        .enumerate()
        .map(|(index, (_, close))| project(index, *close))
        .collect();

    // 同值時取最先出現的那一點
    let mut low_index = 0;
    let mut high_index = 0;
    for (index, (_, close)) in valid.iter().enumerate() {
        if *close < valid[low_index].1 {
            low_index = index;
        }
        if *close > valid[high_index].1 {
            high_index = index;
        }
    }

    let marker = |kind: MarkerKind, index: usize| -> Marker {
        let (x, y) = project(index, valid[index].1);
        Marker {
            kind,
            x,
            y,
            close: valid[index].0.close,
        }
    };

    ChartScene::Rendered(ChartLayout {
        width,
        height,
        vertices,
        axes: [
            Segment { x1: 0.0, y1: 0.0, x2: 0.0, y2: height },
            Segment { x1: 0.0, y1: height, x2: width, y2: height },
        ],
        low: marker(MarkerKind::Low, low_index),
        high: marker(MarkerKind::High, high_index),
        min_close,
        max_close,
        first_date: valid[0].0.date,
        last_date: valid[last].0.date,
    })
}

fn format_price(value: f64) -> String {
    let text = format!("{:.2}", value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
