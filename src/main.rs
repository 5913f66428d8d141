use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Local;

use crate::{crawler::twse, table::Table};

pub mod chart;
pub mod crawler;
pub mod logging;
pub mod table;
pub mod util;

/// 終端機折線圖的畫布大小
const CHART_COLUMNS: usize = 72;
const CHART_ROWS: usize = 16;

#[tokio::main]
async fn main() -> Result<()> {
    let mut variation = load_variation().await;
    let stdin = io::stdin();

    loop {
        print!("輸入證券代號查詢日成交資訊（Enter 重新整理，q 離開）：");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => variation = load_variation().await,
            "q" | "Q" => break,
            stock_no => show_stock_day(stock_no, variation.as_ref()).await,
        }
    }

    Ok(())
}

/// 載入集中市場漲跌證券數統計並顯示成表格。
/// 失敗時清空目前的畫面狀態，只留下一行錯誤訊息。
async fn load_variation() -> Option<twse::variation::VariationDataset> {
    println!("載入中…");

    match twse::variation::visit().await {
        Ok(dataset) => {
            println!();
            println!("{}", dataset.display_title());

            let timestamp = dataset.timestamp();
            if !timestamp.is_empty() {
                println!("{}", timestamp);
            }

            print_table(&dataset.table);
            println!("{}", dataset.status_line());
            println!();

            logging::info_file_async(format!(
                "variation loaded, {} rows",
                dataset.table.rows.len()
            ));

            Some(dataset)
        }
        Err(why) => {
            logging::error_file_async(format!("Failed to load variation because {:?}", why));
            println!("載入失敗：{}", why);
            None
        }
    }
}

/// 載入個股的日成交資訊：表格、附註與收盤價折線圖。
async fn show_stock_day(stock_no: &str, variation: Option<&twse::variation::VariationDataset>) {
    println!("正在載入 {} 的日成交資料…", stock_no);

    match twse::stock_day::visit(Local::now().date_naive(), stock_no).await {
        Ok(dataset) => {
            let display_title = match variation.and_then(|v| stock_name(&v.table, stock_no)) {
                Some(name) => format!("{} {}", stock_no, name),
                None => stock_no.to_string(),
            };

            println!();
            println!("{} 日成交資訊", display_title);

            if let Some(title) = dataset.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
                println!("{}", title);
            }

            if let Some(date) = dataset.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
                println!("資料日期：{}", date);
            }

            print_table(&dataset.table);

            let status = dataset.status_line();
            if !status.is_empty() {
                println!("{}", status);
            }

            println!();
            for line in chart::render::render_text(&dataset.points, CHART_COLUMNS, CHART_ROWS) {
                println!("{}", line);
            }
            println!();

            logging::info_file_async(format!(
                "stock day {} loaded, {} rows, {} chart points",
                stock_no,
                dataset.table.rows.len(),
                dataset.points.len()
            ));
        }
        Err(why) => {
            logging::error_file_async(format!(
                "Failed to load stock day for {} because {:?}",
                stock_no, why
            ));
            println!("載入 {} 資料時發生錯誤：{}", stock_no, why);
        }
    }
}

/// 從漲跌統計表中找出證券代號對應的證券名稱。
fn stock_name(table: &Table, stock_no: &str) -> Option<String> {
    let code_column = table.find_column("證券代號")?;
    let name_column = table.find_column("證券名稱")?;

    table
        .rows
        .iter()
        .find(|row| row.get(code_column).map(|cell| cell.trim() == stock_no).unwrap_or(false))
        .and_then(|row| row.get(name_column))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

fn print_table(table: &Table) {
    println!("{}", table.columns.join(" | "));
    for row in &table.rows {
        println!("{}", row.join(" | "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_name_uses_suffixed_columns() {
        let table = Table::from_response(
            &[
                "證券代號".to_string(),
                "證券名稱".to_string(),
                "證券代號".to_string(),
            ],
            &[vec![
                "2330".to_string(),
                " 台積電 ".to_string(),
                "2317".to_string(),
            ]],
        );

        assert_eq!(stock_name(&table, "2330"), Some("台積電".to_string()));
        assert_eq!(stock_name(&table, "9999"), None);
    }
}
