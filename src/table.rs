use std::collections::HashMap;

/// 欄名去重後的不可變表格，每一列的儲存格數固定等於欄位數。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// 依照回應的 fields 與 data 建立表格。
    ///
    /// 資料列比欄位短時補上空字串，多出來的儲存格則捨棄。
    pub fn from_response(fields: &[String], data: &[Vec<String>]) -> Self {
        let columns = normalize_columns(fields);
        let rows = data.iter().map(|row| map_row(&columns, row)).collect();

        Table { columns, rows }
    }

    /// 先找欄名完全相同的欄位；找不到時改找「原欄名＋數字序號」的欄位，
    /// 因為重複的欄名經過 normalize_columns 後會帶上序號。
    pub fn find_column(&self, name: &str) -> Option<usize> {
        if let Some(index) = self.columns.iter().position(|column| column == name) {
            return Some(index);
        }

        self.columns.iter().position(|column| {
            column
                .strip_prefix(name)
                .is_some_and(|suffix| !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()))
        })
    }
}

/// 重複的欄名為每一個出現處加上 1 起算的序號（包含第一個），
/// 只出現一次的欄名保持原樣。例︰["A","A","B"] => ["A1","A2","B"]
pub fn normalize_columns(fields: &[String]) -> Vec<String> {
    let mut totals: HashMap<&str, usize> = HashMap::with_capacity(fields.len());
    for field in fields {
        *totals.entry(field.as_str()).or_insert(0) += 1;
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    fields
        .iter()
        .map(|field| {
            if totals[field.as_str()] > 1 {
                let occurrence = seen.entry(field.as_str()).or_insert(0);
                *occurrence += 1;
                format!("{}{}", field, occurrence)
            } else {
                field.clone()
            }
        })
        .collect()
}

fn map_row(columns: &[String], row: &[String]) -> Vec<String> {
    (0..columns.len())
        .map(|i| row.get(i).cloned().unwrap_or_default())
        .collect()
}
