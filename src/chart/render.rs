use super::{
    layout::{self, ChartLayout, ChartScene, Marker, MarkerKind, Segment},
    point::ChartPoint,
};

const EMPTY_MESSAGE: &str = "（有效資料不足，無法繪製圖表）";

const AXIS_GLYPH: char = '·';
const LINE_GLYPH: char = '─';
const VERTEX_GLYPH: char = '●';
const LOW_GLYPH: char = '▼';
const HIGH_GLYPH: char = '▲';

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

#[derive(Clone, Copy)]
struct Cell {
    glyph: char,
    color: Option<&'static str>,
}

impl Cell {
    const BLANK: Cell = Cell { glyph: ' ', color: None };
}

/// 將繪圖點畫成 columns × rows 的文字畫布，最後附上收盤價範圍摘要。
/// 幾何全部交給 [`layout::layout`]；沒有可畫的東西時回傳單行提示。
pub fn render_text(points: &[ChartPoint], columns: usize, rows: usize) -> Vec<String> {
    if columns < 2 || rows < 2 {
        return vec![EMPTY_MESSAGE.to_string()];
    }

    match layout::layout(points, (columns - 1) as f64, (rows - 1) as f64) {
        ChartScene::Empty => vec![EMPTY_MESSAGE.to_string()],
        ChartScene::Rendered(chart) => {
            let mut lines = rasterize(&chart, columns, rows);
            lines.push(chart.summary());
            lines
        }
    }
}

fn rasterize(chart: &ChartLayout, columns: usize, rows: usize) -> Vec<String> {
    let mut grid = vec![vec![Cell::BLANK; columns]; rows];

    for segment in &chart.axes {
        draw_segment(&mut grid, segment, AXIS_GLYPH, None);
    }

    for pair in chart.vertices.windows(2) {
        let segment = Segment { x1: pair[0].0, y1: pair[0].1, x2: pair[1].0, y2: pair[1].1 };
        draw_segment(&mut grid, &segment, LINE_GLYPH, None);
    }

    for (x, y) in &chart.vertices {
        put(&mut grid, *x, *y, VERTEX_GLYPH, None);
    }

    draw_marker(&mut grid, &chart.low);
    draw_marker(&mut grid, &chart.high);

    grid.into_iter().map(render_line).collect()
}

fn draw_segment(grid: &mut [Vec<Cell>], segment: &Segment, glyph: char, color: Option<&'static str>) {
    let dx = segment.x2 - segment.x1;
    let dy = segment.y2 - segment.y1;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        put(grid, segment.x1 + dx * t, segment.y1 + dy * t, glyph, color);
    }
}

fn draw_marker(grid: &mut [Vec<Cell>], marker: &Marker) {
    let (glyph, color) = match marker.kind {
        MarkerKind::Low => (LOW_GLYPH, ANSI_RED),
        MarkerKind::High => (HIGH_GLYPH, ANSI_GREEN),
    };

    put(grid, marker.x, marker.y, glyph, Some(color));

    // 標籤放在標記的右上方，超出畫布的部分截掉
    let row = (marker.y.round().max(0.0) as usize)
        .saturating_sub(1)
        .min(grid.len() - 1);
    let start = marker.x.round().max(0.0) as usize + 2;
    for (offset, ch) in marker.label_text().chars().enumerate() {
        match grid[row].get_mut(start + offset) {
            Some(cell) => *cell = Cell { glyph: ch, color: Some(color) },
            None => break,
        }
    }
}

fn put(grid: &mut [Vec<Cell>], x: f64, y: f64, glyph: char, color: Option<&'static str>) {
    let row = (y.round().max(0.0) as usize).min(grid.len() - 1);
    let column = (x.round().max(0.0) as usize).min(grid[row].len() - 1);
    grid[row][column] = Cell { glyph, color };
}

fn render_line(cells: Vec<Cell>) -> String {
    let mut line = String::with_capacity(cells.len() * 4);

    for cell in cells {
        match cell.color {
            Some(color) => {
                line.push_str(color);
                line.push(cell.glyph);
                line.push_str(ANSI_RESET);
            }
            None => line.push(cell.glyph),
        }
    }

    line.trim_end().to_string()
}
