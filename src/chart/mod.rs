/// 折線圖幾何計算
pub mod layout;
/// 自資料列取出可繪圖的點
pub mod point;
/// 將幾何結果畫成終端機文字
pub mod render;
