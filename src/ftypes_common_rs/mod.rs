//! フィールド値レイヤ
//! 種別レジストリ・値・スライス範囲・設定とログ

pub mod ftypes;
pub mod dfilter;
pub mod utils;
