//! 型付きフィールド値
//! core: ディスパッチ機構、types: 種別ごとの実装

pub mod core;
pub mod types;
