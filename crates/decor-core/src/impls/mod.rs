//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **WriterHerald**: 任意の writer（標準出力など）へ 1 行ずつ出力
//! - **RecordingHerald**: テスト用（発言を記録）

pub mod herald;

pub use self::herald::{Announcement, RecordingHerald, WriterHerald};
