//! App - アプリケーション層
//!
//! domain / typed / ports を組み合わせて Facade を提供します。
//!
//! # 主要コンポーネント
//! - **WorkshopBuilder**: Workshop の構築とワイヤリング
//! - **Workshop**: base 検索・ornament 解決・評価・Receipt 発行をまとめた Facade

pub mod builder;
pub mod workshop;

pub use self::builder::WorkshopBuilder;
pub use self::workshop::Workshop;
