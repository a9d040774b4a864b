//! Receipt - Workshop が注文に対して発行する控え
//!
//! # 学習ポイント
//! - 型付き ID（`ReceiptId`）と `DateTime<Utc>` を持つシリアライズ可能な記録
//! - 時刻は引数で受け取る（Clock port 経由で注入し、テストで固定できる）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::evaluation::Evaluation;
use super::ids::ReceiptId;
use super::recipe::Recipe;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt<V> {
    pub id: ReceiptId,
    pub issued_at: DateTime<Utc>,
    pub recipe: Recipe,
    pub value: V,
    pub description: String,
}

impl<V> Receipt<V> {
    /// 評価結果を写し取り、新しい ID を振って発行する
    pub fn issue(recipe: Recipe, evaluation: Evaluation<V>, issued_at: DateTime<Utc>) -> Self {
        Self {
            id: ReceiptId::new(),
            issued_at,
            recipe,
            value: evaluation.value,
            description: evaluation.description,
        }
    }
}
