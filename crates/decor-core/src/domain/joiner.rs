//! Joiner - suffix を内側の説明文につなぐ区切り
//!
//! # 学習ポイント
//! - `#[serde(rename_all = "snake_case")]` による enum の外部表現
//! - `#[default]` 属性による Default の導出
//!
//! キャラクターは suffix を直接連結し（`"Orc Warlord"`）、
//! コーヒーはカンマ区切りで並べます（`"Coffee, Milk"`）。
//! 2 つの振る舞いは独立した variant として残しています。

use serde::{Deserialize, Serialize};

/// 内側の説明文とデコレータの suffix の間に置く区切り
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joiner {
    /// 区切りなし
    Concat,

    /// `", "`
    #[default]
    List,

    Custom(String),
}

impl Joiner {
    pub fn as_str(&self) -> &str {
        match self {
            Joiner::Concat => "",
            Joiner::List => ", ",
            Joiner::Custom(sep) => sep.as_str(),
        }
    }

    /// `inner` を消費してバッファを再利用し、末尾に区切りと `suffix` を足す
    pub fn join(&self, mut inner: String, suffix: &str) -> String {
        inner.push_str(self.as_str());
        inner.push_str(suffix);
        inner
    }
}
