//! Recipe - 名前だけで表したチェーンの注文書
//!
//! base の名前と、内側から順に並べた ornament の名前の列を持ちます。
//! 実際の組み立ては Workshop が行います。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub base: String,

    /// 包む順に並べた ornament 名（先頭が base を直接包む）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ornaments: Vec<String>,
}

impl Recipe {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ornaments: Vec::new(),
        }
    }

    pub fn with(mut self, ornament: impl Into<String>) -> Self {
        self.ornaments.push(ornament.into());
        self
    }
}
