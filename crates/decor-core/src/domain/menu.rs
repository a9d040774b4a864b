//! Menu - JSON ファイルから読み込む base と ornament の一覧
//!
//! # 学習ポイント
//! - `#[serde(default)]` と `Option` による省略可能なフィールド
//! - `Magnitude` でジェネリックな設定（価格でも体力でも同じ形）
//! - I/O と JSON のエラーを `?` で `DecorError` に変換
//!
//! ```json
//! {
//!   "joiner": "list",
//!   "bases": [{ "name": "SimpleCoffee", "description": "Coffee", "value": "1.00" }],
//!   "ornaments": [{ "name": "Milk", "delta": "0.50" }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::component::Base;
use super::decorator::Layer;
use super::errors::Result;
use super::joiner::Joiner;
use super::magnitude::Magnitude;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu<V> {
    /// 自前の joiner を持たない ornament が使う区切り
    #[serde(default)]
    pub joiner: Joiner,

    pub bases: Vec<BaseEntry<V>>,

    #[serde(default)]
    pub ornaments: Vec<OrnamentEntry<V>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseEntry<V> {
    pub name: String,

    /// 省略時は `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub value: V,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrnamentEntry<V> {
    pub name: String,

    pub delta: V,

    /// 省略時は `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joiner: Option<Joiner>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cry: Option<String>,
}

impl<V: Magnitude> Menu<V> {
    /// JSON 文字列から読み込む
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// ファイルから読み込む（読めなければ `Io`、壊れていれば `Json`）
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn base_components(&self) -> impl Iterator<Item = Base<V>> + '_ {
        self.bases.iter().map(|entry| {
            let description = entry.description.clone().unwrap_or_else(|| entry.name.clone());
            Base::new(entry.name.clone(), description, entry.value)
        })
    }

    pub fn layers(&self) -> impl Iterator<Item = Layer<V>> + '_ {
        self.ornaments.iter().map(|entry| {
            let suffix = entry.suffix.clone().unwrap_or_else(|| entry.name.clone());
            let joiner = entry.joiner.clone().unwrap_or_else(|| self.joiner.clone());
            Layer::new(entry.name.clone(), entry.delta, suffix, joiner).with_cry(entry.cry.clone())
        })
    }
}
