//! Magnitude - 数値属性（体力・価格）の型付け
//!
//! # 学習ポイント
//! - Newtype パターン（`Health(u32)`, `Price { cents }`）
//! - 演算子オーバーロード（`std::ops::Add`）
//! - `#[serde(try_from/into)]` による文字列表現でのシリアライズ
//!
//! 価格は浮動小数点ではなくセント単位の整数で保持します。
//! `1.00 + 0.50 + 0.70` が必ず `2.20` になることを保証するためです。

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::errors::DecorError;

/// Magnitude はデコレータが加算していく数値属性
///
/// # Trait Bounds
/// - `Copy + Add`: 内側の値に delta を足して新しい値を作るため（元の値は変更しない）
/// - `Default`: 加算の単位元（ゼロ）。`#[serde(default)]` を持つ `Menu<V>` の復元にも必要
/// - `Serialize + DeserializeOwned`: Menu / Receipt で扱うため
/// - `Send + Sync + 'static`: チェーンを複数スレッドから評価できるようにするため
pub trait Magnitude:
    Copy
    + Add<Output = Self>
    + Default
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
}

/// キャラクターの体力
///
/// 加算は `u32::MAX` で飽和するので、どんなチェーンでも失敗しない
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Health(pub u32);

impl Add for Health {
    type Output = Health;

    fn add(self, rhs: Health) -> Health {
        Health(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Magnitude for Health {}

/// セント単位の正確な金額
///
/// 小数 2 桁の文字列（例: `"2.20"`）としてシリアライズされる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    cents: i64,
}

impl Price {
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Price {
    type Err = DecorError;

    /// `"2"` / `"2.2"` / `"2.20"` を受け付ける（小数部は 1〜2 桁）
    ///
    /// `"1."` のように小数点の後に数字が無いものは拒否する
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DecorError::InvalidPrice(s.to_string());

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, frac) = match digits.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some(parts) => parts,
            None => (digits, ""),
        };

        if whole.is_empty() || frac.len() > 2 {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(invalid)?;

        Ok(Price::from_cents(if negative { -cents } else { cents }))
    }
}

impl TryFrom<String> for Price {
    type Error = DecorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

impl Magnitude for Price {}
