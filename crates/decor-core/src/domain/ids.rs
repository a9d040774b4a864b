//! ID - 型付き識別子
//!
//! # ULID + Phantom Type
//! `Id<T>` は ULID を包むジェネリック型で、`T` は実行時に使わないマーカー型です。
//! 新しい ID 種別はマーカー型を 1 つ足すだけで増やせます。
//! ULID は生成順にソートできるので、発行した Receipt を時系列に並べられます。
//! `#[serde(transparent)]` により JSON では ULID の文字列そのものになります。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// IdMarker は Display で使うプレフィックスを提供
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn new() -> Self {
        Self::from_ulid(Ulid::new())
    }

    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }
}

impl<T: IdMarker> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

/// Receipt のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Receipt {}

impl IdMarker for Receipt {
    fn prefix() -> &'static str {
        "receipt-"
    }
}

/// Workshop が発行した Receipt の ID
pub type ReceiptId = Id<Receipt>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_prefix() {
        let id = ReceiptId::new();
        assert!(id.to_string().starts_with("receipt-"));
    }

    #[test]
    fn ids_are_sortable_by_creation_time() {
        let first = ReceiptId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = ReceiptId::new();
        assert!(first < second);
    }

    #[test]
    fn serialize_roundtrip() {
        let ulid = Ulid::new();
        let id = ReceiptId::from_ulid(ulid);
        let s = serde_json::to_string(&id).unwrap();
        assert_eq!(s, format!("\"{ulid}\""));
        assert!(serde_json::to_value(id).unwrap().is_string());

        let back: ReceiptId = serde_json::from_str(&s).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn phantom_marker_is_free() {
        assert_eq!(std::mem::size_of::<ReceiptId>(), std::mem::size_of::<Ulid>());
    }
}
