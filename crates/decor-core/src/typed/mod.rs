//! Typed - 型付き Ornament API
//!
//! # 構成
//! - **ornament**: `Ornament` trait（コンパイル時に決まるデコレータ）と `DynOrnament`（型消去）
//! - **registry**: `OrnamentRegistry`（名前 → `Arc<dyn DynOrnament<V>>`）

pub mod ornament;
pub mod registry;

pub use self::ornament::{DynOrnament, Ornament, TypedOrnament};
pub use self::registry::OrnamentRegistry;
pub(crate) use self::registry::lookup_key;
