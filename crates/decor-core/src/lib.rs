//! decor-core
//!
//! Decorator と Facade の二つのパターンを、小さく型付けされたライブラリとして実装します。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（magnitude, component, decorator, evaluation, menu, receipt, errors）
//! - **ports**: 抽象化レイヤー（Clock, Herald）
//! - **impls**: ports の実装（WriterHerald, RecordingHerald）
//! - **typed**: 型付き Ornament API（Ornament trait, DynOrnament, OrnamentRegistry）
//! - **samples**: キャラクターとコーヒーの定番例
//! - **app**: Facade（Workshop, WorkshopBuilder）
//!
//! # 例
//! ```
//! use decor_core::domain::{Component, Price};
//! use decor_core::samples::coffee::{simple_coffee, Milk, Whip};
//! use decor_core::typed::Ornament;
//!
//! let coffee = Whip::decorate(Milk::decorate(simple_coffee()));
//! assert_eq!(coffee.value(), Price::from_cents(220));
//! assert_eq!(coffee.description(), "Coffee, Milk, Whip");
//! ```

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod samples;
pub mod typed;
