//! Component - 数値属性と説明文を公開する能力
//!
//! # 学習ポイント
//! - Associated Type (`type Value`)
//! - `Box<dyn Component<Value = V>>` に対するブランケット実装
//!   （静的なチェーンと実行時に組み立てたチェーンを同じ trait で扱える）

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::magnitude::Magnitude;

/// Component は「数値」と「説明文」を返す
///
/// 実装は不変（immutable）であることが前提です。
/// 同じチェーンを何度評価しても同じ結果になります。
pub trait Component: Send + Sync {
    type Value: Magnitude;

    fn value(&self) -> Self::Value;

    fn description(&self) -> String;

    /// base の上に積まれたデコレータの数
    fn depth(&self) -> usize {
        0
    }
}

/// 実行時に組み立てたチェーン（名前や menu から）
pub type BoxedComponent<V> = Box<dyn Component<Value = V>>;

impl<C: Component + ?Sized> Component for Box<C> {
    type Value = C::Value;

    fn value(&self) -> Self::Value {
        (**self).value()
    }

    fn description(&self) -> String {
        (**self).description()
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }
}

/// base component。固定の値を返し、何も包まない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Base<V> {
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub value: V,
}

impl<V: Magnitude> Base<V> {
    /// 説明文が名前と同じ base（例: `"Orc"`）
    pub fn named(name: impl Into<Cow<'static, str>>, value: V) -> Self {
        let name = name.into();
        Self {
            description: name.clone(),
            name,
            value,
        }
    }

    pub fn new(
        name: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        value: V,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            value,
        }
    }

    pub fn boxed(self) -> BoxedComponent<V> {
        Box::new(self)
    }
}

impl<V: Magnitude> Component for Base<V> {
    type Value = V;

    fn value(&self) -> V {
        self.value
    }

    fn description(&self) -> String {
        self.description.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::magnitude::{Health, Price};

    #[test]
    fn base_returns_its_literals() {
        let orc = Base::named("Orc", Health(10));
        assert_eq!(orc.value(), Health(10));
        assert_eq!(orc.description(), "Orc");
        assert_eq!(orc.depth(), 0);
    }

    #[test]
    fn base_description_can_differ_from_name() {
        let coffee = Base::new("SimpleCoffee", "Coffee", Price::from_cents(100));
        assert_eq!(coffee.name, "SimpleCoffee");
        assert_eq!(coffee.description(), "Coffee");
    }

    #[test]
    fn boxed_component_delegates() {
        let boxed: BoxedComponent<Health> = Base::named("Elf", Health(5)).boxed();
        assert_eq!(boxed.value(), Health(5));
        assert_eq!(boxed.description(), "Elf");
    }
}
