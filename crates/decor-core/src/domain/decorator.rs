//! Decorator - 1 つの component を包み、固定の寄与を足す
//!
//! # 学習ポイント
//! - 所有権による「包む対象は必ず存在する」保証（null チェック不要）
//! - ジェネリック `Decorator<C>` による静的ディスパッチ
//! - 副作用（battle cry）を計算経路から分離し、`Herald` 経由でのみ外に出す

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::component::{BoxedComponent, Component};
use super::joiner::Joiner;
use super::magnitude::Magnitude;
use crate::ports::Herald;

/// Layer は 1 つのデコレータが足す固定の寄与（delta と suffix）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer<V> {
    /// registry で引くときの名前（例: `"Milk"`）
    pub label: Cow<'static, str>,
    pub delta: V,
    pub suffix: Cow<'static, str>,
    #[serde(default)]
    pub joiner: Joiner,
    /// 副作用アクションで発する言葉（無ければ何もしない）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cry: Option<Cow<'static, str>>,
}

impl<V: Magnitude> Layer<V> {
    pub fn new(
        label: impl Into<Cow<'static, str>>,
        delta: V,
        suffix: impl Into<Cow<'static, str>>,
        joiner: Joiner,
    ) -> Self {
        Self {
            label: label.into(),
            delta,
            suffix: suffix.into(),
            joiner,
            cry: None,
        }
    }

    pub fn with_cry<S>(mut self, cry: Option<S>) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.cry = cry.map(Into::into);
        self
    }

    /// `inner` の所有権を受け取って包む
    pub fn wrap<C>(self, inner: C) -> Decorator<C>
    where
        C: Component<Value = V>,
    {
        Decorator::new(inner, self)
    }
}

/// Decorator は包んだ component を排他的に所有する
///
/// # 不変条件
/// - 内側の component は構築時に決まり、差し替える手段はない
/// - `value()` / `description()` は呼ばれるたびに内側から計算し直す
///   （内側の値を書き換えないので、何度評価しても同じ結果）
#[derive(Debug, Clone, PartialEq)]
pub struct Decorator<C: Component> {
    inner: C,
    layer: Layer<C::Value>,
}

impl<C: Component> Decorator<C> {
    pub fn new(inner: C, layer: Layer<C::Value>) -> Self {
        Self { inner, layer }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn layer(&self) -> &Layer<C::Value> {
        &self.layer
    }

    /// この layer を捨てて、包んでいた component を返す
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// cry を持っていれば herald に伝え、何か発したかどうかを返す
    ///
    /// `value()` / `description()` からは決して呼ばれない
    pub fn battle_cry<H: Herald + ?Sized>(&self, herald: &H) -> bool {
        match &self.layer.cry {
            Some(cry) => {
                herald.announce(&self.description(), cry);
                true
            }
            None => false,
        }
    }
}

impl<C: Component + 'static> Decorator<C> {
    pub fn boxed(self) -> BoxedComponent<C::Value> {
        Box::new(self)
    }
}

impl<C: Component> Component for Decorator<C> {
    type Value = C::Value;

    fn value(&self) -> C::Value {
        self.inner.value() + self.layer.delta
    }

    fn description(&self) -> String {
        self.layer
            .joiner
            .join(self.inner.description(), &self.layer.suffix)
    }

    fn depth(&self) -> usize {
        self.inner.depth() + 1
    }
}
