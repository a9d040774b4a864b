//! Ornament trait - 型付きデコレータの定義
//!
//! # 学習ポイント
//! - Associated Constants (`const NAME`, `const SUFFIX`, ...)
//! - Object-safe trait (`DynOrnament`) への型消去
//!   (`TypedOrnament<T>` → `dyn DynOrnament<V>`)

use std::marker::PhantomData;

use crate::domain::{BoxedComponent, Component, Decorator, Joiner, Layer, Magnitude};

/// Ornament は「名前・増分・接尾辞」をコンパイル時に決める
///
/// # 使用例
/// ```ignore
/// struct Milk;
///
/// impl Ornament for Milk {
///     type Value = Price;
///     const NAME: &'static str = "Milk";
///     const SUFFIX: &'static str = "Milk";
///     fn delta() -> Price { Price::from_cents(50) }
/// }
///
/// let latte = Milk::decorate(simple_coffee());
/// ```
pub trait Ornament: Send + Sync + 'static {
    type Value: Magnitude;

    const NAME: &'static str;

    const SUFFIX: &'static str;

    const JOINER: Joiner = Joiner::List;

    /// 副作用で発する言葉。明示的に呼ばれた時だけ使われる
    const CRY: Option<&'static str> = None;

    fn delta() -> Self::Value;

    fn layer() -> Layer<Self::Value> {
        Layer::new(Self::NAME, Self::delta(), Self::SUFFIX, Self::JOINER).with_cry(Self::CRY)
    }

    fn decorate<C>(inner: C) -> Decorator<C>
    where
        C: Component<Value = Self::Value>,
    {
        Decorator::new(inner, Self::layer())
    }
}

/// DynOrnament は object-safe な Ornament
///
/// `OrnamentRegistry` の `HashMap<String, Arc<dyn DynOrnament<V>>>` に格納するための形です。
/// 設定ファイル由来の `Layer<V>` もこの trait を実装します。
pub trait DynOrnament<V: Magnitude>: Send + Sync {
    fn name(&self) -> &str;

    fn cry(&self) -> Option<&str>;

    fn wrap_dyn(&self, inner: BoxedComponent<V>) -> BoxedComponent<V>;
}

pub struct TypedOrnament<T: Ornament> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Ornament> TypedOrnament<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Ornament> Default for TypedOrnament<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ornament> DynOrnament<T::Value> for TypedOrnament<T> {
    fn name(&self) -> &str {
        T::NAME
    }

    fn cry(&self) -> Option<&str> {
        T::CRY
    }

    fn wrap_dyn(&self, inner: BoxedComponent<T::Value>) -> BoxedComponent<T::Value> {
        T::decorate(inner).boxed()
    }
}

impl<V: Magnitude> DynOrnament<V> for Layer<V> {
    fn name(&self) -> &str {
        &self.label
    }

    fn cry(&self) -> Option<&str> {
        self.cry.as_deref()
    }

    fn wrap_dyn(&self, inner: BoxedComponent<V>) -> BoxedComponent<V> {
        self.clone().wrap(inner).boxed()
    }
}
