//! OrnamentRegistry - Ornament の登録と管理
//!
//! # 学習ポイント
//! - HashMap での型消去された trait object の管理
//! - Generic methods での登録と型安全性
//! - Arc による共有所有権

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::ornament::{DynOrnament, Ornament, TypedOrnament};
use crate::domain::{BoxedComponent, DecorError, Layer, Magnitude, Result};

/// OrnamentRegistry は名前から Ornament を引けるようにする
///
/// # 使用例
/// ```ignore
/// let mut registry = OrnamentRegistry::new();
/// registry.register::<Milk>()?;
///
/// let latte = registry.apply("milk", coffee.boxed())?;
/// ```
///
/// # 内部実装
/// - キーは小文字化した名前（検索は大文字小文字を区別しない）
/// - 値は `Arc<dyn DynOrnament<V>>`
pub struct OrnamentRegistry<V: Magnitude> {
    ornaments: HashMap<String, Arc<dyn DynOrnament<V>>>,
}

/// 検索用のキー。base と ornament の両方で同じ正規化を使う
pub(crate) fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl<V: Magnitude> OrnamentRegistry<V> {
    pub fn new() -> Self {
        Self {
            ornaments: HashMap::new(),
        }
    }

    pub fn register<T: Ornament<Value = V>>(&mut self) -> Result<()> {
        self.insert(Arc::new(TypedOrnament::<T>::new()))
    }

    /// 実行時に組み立てた layer（menu 由来など）を登録
    pub fn register_layer(&mut self, layer: Layer<V>) -> Result<()> {
        self.insert(Arc::new(layer))
    }

    fn insert(&mut self, ornament: Arc<dyn DynOrnament<V>>) -> Result<()> {
        let name = ornament.name().to_string();
        let k = lookup_key(&name);
        if self.ornaments.contains_key(&k) {
            return Err(DecorError::AlreadyRegistered(name));
        }
        debug!(ornament = %name, "registered ornament");
        self.ornaments.insert(k, ornament);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn DynOrnament<V>>> {
        self.ornaments.get(&lookup_key(name)).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ornaments.contains_key(&lookup_key(name))
    }

    /// `name` の ornament で `chain` を包む
    pub fn apply(&self, name: &str, chain: BoxedComponent<V>) -> Result<BoxedComponent<V>> {
        let ornament = self
            .get(name)
            .ok_or_else(|| DecorError::UnknownOrnament(name.to_string()))?;
        Ok(ornament.wrap_dyn(chain))
    }

    /// 表示名（ソート済み）
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .ornaments
            .values()
            .map(|o| o.name().to_string())
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.ornaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ornaments.is_empty()
    }
}

impl<V: Magnitude> Default for OrnamentRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Base, Component, Joiner, Price};
    use crate::samples::coffee::{Milk, Whip};

    fn coffee() -> BoxedComponent<Price> {
        Base::new("SimpleCoffee", "Coffee", Price::from_cents(100)).boxed()
    }

    #[test]
    fn register_and_apply() {
        let mut registry = OrnamentRegistry::new();
        registry.register::<Milk>().unwrap();

        let latte = registry.apply("Milk", coffee()).unwrap();
        assert_eq!(latte.value(), Price::from_cents(150));
        assert_eq!(latte.description(), "Coffee, Milk");
    }

    #[test]
    fn lookup_ignores_case() {
        let mut registry = OrnamentRegistry::new();
        registry.register::<Whip>().unwrap();
        assert!(registry.contains("whip"));
        assert!(registry.contains(" WHIP "));
        assert!(registry.get("wHiP").is_some());
    }

    #[test]
    fn double_registration_is_rejected() {
        let mut registry = OrnamentRegistry::new();
        registry.register::<Milk>().unwrap();

        let clash = Layer::new("milk", Price::from_cents(10), "milk", Joiner::List);
        let result = registry.register_layer(clash);
        assert!(matches!(result, Err(DecorError::AlreadyRegistered(name)) if name == "milk"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_ornament_fails_immediately() {
        let registry = OrnamentRegistry::<Price>::new();
        assert!(registry.is_empty());
        let result = registry.apply("Sprinkles", coffee());
        assert!(matches!(result, Err(DecorError::UnknownOrnament(name)) if name == "Sprinkles"));
    }

    #[test]
    fn registered_names_are_sorted() {
        let mut registry = OrnamentRegistry::new();
        registry.register::<Whip>().unwrap();
        registry.register::<Milk>().unwrap();
        registry
            .register_layer(Layer::new("Caramel", Price::from_cents(60), "Caramel", Joiner::List))
            .unwrap();

        assert_eq!(registry.registered_names(), vec!["Caramel", "Milk", "Whip"]);
    }
}
