//! WorkshopBuilder - Workshop の構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//! - 開発体験の改善（明確なエラーメッセージ）

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::workshop::Workshop;
use crate::domain::{Base, DecorError, Layer, Magnitude, Menu, Result};
use crate::ports::{Clock, SystemClock};
use crate::typed::{Ornament, OrnamentRegistry, lookup_key};

/// WorkshopBuilder は Workshop を構築
///
/// # 使用例
/// ```ignore
/// let shop = WorkshopBuilder::new()
///     .base(simple_coffee())
///     .ornament::<Milk>()?
///     .expect_ornaments(&["Milk", "Whip"])
///     .build()?; // Whip が無いので Err(MissingOrnaments)
/// ```
///
/// # Fail-fast 設計
/// - 同名の base / ornament は登録時点でエラー
/// - expect_ornaments() の期待集合が登録済み集合に含まれているかを build() でチェック
pub struct WorkshopBuilder<V: Magnitude> {
    bases: Vec<Base<V>>,
    registry: OrnamentRegistry<V>,
    expected: Option<Vec<String>>,
    clock: Arc<dyn Clock>,
}

impl<V: Magnitude> WorkshopBuilder<V> {
    pub fn new() -> Self {
        Self {
            bases: Vec::new(),
            registry: OrnamentRegistry::new(),
            expected: None,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn base(mut self, base: Base<V>) -> Self {
        self.bases.push(base);
        self
    }

    pub fn ornament<T: Ornament<Value = V>>(mut self) -> Result<Self> {
        self.registry.register::<T>()?;
        Ok(self)
    }

    pub fn layer(mut self, layer: Layer<V>) -> Result<Self> {
        self.registry.register_layer(layer)?;
        Ok(self)
    }

    /// `menu` の base と ornament をすべて追加
    pub fn menu(mut self, menu: &Menu<V>) -> Result<Self> {
        self.bases.extend(menu.base_components());
        for layer in menu.layers() {
            self.registry.register_layer(layer)?;
        }
        Ok(self)
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn expect_ornaments(mut self, names: &[&str]) -> Self {
        self.expected = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn build(self) -> Result<Workshop<V>> {
        if let Some(expected) = &self.expected {
            let missing: Vec<String> = expected
                .iter()
                .filter(|name| !self.registry.contains(name))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(DecorError::MissingOrnaments(missing));
            }
        }

        let mut bases = HashMap::with_capacity(self.bases.len());
        for base in self.bases {
            let key = lookup_key(&base.name);
            if bases.contains_key(&key) {
                return Err(DecorError::AlreadyRegistered(base.name.into_owned()));
            }
            bases.insert(key, base);
        }

        debug!(
            bases = bases.len(),
            ornaments = self.registry.len(),
            "workshop built"
        );
        Ok(Workshop::new(bases, self.registry, self.clock))
    }
}

impl<V: Magnitude> Default for WorkshopBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Health, Price};
    use crate::samples::character::{Epic, Warlord, orc};
    use crate::samples::coffee::{Milk, simple_coffee};

    #[test]
    fn build_with_everything_expected() {
        let workshop = WorkshopBuilder::new()
            .base(orc())
            .ornament::<Warlord>()
            .unwrap()
            .ornament::<Epic>()
            .unwrap()
            .expect_ornaments(&["Warlord", "epic"])
            .build()
            .unwrap();

        assert_eq!(workshop.base_names(), vec!["Orc"]);
        assert_eq!(workshop.ornament_names(), vec!["Epic", "Warlord"]);
    }

    #[test]
    fn missing_expected_ornaments_fail_the_build() {
        let result = WorkshopBuilder::<Price>::new()
            .base(simple_coffee())
            .ornament::<Milk>()
            .unwrap()
            .expect_ornaments(&["Milk", "Whip", "Caramel"])
            .build();

        match result {
            Err(DecorError::MissingOrnaments(missing)) => {
                assert_eq!(missing, vec!["Whip", "Caramel"]);
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("build should fail"),
        }
    }

    #[test]
    fn duplicate_bases_are_rejected() {
        let result = WorkshopBuilder::<Health>::new()
            .base(orc())
            .base(Base::named("ORC", Health(1)))
            .build();
        assert!(matches!(result, Err(DecorError::AlreadyRegistered(name)) if name == "ORC"));
    }

    #[test]
    fn padded_base_names_clash_with_trimmed_ones() {
        let result = WorkshopBuilder::<Price>::new()
            .base(Base::named("Tea", Price::from_cents(80)))
            .base(Base::named(" tea ", Price::from_cents(90)))
            .build();
        assert!(matches!(result, Err(DecorError::AlreadyRegistered(name)) if name == " tea "));
    }

    #[test]
    fn padded_base_names_are_still_found() {
        let workshop = WorkshopBuilder::<Price>::new()
            .base(Base::named(" Tea ", Price::from_cents(80)))
            .build()
            .unwrap();
        let ev = workshop.evaluate(&crate::domain::Recipe::new("tea")).unwrap();
        assert_eq!(ev.value, Price::from_cents(80));
    }

    #[test]
    fn duplicate_ornaments_are_rejected_at_registration() {
        let result = WorkshopBuilder::<Health>::new()
            .ornament::<Warlord>()
            .unwrap()
            .ornament::<Warlord>();
        assert!(matches!(result, Err(DecorError::AlreadyRegistered(_))));
    }
}
