//! Workshop - Facade
//!
//! 呼び出し側は「base の名前」と「ornament の名前の列」だけを渡します。
//! base の検索、registry からの ornament 解決、チェーンの組み立て、評価、
//! Receipt の発行はすべてこの中に隠れています。

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::builder::WorkshopBuilder;
use crate::domain::{
    Base, BoxedComponent, Component, DecorError, Evaluation, Health, Magnitude, Menu, Price,
    Receipt, Recipe, Result, evaluate,
};
use crate::ports::{Clock, Herald};
use crate::samples::character::{self, Epic, Warlord};
use crate::samples::coffee::{self, Milk, Whip};
use crate::typed::{OrnamentRegistry, lookup_key};

pub struct Workshop<V: Magnitude> {
    bases: HashMap<String, Base<V>>,
    registry: OrnamentRegistry<V>,
    clock: Arc<dyn Clock>,
}

impl<V: Magnitude> Workshop<V> {
    pub(crate) fn new(
        bases: HashMap<String, Base<V>>,
        registry: OrnamentRegistry<V>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            bases,
            registry,
            clock,
        }
    }

    pub fn builder() -> WorkshopBuilder<V> {
        WorkshopBuilder::new()
    }

    pub fn from_menu(menu: &Menu<V>) -> Result<Self> {
        WorkshopBuilder::new().menu(menu)?.build()
    }

    fn base(&self, name: &str) -> Result<&Base<V>> {
        self.bases
            .get(&lookup_key(name))
            .ok_or_else(|| DecorError::UnknownBase(name.to_string()))
    }

    /// `recipe` のとおりにチェーンを組み立てる
    ///
    /// base が未知なら何も包む前に、ornament は最初の未知の名前で失敗する
    pub fn craft(&self, recipe: &Recipe) -> Result<BoxedComponent<V>> {
        let mut chain = self.base(&recipe.base)?.clone().boxed();
        for name in &recipe.ornaments {
            chain = self.registry.apply(name, chain)?;
        }

        debug!(base = %recipe.base, ornaments = ?recipe.ornaments, "crafted chain");
        Ok(chain)
    }

    pub fn evaluate(&self, recipe: &Recipe) -> Result<Evaluation<V>> {
        let chain = self.craft(recipe)?;
        Ok(evaluate(&chain))
    }

    /// 組み立て・評価して、clock の時刻で Receipt を発行する
    pub fn order(&self, recipe: Recipe) -> Result<Receipt<V>> {
        let evaluation = self.evaluate(&recipe)?;
        Ok(Receipt::issue(recipe, evaluation, self.clock.now()))
    }

    /// `recipe` 内の cry を持つ ornament に、内側から順に発言させる
    ///
    /// 戻り値は発言した数。speaker はその ornament を包んだ直後のチェーン。
    /// 最初の発言より前にすべての名前を解決するので、
    /// 組み立てに失敗する recipe は herald に何も届けない
    pub fn rally<H: Herald + ?Sized>(&self, recipe: &Recipe, herald: &H) -> Result<usize> {
        let mut chain = self.base(&recipe.base)?.clone().boxed();
        let ornaments = recipe
            .ornaments
            .iter()
            .map(|name| {
                self.registry
                    .get(name)
                    .ok_or_else(|| DecorError::UnknownOrnament(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut spoken = 0;
        for ornament in ornaments {
            chain = ornament.wrap_dyn(chain);
            if let Some(cry) = ornament.cry() {
                herald.announce(&chain.description(), cry);
                spoken += 1;
            }
        }
        Ok(spoken)
    }

    /// base 名（ソート済み）
    pub fn base_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bases.values().map(|b| b.name.to_string()).collect();
        names.sort();
        names
    }

    pub fn ornament_names(&self) -> Vec<String> {
        self.registry.registered_names()
    }
}

impl Workshop<Price> {
    /// SimpleCoffee と Milk / Whip
    pub fn coffee_shop() -> Result<Self> {
        WorkshopBuilder::new()
            .base(coffee::simple_coffee())
            .ornament::<Milk>()?
            .ornament::<Whip>()?
            .build()
    }
}

impl Workshop<Health> {
    /// Orc / Elf と Warlord / Epic
    pub fn barracks() -> Result<Self> {
        character::roster()
            .into_iter()
            .fold(WorkshopBuilder::new(), WorkshopBuilder::base)
            .ornament::<Warlord>()?
            .ornament::<Epic>()?
            .build()
    }
}
