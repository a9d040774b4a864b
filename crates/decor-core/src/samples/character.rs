//! キャラクターの例 - 体力を足し、suffix を区切りなしで連結する

use crate::domain::{Base, Health, Joiner};
use crate::typed::Ornament;

pub const ORC: &str = "Orc";
pub const ELF: &str = "Elf";

pub fn orc() -> Base<Health> {
    Base::named(ORC, Health(10))
}

pub fn elf() -> Base<Health> {
    Base::named(ELF, Health(5))
}

/// すべての base キャラクター（順序は固定）
pub fn roster() -> Vec<Base<Health>> {
    vec![orc(), elf()]
}

/// 体力 +50。battle cry を持つ唯一のランク
pub struct Warlord;

impl Ornament for Warlord {
    type Value = Health;
    const NAME: &'static str = "Warlord";
    const SUFFIX: &'static str = " Warlord";
    const JOINER: Joiner = Joiner::Concat;
    const CRY: Option<&'static str> = Some("Waaagh!");

    fn delta() -> Health {
        Health(50)
    }
}

/// 体力 +30。何度でも重ねられる
pub struct Epic;

impl Ornament for Epic {
    type Value = Health;
    const NAME: &'static str = "Epic";
    const SUFFIX: &'static str = " (Epic)";
    const JOINER: Joiner = Joiner::Concat;

    fn delta() -> Health {
        Health(30)
    }
}
