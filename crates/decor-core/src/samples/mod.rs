//! Samples - 二つの定番例（キャラクターとコーヒー）
//!
//! 区切り文字の違い（キャラクターは無し、コーヒーは `", "`）はそのまま残しています。

pub mod character;
pub mod coffee;

pub use self::character::{Epic, Warlord};
pub use self::coffee::{Milk, Whip};
