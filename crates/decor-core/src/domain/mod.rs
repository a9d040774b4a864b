//! Domain - 数値属性・component・decorator・評価・menu・receipt のモデル

pub mod component;
pub mod decorator;
pub mod errors;
pub mod evaluation;
pub mod ids;
pub mod joiner;
pub mod magnitude;
pub mod menu;
pub mod receipt;
pub mod recipe;

pub use component::{Base, BoxedComponent, Component};
pub use decorator::{Decorator, Layer};
pub use errors::{DecorError, Result};
pub use evaluation::{Evaluation, evaluate};
pub use ids::ReceiptId;
pub use joiner::Joiner;
pub use magnitude::{Health, Magnitude, Price};
pub use menu::{BaseEntry, Menu, OrnamentEntry};
pub use receipt::Receipt;
pub use recipe::Recipe;
