//! Ports - 抽象化レイヤー
//!
//! 計算経路の外にあるもの（時刻、副作用の出口）をここで trait にしておきます。
//! 実装は impls に置きます。

pub mod clock;
pub mod herald;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::herald::Herald;
