//! Evaluator - チェーンの先頭から最終結果を読み出す
//!
//! # 学習ポイント
//! - `?Sized` 境界で `dyn Component` もそのまま受け取る
//! - 評価は純粋関数（状態を持たず、チェーンも変更しない）

use serde::{Deserialize, Serialize};

use super::component::Component;

/// チェーンを評価した結果のスナップショット
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation<V> {
    pub value: V,
    pub description: String,
    /// base の上に積まれたデコレータの数
    pub depth: usize,
}

/// チェーンの先頭を評価する（内側から順に解決される）
pub fn evaluate<C>(chain: &C) -> Evaluation<C::Value>
where
    C: Component + ?Sized,
{
    Evaluation {
        value: chain.value(),
        description: chain.description(),
        depth: chain.depth(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::component::{Base, BoxedComponent};
    use crate::domain::decorator::Layer;
    use crate::domain::joiner::Joiner;
    use crate::domain::magnitude::Health;

    #[test]
    fn evaluating_a_base() {
        let elf = Base::named("Elf", Health(5));
        let ev = evaluate(&elf);
        assert_eq!(ev.value, Health(5));
        assert_eq!(ev.description, "Elf");
        assert_eq!(ev.depth, 0);
    }

    #[test]
    fn evaluating_a_boxed_chain() {
        let chain: BoxedComponent<Health> = Layer::new("Warlord", Health(50), " Warlord", Joiner::Concat)
            .wrap(Base::named("Elf", Health(5)))
            .boxed();

        let ev = evaluate(&chain);
        assert_eq!(ev.value, Health(55));
        assert_eq!(ev.description, "Elf Warlord");
        assert_eq!(ev.depth, 1);
        assert_eq!(evaluate(&chain), ev);
    }

    #[test]
    fn evaluation_serializes() {
        let ev = evaluate(&Base::named("Orc", Health(10)));
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["value"], 10);
        assert_eq!(json["description"], "Orc");
    }
}
