//! コーヒーの例 - セント単位の価格を足し、suffix を `", "` で並べる

use crate::domain::{Base, Joiner, Price};
use crate::typed::Ornament;

pub const SIMPLE_COFFEE: &str = "SimpleCoffee";

pub fn simple_coffee() -> Base<Price> {
    Base::new(SIMPLE_COFFEE, "Coffee", Price::from_cents(100))
}

pub struct Milk;

impl Ornament for Milk {
    type Value = Price;
    const NAME: &'static str = "Milk";
    const SUFFIX: &'static str = "Milk";
    const JOINER: Joiner = Joiner::List;

    fn delta() -> Price {
        Price::from_cents(50)
    }
}

pub struct Whip;

impl Ornament for Whip {
    type Value = Price;
    const NAME: &'static str = "Whip";
    const SUFFIX: &'static str = "Whip";
    const JOINER: Joiner = Joiner::List;

    fn delta() -> Price {
        Price::from_cents(70)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Component;
    use rstest::rstest;

    #[test]
    fn milk_then_whip() {
        let coffee = simple_coffee();
        assert_eq!(coffee.value(), Price::from_cents(100));
        assert_eq!(coffee.description(), "Coffee");

        let with_milk = Milk::decorate(coffee);
        assert_eq!(with_milk.value(), Price::from_cents(150));
        assert_eq!(with_milk.description(), "Coffee, Milk");

        let with_whip = Whip::decorate(with_milk);
        assert_eq!(with_whip.value(), Price::from_cents(220));
        assert_eq!(with_whip.value().to_string(), "2.20");
        assert_eq!(with_whip.description(), "Coffee, Milk, Whip");
    }

    #[rstest]
    #[case::milk_first(true, "Coffee, Milk, Whip")]
    #[case::whip_first(false, "Coffee, Whip, Milk")]
    fn order_changes_description_not_price(#[case] milk_first: bool, #[case] expected: &str) {
        let chain = if milk_first {
            Whip::decorate(Milk::decorate(simple_coffee())).boxed()
        } else {
            Milk::decorate(Whip::decorate(simple_coffee())).boxed()
        };

        assert_eq!(chain.value(), Price::from_cents(220));
        assert_eq!(chain.description(), expected);
    }
}
