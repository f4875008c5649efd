//! Algebraic laws the combinator protocol commits to preserving

use optionals::{Optional, Outcome, Validation};
use proptest::prelude::*;

fn halve(v: i32) -> Optional<i32> {
    if v % 2 == 0 {
        Optional::some(v / 2)
    } else {
        Optional::none()
    }
}

fn triple(v: i32) -> Optional<i32> {
    Optional::some(v.wrapping_mul(3))
}

fn validation(success: bool, v: i32, tag: String) -> Validation<i32, String> {
    if success {
        Validation::success(v)
    } else {
        Validation::failure(tag)
    }
}

proptest! {
    #[test]
    fn optional_of_matches_presence(x in proptest::option::of(any::<i32>())) {
        prop_assert_eq!(Optional::of(x).is_some(), x.is_some());
        prop_assert_eq!(Optional::of(x).is_none(), x.is_none());
    }

    #[test]
    fn optional_map_identity(v in any::<i32>()) {
        prop_assert_eq!(Optional::some(v).map(|x| x), Optional::some(v));
    }

    #[test]
    fn optional_flat_map_associativity(x in proptest::option::of(any::<i32>())) {
        let left = Optional::of(x).flat_map(halve).flat_map(triple);
        let right = Optional::of(x).flat_map(|v| halve(v).flat_map(triple));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn optional_or_is_left_biased_on_some(v in any::<i32>(), w in any::<i32>()) {
        prop_assert_eq!(Optional::some(v).or(Optional::some(w)), Optional::some(v));
        prop_assert_eq!(Optional::none().or(Optional::some(w)), Optional::some(w));
    }

    #[test]
    fn outcome_flat_map_associativity(v in any::<i32>(), ok in any::<bool>()) {
        let base = || -> Outcome<i32, String> {
            if ok { Outcome::ok(v) } else { Outcome::err("boom".to_string()) }
        };
        let f = |x: i32| -> Outcome<i32, String> {
            if x % 3 == 0 { Outcome::err("mod3".to_string()) } else { Outcome::ok(x.wrapping_add(1)) }
        };
        let g = |x: i32| -> Outcome<i32, String> { Outcome::ok(x.wrapping_mul(2)) };

        let left = base().flat_map(f).flat_map(g);
        let right = base().flat_map(|x| f(x).flat_map(g));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn outcome_round_trips_through_optionals(v in any::<i32>()) {
        let ok_side = Outcome::<i32, String>::ok(v).get_ok();
        prop_assert!(ok_side.has_value(&v));
        prop_assert!(Outcome::<i32, String>::ok(v).get_err().is_none());
    }

    #[test]
    fn validation_assert_is_associative(
        (a_ok, a_v) in (any::<bool>(), any::<i32>()),
        (b_ok, b_v) in (any::<bool>(), any::<i32>()),
        (c_ok, c_v) in (any::<bool>(), any::<i32>()),
    ) {
        let a = || validation(a_ok, a_v, "a".to_string());
        let b = || validation(b_ok, b_v, "b".to_string());
        let c = || validation(c_ok, c_v, "c".to_string());

        let left = a().assert(b()).assert(c());
        let right = a().assert(b().assert(c()));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn validation_accumulates_left_to_right(tags in proptest::collection::vec("[a-z]{1,4}", 1..6)) {
        let mut chain = Validation::<i32, String>::failure(tags[0].clone());
        for tag in &tags[1..] {
            chain = chain.assert(Validation::failure(tag.clone()));
        }
        prop_assert_eq!(chain.get_failure().to_vec(), vec![tags]);
    }
}

#[test]
fn validation_accumulation_order_is_exact() {
    let combined = Validation::<i32, &str>::failure("a")
        .assert(Validation::failure("b"))
        .assert(Validation::failure("c"));
    assert_eq!(combined.get_failure().to_vec(), vec![vec!["a", "b", "c"]]);
}

#[test]
fn validation_success_right_side_wins() {
    let out = Validation::<i32, &str>::success(1).assert(Validation::success(2));
    assert!(out.get_success().has_value(&2));
}
