#[cfg(test)]
use monadic::{Functor, Monad, PartiallyApplied};
use monadic::{Either, Maybe};
use proptest::prelude::*;
#[cfg(test)]
use std::cell::Cell;

pub type Step = fn(i32) -> Maybe<i32>;
pub type EitherStep = fn(i32) -> Either<String, i32>;

pub fn arb_maybe() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![
        3 => any::<i32>().prop_map(Maybe::of),
        1 => Just(Maybe::Nothing),
    ]
}

pub fn arb_either() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        3 => any::<i32>().prop_map(Either::of),
        1 => "[a-z]{0,8}".prop_map(Either::Left),
    ]
}

fn succ(n: i32) -> Maybe<i32> {
    Maybe::of(n.wrapping_add(1))
}

fn halve(n: i32) -> Maybe<i32> {
    if n % 2 == 0 {
        Maybe::of(n / 2)
    } else {
        Maybe::nothing()
    }
}

fn triple(n: i32) -> Maybe<i32> {
    Maybe::of(n.wrapping_mul(3))
}

fn vanish(_: i32) -> Maybe<i32> {
    Maybe::nothing()
}

pub fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(succ as Step),
        Just(halve as Step),
        Just(triple as Step),
        Just(vanish as Step),
    ]
}

fn succ_or_err(n: i32) -> Either<String, i32> {
    succ(n).ok_or("succ".to_string())
}

fn halve_or_err(n: i32) -> Either<String, i32> {
    halve(n).ok_or("odd".to_string())
}

fn reject(_: i32) -> Either<String, i32> {
    Either::Left("rejected".to_string())
}

pub fn arb_either_step() -> impl Strategy<Value = EitherStep> {
    prop_oneof![
        Just(succ_or_err as EitherStep),
        Just(halve_or_err as EitherStep),
        Just(reject as EitherStep),
    ]
}

#[cfg(test)]
proptest! {
    #[test]
    fn maybe_map_applies(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_mul(7);
        prop_assert_eq!(Maybe::of(x).map(f).get_or_else(0), f(x));
    }

    #[test]
    fn maybe_functor_identity(m in arb_maybe()) {
        prop_assert_eq!(m.map(|x| x), m);
    }

    #[test]
    fn maybe_functor_composition(m in arb_maybe()) {
        let f = |n: i32| n.wrapping_add(3);
        let g = |n: i32| n.wrapping_mul(5);
        prop_assert_eq!(m.map(f).map(g), m.map(|x| g(f(x))));
    }

    #[test]
    fn nothing_never_calls(fallback in any::<i32>()) {
        let calls = Cell::new(0);
        let out = Maybe::<i32>::nothing().map(|n| {
            calls.set(calls.get() + 1);
            n
        });
        prop_assert_eq!(out.get_or_else(fallback), fallback);
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn maybe_left_identity(x in any::<i32>(), f in arb_step()) {
        prop_assert_eq!(Maybe::of(x).chain(f), f(x));
    }

    #[test]
    fn maybe_right_identity(m in arb_maybe()) {
        prop_assert_eq!(m.chain(Maybe::of), m);
    }

    #[test]
    fn maybe_associativity(m in arb_maybe(), f in arb_step(), g in arb_step()) {
        prop_assert_eq!(m.chain(f).chain(g), m.chain(|x| f(x).chain(g)));
    }

    #[test]
    fn maybe_trait_agrees(m in arb_maybe(), f in arb_step()) {
        type M = Maybe<PartiallyApplied>;
        prop_assert_eq!(<M as Monad>::bind(m, f), m.chain(f));
        prop_assert_eq!(<M as Functor>::fmap(m, |x| x), m);
        prop_assert_eq!(<M as Monad>::join(<M as Monad>::pure(m)), m);
    }

    #[test]
    fn maybe_aliases_agree(m in arb_maybe(), f in arb_step()) {
        let g = |n: i32| n.wrapping_sub(4);
        prop_assert_eq!(m.fmap(g), m.map(g));
        prop_assert_eq!(m.bind(f), m.chain(f));
    }

    #[test]
    fn either_of_is_right(x in any::<i32>()) {
        let e: Either<String, i32> = Either::of(x);
        prop_assert!(e.is_right());
        prop_assert!(!e.is_left());
    }

    #[test]
    fn left_fmap_never_calls(err in ".*") {
        let calls = Cell::new(0);
        let e: Either<String, i32> = Either::Left(err.clone());
        let out = e.fmap(|n| {
            calls.set(calls.get() + 1);
            n
        });
        prop_assert_eq!(out, Either::Left(err));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn left_chain_never_calls(err in ".*") {
        let calls = Cell::new(0);
        let e: Either<String, i32> = Either::Left(err.clone());
        let out = e.chain(|n| {
            calls.set(calls.get() + 1);
            Either::of(n)
        });
        prop_assert_eq!(out, Either::Left(err));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn right_fmap_applies(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_sub(9);
        let e: Either<String, i32> = Either::of(x);
        prop_assert_eq!(e.fmap(f), Either::Right(f(x)));
    }

    #[test]
    fn right_chain_is_exactly_f(x in any::<i32>(), f in arb_either_step()) {
        let e: Either<String, i32> = Either::of(x);
        prop_assert_eq!(e.chain(f), f(x));
    }

    #[test]
    fn either_right_identity(e in arb_either()) {
        prop_assert_eq!(e.clone().chain(Either::of), e);
    }

    #[test]
    fn either_associativity(e in arb_either(), f in arb_either_step(), g in arb_either_step()) {
        prop_assert_eq!(
            e.clone().chain(f).chain(g),
            e.chain(|x| f(x).chain(g))
        );
    }

    #[test]
    fn either_trait_left_identity(x in any::<i32>(), f in arb_either_step()) {
        type E = Either<String, PartiallyApplied>;
        prop_assert_eq!(<E as Monad>::bind(<E as Monad>::pure(x), f), f(x));
    }

    #[test]
    fn either_trait_right_identity(e in arb_either()) {
        type E = Either<String, PartiallyApplied>;
        prop_assert_eq!(<E as Monad>::bind(e.clone(), <E as Monad>::pure), e);
    }

    #[test]
    fn either_trait_associativity(e in arb_either(), f in arb_either_step(), g in arb_either_step()) {
        type E = Either<String, PartiallyApplied>;
        prop_assert_eq!(
            <E as Monad>::bind(<E as Monad>::bind(e.clone(), f), g),
            <E as Monad>::bind(e, |x| <E as Monad>::bind(f(x), g))
        );
    }

    #[test]
    fn either_trait_fmap_agrees(e in arb_either()) {
        type E = Either<String, PartiallyApplied>;
        let f = |n: i32| n.wrapping_mul(11);
        prop_assert_eq!(<E as Functor>::fmap(e.clone(), f), e.fmap(f));
    }

    #[test]
    fn vec_associativity(xs in proptest::collection::vec(0u8..4, 0..6)) {
        type V = Vec<PartiallyApplied>;
        let f = |n: u8| vec![n; n as usize];
        let g = |n: u8| vec![n, n.wrapping_add(1)];
        prop_assert_eq!(
            V::bind(V::bind(xs.clone(), f), g),
            V::bind(xs, |x| V::bind(f(x), g))
        );
    }
}
