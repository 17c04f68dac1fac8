use std::fmt;

use crate::either::Either;
use crate::functor::{Functor, Monad, PartiallyApplied};

/// An optional value: either `Just` some payload or `Nothing`.
///
/// Absence is its own variant, so wrapping `0`, `""` or `false` still yields a present value.
///
/// ```rust
/// # use monadic::Maybe;
/// let yell = |s: &str| format!("{s}!");
///
/// assert_eq!(Maybe::of("hi").map(yell).get_or_else(":(".to_string()), "hi!");
/// assert_eq!(Maybe::<&str>::nothing().map(yell).get_or_else(":(".to_string()), ":(");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<A> {
    Just(A),
    Nothing,
}

impl<A> Maybe<A> {
    /// "lifts" a value into the Maybe context, a.k.a. `return`
    pub fn of(a: A) -> Self {
        Maybe::Just(a)
    }

    pub fn nothing() -> Self {
        Maybe::Nothing
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    pub fn is_just(&self) -> bool {
        !self.is_nothing()
    }

    /// Apply `f` to the wrapped value. `f` is never called on `Nothing`.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Maybe<B> {
        match self {
            Maybe::Just(a) => Maybe::of(f(a)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    #[inline]
    pub fn fmap<B>(self, f: impl FnOnce(A) -> B) -> Maybe<B> {
        self.map(f)
    }

    /// map then join, a.k.a. `bind` or `flat_map`
    pub fn chain<B>(self, f: impl FnOnce(A) -> Maybe<B>) -> Maybe<B> {
        self.map(f).join()
    }

    #[inline]
    pub fn bind<B>(self, f: impl FnOnce(A) -> Maybe<B>) -> Maybe<B> {
        self.chain(f)
    }

    pub fn get_or_else(self, fallback: A) -> A {
        match self {
            Maybe::Just(a) => a,
            Maybe::Nothing => fallback,
        }
    }

    /// like `get_or_else`, but the fallback is only computed on `Nothing`
    pub fn get_or_else_with(self, fallback: impl FnOnce() -> A) -> A {
        match self {
            Maybe::Just(a) => a,
            Maybe::Nothing => fallback(),
        }
    }

    pub fn as_ref(&self) -> Maybe<&A> {
        match self {
            Maybe::Just(a) => Maybe::Just(a),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Attach an explanation to absence, turning this into an [`Either`].
    pub fn ok_or<L>(self, left: L) -> Either<L, A> {
        match self {
            Maybe::Just(a) => Either::of(a),
            Maybe::Nothing => Either::Left(left),
        }
    }
}

impl<A> Maybe<Maybe<A>> {
    /// flattens exactly one level of nesting
    pub fn join(self) -> Maybe<A> {
        match self {
            Maybe::Just(inner) => inner,
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(opt: Option<A>) -> Self {
        match opt {
            Some(a) => Maybe::Just(a),
            None => Maybe::Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(m: Maybe<A>) -> Self {
        match m {
            Maybe::Just(a) => Some(a),
            Maybe::Nothing => None,
        }
    }
}

// inspect
impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Just(a) => write!(f, "Just({a})"),
            Maybe::Nothing => f.write_str("Nothing"),
        }
    }
}

impl Functor for Maybe<PartiallyApplied> {
    type Layer<X> = Maybe<X>;

    #[inline(always)]
    fn fmap<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> B) -> Self::Layer<B> {
        input.map(f)
    }
}

impl Monad for Maybe<PartiallyApplied> {
    fn pure<A>(a: A) -> Self::Layer<A> {
        Maybe::of(a)
    }

    fn bind<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> Self::Layer<B>) -> Self::Layer<B> {
        input.chain(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn falsy_payloads_are_present() {
        assert!(Maybe::of(0).is_just());
        assert!(Maybe::of("").is_just());
        assert!(Maybe::of(false).is_just());
        assert_eq!(Maybe::of(0).get_or_else(7), 0);
    }

    #[test]
    fn map_skips_nothing() {
        let calls = Cell::new(0);
        let out = Maybe::<i32>::nothing().map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(out, Maybe::Nothing);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn chain_skips_nothing() {
        let calls = Cell::new(0);
        let out = Maybe::<i32>::nothing().chain(|n| {
            calls.set(calls.get() + 1);
            Maybe::of(n)
        });
        assert!(out.is_nothing());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn join_flattens_one_level() {
        assert_eq!(Maybe::of(Maybe::of(3)).join(), Maybe::of(3));
        assert_eq!(Maybe::of(Maybe::<i32>::nothing()).join(), Maybe::Nothing);
        assert_eq!(Maybe::<Maybe<i32>>::nothing().join(), Maybe::Nothing);
        // only one level
        assert_eq!(
            Maybe::of(Maybe::of(Maybe::of(1))).join(),
            Maybe::of(Maybe::of(1))
        );
    }

    #[test]
    fn chain_can_fail_midway() {
        let half = |n: i32| {
            if n % 2 == 0 {
                Maybe::of(n / 2)
            } else {
                Maybe::nothing()
            }
        };
        assert_eq!(Maybe::of(8).chain(half).chain(half), Maybe::of(2));
        assert_eq!(Maybe::of(6).chain(half).chain(half), Maybe::Nothing);
    }

    #[test]
    fn fallback_is_lazy() {
        let calls = Cell::new(0);
        let fallback = || {
            calls.set(calls.get() + 1);
            0
        };
        assert_eq!(Maybe::of(5).get_or_else_with(fallback), 5);
        assert_eq!(calls.get(), 0);
        assert_eq!(Maybe::nothing().get_or_else_with(fallback), 0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn option_round_trip() {
        assert_eq!(Maybe::from(Some(1)), Maybe::of(1));
        assert_eq!(Maybe::<u8>::from(None), Maybe::Nothing);
        assert_eq!(Option::from(Maybe::of('x')), Some('x'));
    }

    #[test]
    fn as_ref_borrows() {
        let owned = Maybe::of(String::from("abc"));
        assert_eq!(owned.as_ref().map(|s| s.len()), Maybe::of(3));
        assert_eq!(owned, Maybe::of("abc".to_string()));
    }

    #[test]
    fn ok_or_explains_absence() {
        assert_eq!(Maybe::of(1).ok_or("missing"), Either::Right(1));
        assert_eq!(Maybe::<i32>::nothing().ok_or("missing"), Either::Left("missing"));
    }

    #[test]
    fn default_is_nothing() {
        assert_eq!(Maybe::<String>::default(), Maybe::Nothing);
        assert_eq!(Maybe::<u8>::default().get_or_else(9), 9);
    }

    #[test]
    fn inspect() {
        assert_eq!(Maybe::of(42).to_string(), "Just(42)");
        assert_eq!(Maybe::<u8>::nothing().to_string(), "Nothing");
    }
}
