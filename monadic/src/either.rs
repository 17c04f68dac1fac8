use std::fmt;

use crate::functor::{Functor, Monad, PartiallyApplied};
use crate::maybe::Maybe;

/// The result of a computation that either succeeded (`Right`) or failed (`Left`) with some
/// explanation of why.
///
/// `Left` is absorbing: `fmap`, `chain` and `join` pass it through untouched and never call
/// the supplied function.
///
/// ```rust
/// # use monadic::Either;
/// type ParseError = &'static str;
///
/// fn parse(s: &str) -> Either<ParseError, i64> {
///     Either::from(s.parse::<i64>().map_err(|_| "not a number"))
/// }
///
/// assert_eq!(parse("20").fmap(|n| n + 1), Either::Right(21));
/// assert_eq!(parse("xx").fmap(|n| n + 1), Either::Left("not a number"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// lifts a value into `Right`
    pub fn of(r: R) -> Self {
        Either::Right(r)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn left(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    pub fn right(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    pub fn fmap<B>(self, f: impl FnOnce(R) -> B) -> Either<L, B> {
        match self {
            Either::Right(r) => Either::of(f(r)),
            Either::Left(l) => Either::Left(l),
        }
    }

    /// Whatever `f` returns is the result, with no re-wrapping.
    pub fn chain<B>(self, f: impl FnOnce(R) -> Either<L, B>) -> Either<L, B> {
        match self {
            Either::Right(r) => f(r),
            Either::Left(l) => Either::Left(l),
        }
    }

    /// Collapse both cases into a single value.
    pub fn either<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Forget the `Left` payload.
    pub fn right_maybe(self) -> Maybe<R> {
        match self {
            Either::Left(_) => Maybe::Nothing,
            Either::Right(r) => Maybe::Just(r),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    pub fn join(self) -> Either<L, R> {
        match self {
            Either::Right(inner) => inner,
            Either::Left(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(res: Result<R, L>) -> Self {
        match res {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(e: Either<L, R>) -> Self {
        match e {
            Either::Right(r) => Ok(r),
            Either::Left(l) => Err(l),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({l})"),
            Either::Right(r) => write!(f, "Right({r})"),
        }
    }
}

// right-biased, the Left type is fixed
impl<L> Functor for Either<L, PartiallyApplied> {
    type Layer<X> = Either<L, X>;

    #[inline(always)]
    fn fmap<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> B) -> Self::Layer<B> {
        input.fmap(f)
    }
}

impl<L> Monad for Either<L, PartiallyApplied> {
    fn pure<A>(a: A) -> Self::Layer<A> {
        Either::of(a)
    }

    fn bind<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> Self::Layer<B>) -> Self::Layer<B> {
        input.chain(f)
    }
}
