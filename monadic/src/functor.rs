use std::marker::PhantomData;

/// A container whose contents can be mapped over via `fmap`.
///
/// # Implementing this trait
///
/// This trait is implemented for some marker token, because rust does not
/// allow for implementing a trait for a partially applied type. That is, we can implement
/// a trait for `Maybe<usize>` but we can't implement a trait for just `Maybe`, because
/// `Maybe` is a partially applied type.
///
/// For this reason, instances are written over the uninhabited [`PartiallyApplied`]
/// enum marker, eg
///
/// ```rust
/// # use monadic::functor::{Functor, PartiallyApplied};
/// # #[derive(Debug, PartialEq, Eq)]
/// enum Pair<A> {
///     Pair(A, A),
/// }
///
/// impl Functor for Pair<PartiallyApplied> {
///     type Layer<X> = Pair<X>;
///
///     fn fmap<A, B>(input: Self::Layer<A>, mut f: impl FnMut(A) -> B) -> Self::Layer<B> {
///         match input {
///             Pair::Pair(a, b) => Pair::Pair(f(a), f(b)),
///         }
///     }
/// }
///
/// let mapped = Pair::<PartiallyApplied>::fmap(Pair::Pair(1, 2), |n| n + 10);
/// assert_eq!(mapped, Pair::Pair(11, 12));
/// ```
///
/// `Maybe` and `Either` also have inherent `fmap`/`bind` methods, and inherent methods win
/// over trait methods in path lookup. Reach their instances through the qualified form:
///
/// ```rust
/// # use monadic::{Either, Functor, Maybe, Monad, PartiallyApplied};
/// type M = Maybe<PartiallyApplied>;
/// type E = Either<&'static str, PartiallyApplied>;
///
/// assert_eq!(<M as Functor>::fmap(Maybe::of(1), |n| n + 1), Maybe::of(2));
/// assert_eq!(<E as Monad>::bind(Either::of(2), |n| Either::of(n * 3)), Either::Right(6));
/// ```
///
/// # Laws
///
/// - identity: `fmap(x, |a| a) == x`
/// - composition: `fmap(fmap(x, f), g) == fmap(x, |a| g(f(a)))`
pub trait Functor {
    /// the container type that is mapped over by `fmap`
    type Layer<X>;

    /// Apply some function `f` to each element inside a layer
    fn fmap<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> B) -> Self::Layer<B>;
}

/// A [`Functor`] that can lift plain values and sequence computations that themselves
/// produce a layer.
///
/// # Laws
///
/// - left identity: `bind(pure(x), f) == f(x)`
/// - right identity: `bind(m, pure) == m`
/// - associativity: `bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))`
pub trait Monad: Functor {
    /// lift a value into the container, a.k.a. `of` or `return`
    fn pure<A>(a: A) -> Self::Layer<A>;

    /// map then flatten, a.k.a. `chain` or `flat_map`
    fn bind<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> Self::Layer<B>) -> Self::Layer<B>;

    /// flatten exactly one level of nesting
    fn join<A>(input: Self::Layer<Self::Layer<A>>) -> Self::Layer<A> {
        Self::bind(input, |inner| inner)
    }
}

/// "An uninhabited type used to define [`Functor`] instances for partially-applied types."
///
/// For example: the Functor instance for `Maybe<A>` cannot be written over the
/// partially-applied type `Maybe`, so instead we write it over `Maybe<PartiallyApplied>`
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

/// Two functors nested one inside the other, `F1<F2<X>>`.
pub struct Compose<F1, F2>(PhantomData<F1>, PhantomData<F2>);

impl<F1: Functor, F2: Functor> Functor for Compose<F1, F2> {
    type Layer<X> = F1::Layer<F2::Layer<X>>;

    fn fmap<A, B>(input: Self::Layer<A>, mut f: impl FnMut(A) -> B) -> Self::Layer<B> {
        #[allow(clippy::redundant_closure)] // this lint is wrong here
        F1::fmap(input, move |x| F2::fmap(x, |x| f(x)))
    }
}

// specialMap / specialFlatMap
impl Functor for Vec<PartiallyApplied> {
    type Layer<X> = Vec<X>;

    fn fmap<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> B) -> Self::Layer<B> {
        input.into_iter().map(f).collect()
    }
}

impl Monad for Vec<PartiallyApplied> {
    fn pure<A>(a: A) -> Self::Layer<A> {
        vec![a]
    }

    fn bind<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> Self::Layer<B>) -> Self::Layer<B> {
        input.into_iter().flat_map(f).collect()
    }
}
