//! Chaining steps that produce their container asynchronously.

use futures::future::{self, BoxFuture};
use futures::FutureExt;

use crate::{Either, Maybe};

impl<A> Maybe<A> {
    /// Like [`Maybe::chain`], for a step that returns a future. `Nothing` resolves immediately
    /// and `f` is never called.
    pub fn chain_async<'a, B>(
        self,
        f: impl FnOnce(A) -> BoxFuture<'a, Maybe<B>>,
    ) -> BoxFuture<'a, Maybe<B>>
    where
        B: Send + 'a,
    {
        match self {
            Maybe::Just(a) => f(a),
            Maybe::Nothing => future::ready(Maybe::Nothing).boxed(),
        }
    }
}

impl<L, R> Either<L, R> {
    /// Like [`Either::chain`], for a step that returns a future. A `Left` resolves immediately
    /// to itself and `f` is never called.
    pub fn chain_async<'a, B>(
        self,
        f: impl FnOnce(R) -> BoxFuture<'a, Either<L, B>>,
    ) -> BoxFuture<'a, Either<L, B>>
    where
        L: Send + 'a,
        B: Send + 'a,
    {
        match self {
            Either::Right(r) => f(r),
            Either::Left(l) => future::ready(Either::Left(l)).boxed(),
        }
    }
}
