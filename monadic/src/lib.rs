pub mod compose;
mod either;
pub mod functor;
mod maybe;

#[cfg(feature = "experimental")]
pub mod experimental;

pub use either::Either;
pub use functor::{Functor, Monad, PartiallyApplied};
pub use maybe::Maybe;
