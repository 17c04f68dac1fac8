//! Plain function plumbing for building the functions handed to `map` and `chain`.

/// Right-to-left composition: `compose(f, g)(x) == f(g(x))`.
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |a| f(g(a))
}

/// Left-to-right composition: `pipe(f, g)(x) == g(f(x))`.
pub fn pipe<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |a| g(f(a))
}

/// An identity function that shows each value passing through it to `sink` first.
///
/// ```rust
/// # use monadic::compose::{compose, debug};
/// # use std::cell::RefCell;
/// let seen = RefCell::new(Vec::new());
/// let shout = compose(
///     |s: String| s.to_uppercase(),
///     debug(|s: &String| seen.borrow_mut().push(s.clone())),
/// );
///
/// assert_eq!(shout("hi".to_string()), "HI");
/// assert_eq!(*seen.borrow(), vec!["hi".to_string()]);
/// ```
pub fn debug<A>(sink: impl Fn(&A)) -> impl Fn(A) -> A {
    move |a| {
        sink(&a);
        a
    }
}
