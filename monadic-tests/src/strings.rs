use futures::future::BoxFuture;
use futures::FutureExt;
use monadic::compose::compose;
use monadic::{Maybe, Monad, PartiallyApplied};

pub fn yell(s: String) -> String {
    format!("{s}!")
}

pub fn make_loud(s: String) -> String {
    s.to_uppercase()
}

pub fn safe_yell(s: String) -> Maybe<String> {
    Maybe::of(yell(s))
}

pub fn safe_make_loud(s: String) -> Maybe<String> {
    Maybe::of(make_loud(s))
}

pub fn yell_to_the_rooftops(s: String) -> String {
    compose(yell, make_loud)(s)
}

pub fn safe_yell_to_the_rooftops(s: Option<&str>) -> String {
    Maybe::from(s)
        .map(str::to_string)
        .chain(safe_yell)
        .chain(safe_make_loud)
        .get_or_else(":(".to_string())
}

pub fn shout_async<'a>(s: String) -> BoxFuture<'a, Maybe<String>> {
    async move { safe_make_loud(s) }.boxed()
}

pub fn yell_async<'a>(s: String) -> BoxFuture<'a, Maybe<String>> {
    async move { safe_yell(s) }.boxed()
}

pub async fn yell_to_the_rooftops_async(s: Option<&str>) -> String {
    Maybe::from(s)
        .map(str::to_string)
        .chain_async(shout_async)
        .await
        .chain_async(yell_async)
        .await
        .get_or_else(":(".to_string())
}

/// `n` counting down to 1, as strings
pub fn string_to_array(n: u32) -> Vec<String> {
    (1..=n).rev().map(|i| i.to_string()).collect()
}

/// `n` repeated `count` times, as strings
pub fn string_to_array_repeat(n: u32, count: usize) -> Vec<String> {
    vec![n.to_string(); count]
}

pub fn flat_count_down(ns: Vec<u32>) -> Vec<String> {
    Vec::<PartiallyApplied>::bind(ns, string_to_array)
}
