// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

//! Future-related utility code lives here.

use futures::*;

// Converts a concrete object implementing the `Future` trait into a `Box`ed,
// `Send`able trait object. This lets the flows in `api::client` return
// chains of different concrete future types under the single `gd::Future<T>`
// alias.
pub fn into_future_trait<F, I, E>(f: F) -> Box<Future<Item = I, Error = E> + Send>
where
    F: 'static + Send + Future<Item = I, Error = E>,
{
    Box::new(f)
}

// Lifts an already computed `Result` into the boxed future type.
pub fn from_result<I, E>(result: Result<I, E>) -> Box<Future<Item = I, Error = E> + Send>
where
    I: 'static + Send,
    E: 'static + Send,
{
    Box::new(future::result(result))
}
