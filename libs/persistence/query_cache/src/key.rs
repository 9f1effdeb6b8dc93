use std::borrow::Cow;

use serde::Serialize;

use crate::CacheResult;

pub trait CacheKey {
    type Args<'r>;
    type Value: Clone + Send + Sync + 'static;

    fn get_key_with_args(&self, arg: Self::Args<'_>) -> Cow<'static, str>;
}

pub trait CacheKeyArg1 {
    type Arg0;

    fn construct(arg0: Self::Arg0) -> Self;
}

impl<T> CacheKeyArg1 for (T,) {
    type Arg0 = T;

    fn construct(arg0: Self::Arg0) -> Self { (arg0,) }
}

/// Serialises a query object into the JSON fragment used inside a key.
///
/// Two queries produce the same fragment exactly when their serialised
/// fields are equal, so field order of the type is part of the key.
pub fn json_key_part<T>(value: &T) -> CacheResult<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}
