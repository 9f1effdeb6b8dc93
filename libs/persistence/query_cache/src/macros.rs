/// Declares a unit struct implementing [`CacheKey`](crate::CacheKey).
///
/// ```ignore
/// cache_key!(VenueListCacheKey::<Arc<Vec<Venue>>> => "venues:list:{}"[filter: String]);
/// ```
#[macro_export]
macro_rules! cache_key {
    ($name:ident::<$t:ty> => $format_key:literal[$($arg:ident:$ty:ident),*]) => {
        #[doc=concat!(concat!("Cache key binding\n ## Key \n", $format_key), concat!("\n ## Value Type \n ", stringify!($t)))]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $crate::CacheKey for $name {
            type Args<'r> = ($(&'r $ty,)*);
            type Value = $t;

            fn get_key_with_args(&self, args: Self::Args<'_>) -> std::borrow::Cow<'static, str> {
                let ($($arg,)*) = args;

                (format!($format_key, $($arg),*)).into()
            }
        }
    };
}
