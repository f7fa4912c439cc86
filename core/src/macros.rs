//! Declarative generation of API traits and their client types.

/// Declare an HTTP API as a trait and generate a client implementing it.
///
/// ```
/// use kthttp_core::http_api;
/// # #[derive(serde::Deserialize)] struct RepoList {}
///
/// http_api! {
///     /// Trending repositories.
///     pub trait Trending => TrendingClient {
///         /// Repositories trending in `lang` since `since`.
///         #[get("/repo")]
///         fn repos(#[field("lang")] lang: &str, #[field("since")] since: &str) -> RepoList;
///     }
/// }
/// ```
///
/// This expands to:
///
/// - `trait Trending` with `fn repos(&self, lang: &str, since: &str) ->
///   Result<RepoList, ApiError>`;
/// - `struct TrendingClient<C = JsonCodec>` implementing `Trending`, plus the
///   hidden `ApiService` hook `ClientFactory::create` uses to build it.
///
/// Every generated method forwards its name and arguments to
/// `Proxy::invoke`. Parameters must implement `Display`, return types
/// `DeserializeOwned`. Tags are recorded as written: a method with no
/// `#[get]` tag, two `#[get]` tags, or a parameter without `#[field]`
/// compiles, and fails with `ApiError::MetadataMismatch` when called.
///
/// Doc comments on a method must come before its `#[get(..)]` tags and are
/// carried over to the trait method. No other method attributes are accepted.
#[macro_export]
macro_rules! http_api {
    (
        $(#[$meta:meta])*
        $vis:vis trait $api:ident => $client:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[get($path:literal)])*
                fn $method:ident(
                    $( $(#[field($key:literal)])? $arg:ident : $ty:ty ),* $(,)?
                ) -> $ret:ty;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis trait $api {
            $(
                $(#[doc = $doc])*
                fn $method(&self, $($arg: $ty),*) -> ::std::result::Result<$ret, $crate::ApiError>;
            )*
        }

        #[derive(Debug)]
        $vis struct $client<C = $crate::JsonCodec> {
            proxy: $crate::Proxy<C>,
        }

        impl<C: $crate::Codec> $api for $client<C> {
            $(
                fn $method(&self, $($arg: $ty),*) -> ::std::result::Result<$ret, $crate::ApiError> {
                    self.proxy.invoke(
                        ::std::stringify!($method),
                        &[$(&$arg as &dyn ::std::fmt::Display),*],
                    )
                }
            )*
        }

        #[doc(hidden)]
        impl<C: $crate::Codec> $crate::ApiService for $client<C> {
            type Codec = C;
            const NAME: &'static str = ::std::stringify!($api);

            fn descriptors() -> ::std::vec::Vec<$crate::MethodDescriptor> {
                ::std::vec![
                    $(
                        $crate::MethodDescriptor::new(::std::stringify!($method))
                            $( .endpoint($crate::Endpoint::get($path)) )*
                            $( .param(::std::stringify!($arg)) $( .field($crate::Field::new($key)) )? )*
                    ),*
                ]
            }

            fn from_proxy(proxy: $crate::Proxy<C>) -> Self {
                Self { proxy }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{ApiService, Endpoint, Field, MethodDescriptor};

    crate::http_api! {
        trait Sample => SampleClient {
            /// Liveness check.
            ///
            /// Takes no arguments.
            #[get("/ping")]
            fn ping() -> String;

            #[get("/repo")]
            fn repos(#[field("lang")] lang: &str, #[field("since")] since: &str) -> Vec<String>;

            fn untagged(#[field("q")] q: u32) -> u32;

            /// Declared twice on purpose.
            #[get("/a")]
            #[get("/b")]
            fn doubled() -> u32;

            #[get("/partial")]
            fn partial(#[field("a")] a: u32, b: u32,) -> u32;
        }
    }

    #[test]
    fn descriptors_mirror_the_declaration() {
        let descs = <SampleClient as ApiService>::descriptors();
        assert_eq!(descs.len(), 5);

        assert_eq!(
            descs[0],
            MethodDescriptor::new("ping").endpoint(Endpoint::get("/ping"))
        );
        assert_eq!(
            descs[1],
            MethodDescriptor::new("repos")
                .endpoint(Endpoint::get("/repo"))
                .param("lang")
                .field(Field::new("lang"))
                .param("since")
                .field(Field::new("since"))
        );
        assert!(descs[2].endpoints.is_empty());
        assert_eq!(descs[3].endpoints.len(), 2);
        assert_eq!(descs[4].params, vec!["a", "b"]);
        assert_eq!(descs[4].fields, vec![Field::new("a")]);
    }

    #[test]
    fn documented_methods_keep_their_tags() {
        let descs = <SampleClient as ApiService>::descriptors();
        assert_eq!(descs[0].name, "ping");
        assert_eq!(descs[0].endpoints, vec![Endpoint::get("/ping")]);
        assert_eq!(descs[3].name, "doubled");
        assert_eq!(
            descs[3].endpoints,
            vec![Endpoint::get("/a"), Endpoint::get("/b")]
        );
    }

    #[test]
    fn interface_name_is_the_trait_name() {
        assert_eq!(<SampleClient as ApiService>::NAME, "Sample");
    }
}
