//! Client for the trending-repositories service.

use crate::types::RepoList;

crate::http_api! {
    /// Trending repositories, filtered by language and period
    /// (`daily`, `weekly` or `monthly`).
    pub trait TrendingApi => TrendingClient {
        /// Repositories trending in `lang` over the period `since`.
        #[get("/repo")]
        fn repos(#[field("lang")] lang: &str, #[field("since")] since: &str) -> RepoList;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::TransportError;
    use crate::http::{HttpRequest, HttpResponse, Transport};
    use crate::{ClientConfig, ClientFactory};

    #[derive(Default)]
    struct Canned {
        urls: Mutex<Vec<String>>,
    }

    impl Transport for Canned {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.urls.lock().unwrap().push(request.url.clone());
            Ok(HttpResponse::ok(
                r#"{"count":1,"msg":"suc","items":[{"repo":"JetBrains/kotlin","lang":"Kotlin"}]}"#,
            ))
        }
    }

    #[test]
    fn repos_hits_repo_endpoint_with_both_fields() {
        let transport = Arc::new(Canned::default());
        let factory = ClientFactory::new(ClientConfig::new("https://example.test"), transport.clone());
        let client: TrendingClient = factory.create().unwrap();

        let list = client.repos("Kotlin", "weekly").unwrap();

        assert_eq!(list.count, Some(1));
        assert_eq!(list.items[0].repo.as_deref(), Some("JetBrains/kotlin"));
        assert_eq!(
            *transport.urls.lock().unwrap(),
            vec!["https://example.test/repo?lang=Kotlin&since=weekly"]
        );
    }
}
