use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub repo: String,
    pub repo_link: String,
    pub desc: String,
    pub lang: String,
    pub stars: String,
    pub forks: String,
    pub added_stars: String,
    pub avatars: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoList {
    pub count: u32,
    pub msg: String,
    pub items: Vec<Repo>,
}

#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    pub lang: Option<String>,
    pub since: Option<String>,
}

pub const PERIODS: [&str; 3] = ["daily", "weekly", "monthly"];

pub type Catalog = Arc<Vec<Repo>>;

pub fn app() -> Router {
    app_with(seed())
}

pub fn app_with(repos: Vec<Repo>) -> Router {
    let catalog: Catalog = Arc::new(repos);
    Router::new()
        .route("/repo", get(list_repos))
        .route("/health", get(health))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_repos(
    State(catalog): State<Catalog>,
    Query(query): Query<TrendingQuery>,
) -> Result<Json<RepoList>, (StatusCode, String)> {
    let since = query.since.as_deref().unwrap_or("daily");
    if !PERIODS.iter().any(|p| *p == since) {
        tracing::debug!(since, "rejecting unknown period");
        return Err((StatusCode::BAD_REQUEST, format!("unknown period: {since}")));
    }

    let items: Vec<Repo> = catalog
        .iter()
        .filter(|r| match &query.lang {
            Some(lang) => r.lang.eq_ignore_ascii_case(lang),
            None => true,
        })
        .cloned()
        .collect();
    tracing::debug!(lang = ?query.lang, since, count = items.len(), "listing trending repos");

    Ok(Json(RepoList {
        count: items.len() as u32,
        msg: "suc".to_string(),
        items,
    }))
}

async fn health() -> &'static str {
    "ok"
}

fn repo(name: &str, lang: &str, stars: &str) -> Repo {
    Repo {
        repo: name.to_string(),
        repo_link: format!("https://github.com/{name}"),
        desc: format!("{name} trending fixture"),
        lang: lang.to_string(),
        stars: stars.to_string(),
        forks: "0".to_string(),
        added_stars: format!("{stars} stars this period"),
        avatars: Vec::new(),
    }
}

/// Fixed catalog served by `app()`.
pub fn seed() -> Vec<Repo> {
    vec![
        repo("JetBrains/kotlin", "Kotlin", "48000"),
        repo("square/okhttp", "Kotlin", "45000"),
        repo("rust-lang/rust", "Rust", "98000"),
        repo("tokio-rs/axum", "Rust", "19000"),
        repo("golang/go", "Go", "122000"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_list_serializes_to_json() {
        let list = RepoList {
            count: 1,
            msg: "suc".to_string(),
            items: vec![repo("a/b", "Rust", "1")],
        };
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["items"][0]["repo"], "a/b");
        assert_eq!(json["items"][0]["repo_link"], "https://github.com/a/b");
    }

    #[test]
    fn seed_covers_several_languages() {
        let seed = seed();
        assert!(seed.iter().any(|r| r.lang == "Kotlin"));
        assert!(seed.iter().any(|r| r.lang == "Rust"));
    }

    #[test]
    fn query_fields_are_optional() {
        let q: TrendingQuery = serde_json::from_str("{}").unwrap();
        assert!(q.lang.is_none());
        assert!(q.since.is_none());
    }
}
