//! DTOs for the trending-repositories service.
//!
//! # Design
//! These mirror the mock-server's schema but are defined independently;
//! the integration tests catch drift between the two crates. Every field
//! is optional because the upstream service omits fields freely.

use serde::{Deserialize, Serialize};

/// Response of `GET /repo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoList {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub items: Vec<Repo>,
}

/// A single trending repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub repo_link: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub stars: Option<String>,
    #[serde(default)]
    pub forks: Option<String>,
    #[serde(default)]
    pub added_stars: Option<String>,
    #[serde(default)]
    pub avatars: Vec<String>,
}
