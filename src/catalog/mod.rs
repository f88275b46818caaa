pub mod query;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Movie, Recommendation};
use query::{MovieQuery, RecommendQuery};

/// Read-only access to the movie catalog.
///
/// Handlers receive the catalog through [`crate::state::AppState`] so that the
/// remote session can be swapped for a fake in tests.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Run a filtered similarity, hybrid or listing query over `Movie`.
    async fn search(&self, query: &MovieQuery) -> Result<Vec<Movie>>;

    /// Fetch one movie by object id. `Ok(None)` when no such object exists.
    async fn fetch(&self, id: Uuid) -> Result<Option<Movie>>;

    /// Hybrid search over `Synopsis` with a grouped generation task.
    async fn recommend(&self, query: &RecommendQuery) -> Result<Recommendation>;
}

/// Derive the object id of the movie loaded from dataset row `row`.
///
/// Matches the loader's `uuid5(NAMESPACE_DNS, str(row))` convention.
pub fn movie_uuid(row: u32) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_DNS, row.to_string().as_bytes())
}
