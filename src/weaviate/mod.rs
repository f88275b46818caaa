//! Weaviate session: the remote [`MovieCatalog`] implementation.

pub mod graphql;
pub mod response;

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::MovieCatalog;
use crate::catalog::query::{MovieQuery, RecommendQuery};
use crate::config::WeaviateConfig;
use crate::models::{Movie, Recommendation};
use response::GraphQlResponse;

const COHERE_KEY_HEADER: &str = "x-cohere-api-key";

/// An authenticated session to one Weaviate cluster.
#[derive(Debug, Clone)]
pub struct WeaviateClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

impl WeaviateClient {
    /// Build the session without contacting the cluster.
    pub fn new(config: &WeaviateConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .context("Weaviate API key is not a valid header value")?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let mut cohere = HeaderValue::from_str(&config.cohere_api_key)
            .context("Cohere API key is not a valid header value")?;
        cohere.set_sensitive(true);
        headers.insert(COHERE_KEY_HEADER, cohere);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the session and confirm the cluster is ready to serve queries.
    pub async fn connect(config: &WeaviateConfig) -> Result<Self> {
        let client = Self::new(config)?;
        client.ready().await?;
        tracing::info!("Connected to Weaviate at {}", client.base_url);
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn ready(&self) -> Result<()> {
        let url = format!("{}/v1/.well-known/ready", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach Weaviate at {}", self.base_url))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Weaviate readiness check returned {status}: {body}");
        }
        Ok(())
    }

    /// Release the session, dropping its connection pool.
    ///
    /// Takes the client by value so it must be the last handle: the binary
    /// unwraps its `Arc` after the router, and the state clone it held, have
    /// been dropped.
    pub fn close(self) {
        tracing::info!("Closed Weaviate session to {}", self.base_url);
    }

    async fn graphql(&self, query: &str) -> Result<GraphQlResponse> {
        let url = format!("{}/v1/graphql", self.base_url);
        tracing::debug!("GraphQL query: {query}");

        let resp = self
            .http
            .post(&url)
            .json(&GraphQlRequest { query })
            .send()
            .await
            .context("Failed to call Weaviate GraphQL API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Weaviate GraphQL API returned {status}: {body}");
        }

        resp.json()
            .await
            .context("Failed to parse Weaviate GraphQL response")
    }
}

#[async_trait]
impl MovieCatalog for WeaviateClient {
    async fn search(&self, query: &MovieQuery) -> Result<Vec<Movie>> {
        let movies = self
            .graphql(&graphql::movie_search(query))
            .await?
            .into_movies()?;
        tracing::info!(
            "{} search returned {} movies",
            query.retrieval.label(),
            movies.len()
        );
        Ok(movies)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Movie>> {
        let movies = self.graphql(&graphql::movie_by_id(id)).await?.into_movies()?;
        Ok(movies.into_iter().next())
    }

    async fn recommend(&self, query: &RecommendQuery) -> Result<Recommendation> {
        let recommendation = self
            .graphql(&graphql::recommend(query))
            .await?
            .into_recommendation()?;
        tracing::info!(
            "Recommendation for '{}' used {} synopses",
            query.subject,
            recommendation.sources.len()
        );
        Ok(recommendation)
    }
}
