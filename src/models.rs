use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::render::DisplayBlock;

/// A movie record as stored in the `Movie` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub director: String,
    pub rating: f64,
    pub movie_id: i64,
    pub year: i64,
    /// Linked `hasSynopsis` record; `None` when the reference is empty
    pub synopsis: Option<Synopsis>,
}

/// A synopsis record from the `Synopsis` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synopsis {
    pub body: String,
    /// Linked `forMovie` record, only expanded by recommendation queries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie: Option<MovieRef>,
}

/// The subset of a movie pulled through a synopsis back-reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRef {
    pub title: String,
    pub movie_id: i64,
    pub description: String,
}

/// Generated recommendation plus the synopses it was conditioned on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub generated: String,
    pub sources: Vec<Synopsis>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    #[default]
    Vector,
    Hybrid,
}

/// Search panel request
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub mode: SearchMode,
    #[serde(default = "default_min_rating")]
    pub min_rating: f64,
    #[serde(default = "default_max_rating")]
    pub max_rating: f64,
}

fn default_min_rating() -> f64 {
    0.0
}

fn default_max_rating() -> f64 {
    10.0
}

/// Search panel response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    /// Effective retrieval: "vector", "hybrid" or "list"
    pub mode: &'static str,
    pub movies: Vec<Movie>,
    pub blocks: Vec<DisplayBlock>,
}

/// Movie detail panel response
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetailResponse {
    pub row: u32,
    pub movie: Movie,
    pub blocks: Vec<DisplayBlock>,
}

/// Recommend panel request
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    pub subject: String,
    #[serde(default)]
    pub context: Option<String>,
}

/// Recommend panel response
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub subject: String,
    pub context: String,
    pub generated: String,
    pub sources: Vec<Synopsis>,
    pub blocks: Vec<DisplayBlock>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_mode_serializes_to_snake_case() {
        let json = serde_json::to_value(SearchMode::Hybrid).unwrap();
        assert_eq!(json, "hybrid");
    }

    #[test]
    fn test_search_request_defaults() {
        let req: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.query, "");
        assert_eq!(req.mode, SearchMode::Vector);
        assert_eq!(req.min_rating, 0.0);
        assert_eq!(req.max_rating, 10.0);
    }

    #[test]
    fn test_recommend_request_context_is_optional() {
        let req: RecommendRequest = serde_json::from_str(r#"{"subject":"heist"}"#).unwrap();
        assert_eq!(req.subject, "heist");
        assert!(req.context.is_none());
    }

    #[test]
    fn test_search_response_field_names() {
        let resp = SearchResponse {
            query: "heist".into(),
            mode: "hybrid",
            movies: Vec::new(),
            blocks: Vec::new(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["blocks", "mode", "movies", "query"]);
    }

    #[test]
    fn test_synopsis_without_movie_omits_field() {
        let synopsis = Synopsis {
            body: "A crew plans one last job.".into(),
            movie: None,
        };
        let json = serde_json::to_value(&synopsis).unwrap();
        assert!(json.get("movie").is_none());
    }
}
