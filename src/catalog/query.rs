//! Typed queries built from panel input.
//!
//! These carry no wire syntax; [`crate::weaviate::graphql`] renders them.

use crate::error::ApiError;
use crate::models::SearchMode;

/// Maximum movies returned by the search panel.
pub const SEARCH_LIMIT: usize = 5;
/// Maximum supporting synopses retrieved for a recommendation.
pub const RECOMMEND_LIMIT: usize = 3;
/// Context used when the recommend panel leaves it blank.
pub const DEFAULT_CONTEXT: &str = "any occasion";

/// Longest search text, subject or context accepted, in characters.
pub const MAX_INPUT_CHARS: usize = 500;

/// Inclusive rating bounds, always applied to movie searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingRange {
    low: f64,
    high: f64,
}

impl RatingRange {
    pub fn new(low: f64, high: f64) -> Result<Self, ApiError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ApiError::BadRequest(
                "Rating bounds must be finite numbers".to_string(),
            ));
        }
        if low > high {
            return Err(ApiError::BadRequest(format!(
                "Minimum rating {low} is greater than maximum rating {high}"
            )));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, rating: f64) -> bool {
        rating >= self.low && rating <= self.high
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Retrieval {
    /// Embedding similarity to the query text
    NearText(String),
    /// Combined keyword and embedding ranking
    Hybrid(String),
    /// No ranking; browse whatever passes the filter
    List,
}

impl Retrieval {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NearText(_) => "vector",
            Self::Hybrid(_) => "hybrid",
            Self::List => "list",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieQuery {
    pub retrieval: Retrieval,
    pub rating: RatingRange,
    pub limit: usize,
}

impl MovieQuery {
    /// An empty search string falls back to listing; otherwise `mode` decides.
    /// The trimmed text is sent as typed.
    pub fn build(text: &str, mode: SearchMode, rating: RatingRange) -> Result<Self, ApiError> {
        let text = check_length("Search text", text.trim())?;
        let retrieval = if text.is_empty() {
            Retrieval::List
        } else {
            match mode {
                SearchMode::Vector => Retrieval::NearText(text.to_string()),
                SearchMode::Hybrid => Retrieval::Hybrid(text.to_string()),
            }
        };
        Ok(Self {
            retrieval,
            rating,
            limit: SEARCH_LIMIT,
        })
    }
}

/// A retrieval-augmented generation request over synopses.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendQuery {
    /// Hybrid search text, also embedded in the task
    pub subject: String,
    pub context: String,
    /// Instruction handed to the generation backend
    pub task: String,
    pub limit: usize,
}

impl RecommendQuery {
    /// `subject` is required; a missing or blank `context` becomes
    /// [`DEFAULT_CONTEXT`]. Both are kept as typed; only the copies embedded
    /// in `task` are sanitized.
    pub fn build(subject: &str, context: Option<&str>) -> Result<Self, ApiError> {
        let subject = check_length("Subject", subject.trim())?;
        if subject.is_empty() {
            return Err(ApiError::BadRequest("Subject is required".to_string()));
        }

        let context = match context.map(str::trim).filter(|c| !c.is_empty()) {
            Some(c) => check_length("Context", c)?,
            None => DEFAULT_CONTEXT,
        };

        let task = build_recommendation_task(
            sanitize_for_prompt(subject).trim(),
            sanitize_for_prompt(context).trim(),
        );
        Ok(Self {
            subject: subject.to_string(),
            context: context.to_string(),
            task,
            limit: RECOMMEND_LIMIT,
        })
    }
}

pub fn build_recommendation_task(subject: &str, context: &str) -> String {
    format!(
        "The user is looking for a movie recommendation about \"{subject}\" for {context}.\n\
         Using only the movie synopses provided, recommend the single best match.\n\
         Give the movie title first, then explain in two or three sentences why it \
         suits \"{subject}\" and {context}."
    )
}

/// Strip chat-template control tokens from user text before it reaches a prompt.
pub fn sanitize_for_prompt(text: &str) -> String {
    const CONTROL_TOKENS: [&str; 4] = ["<|im_start|>", "<|im_end|>", "<|endoftext|>", "<|system|>"];
    CONTROL_TOKENS
        .iter()
        .fold(text.to_string(), |acc, token| acc.replace(token, ""))
}

fn check_length<'a>(field: &str, text: &'a str) -> Result<&'a str, ApiError> {
    let len = text.chars().count();
    if len > MAX_INPUT_CHARS {
        return Err(ApiError::BadRequest(format!(
            "{field} is {len} characters; the limit is {MAX_INPUT_CHARS}"
        )));
    }
    Ok(text)
}
