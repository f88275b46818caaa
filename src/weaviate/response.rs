//! Wire shapes of Weaviate GraphQL responses and their conversion to models.

use anyhow::{Result, bail};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{Movie, MovieRef, Recommendation, Synopsis};

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    data: Option<Data>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct Data {
    #[serde(rename = "Get")]
    get: Option<Get>,
}

#[derive(Debug, Default, Deserialize)]
struct Get {
    #[serde(rename = "Movie", default)]
    movie: Option<Vec<MovieObject>>,
    #[serde(rename = "Synopsis", default)]
    synopsis: Option<Vec<SynopsisObject>>,
}

#[derive(Debug, Deserialize)]
struct MovieObject {
    title: Option<String>,
    director: Option<String>,
    rating: Option<f64>,
    movie_id: Option<i64>,
    year: Option<i64>,
    #[serde(rename = "hasSynopsis", default)]
    has_synopsis: Option<Vec<SynopsisBody>>,
    #[serde(rename = "_additional")]
    additional: MovieAdditional,
}

#[derive(Debug, Deserialize)]
struct MovieAdditional {
    id: Uuid,
}

#[derive(Debug, Deserialize)]
struct SynopsisBody {
    body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SynopsisObject {
    body: Option<String>,
    #[serde(rename = "forMovie", default)]
    for_movie: Option<Vec<MovieRefObject>>,
    #[serde(rename = "_additional", default)]
    additional: Option<SynopsisAdditional>,
}

#[derive(Debug, Deserialize)]
struct MovieRefObject {
    title: Option<String>,
    movie_id: Option<i64>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SynopsisAdditional {
    generate: Option<Generate>,
}

#[derive(Debug, Deserialize)]
struct Generate {
    #[serde(rename = "groupedResult")]
    grouped_result: Option<String>,
    error: Option<String>,
}

impl GraphQlResponse {
    /// Surface GraphQL-level errors, which Weaviate reports with HTTP 200.
    fn into_get(self) -> Result<Get> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            bail!("Weaviate GraphQL error: {}", messages.join("; "));
        }
        Ok(self.data.and_then(|d| d.get).unwrap_or_default())
    }

    pub fn into_movies(self) -> Result<Vec<Movie>> {
        let get = self.into_get()?;
        Ok(get
            .movie
            .unwrap_or_default()
            .into_iter()
            .map(Movie::from)
            .collect())
    }

    pub fn into_recommendation(self) -> Result<Recommendation> {
        let objects = self.into_get()?.synopsis.unwrap_or_default();
        if objects.is_empty() {
            return Ok(Recommendation {
                generated: String::new(),
                sources: Vec::new(),
            });
        }

        // The grouped result is attached to the first object only.
        let mut generated = None;
        for generate in objects
            .iter()
            .filter_map(|o| o.additional.as_ref())
            .filter_map(|a| a.generate.as_ref())
        {
            if let Some(err) = generate.error.as_deref().filter(|e| !e.is_empty()) {
                bail!("Generation failed: {err}");
            }
            if generated.is_none() {
                generated = generate
                    .grouped_result
                    .clone()
                    .filter(|text| !text.trim().is_empty());
            }
        }
        let Some(generated) = generated else {
            bail!("Generation returned no text for {} synopses", objects.len());
        };

        let sources = objects.into_iter().map(Synopsis::from).collect();
        Ok(Recommendation { generated, sources })
    }
}

impl From<MovieObject> for Movie {
    fn from(obj: MovieObject) -> Self {
        // One-to-one by convention, but the reference list may be empty.
        let synopsis = obj
            .has_synopsis
            .and_then(|refs| refs.into_iter().next())
            .map(|s| Synopsis {
                body: s.body.unwrap_or_default(),
                movie: None,
            });
        Self {
            id: obj.additional.id,
            title: obj.title.unwrap_or_default(),
            director: obj.director.unwrap_or_default(),
            rating: obj.rating.unwrap_or_default(),
            movie_id: obj.movie_id.unwrap_or_default(),
            year: obj.year.unwrap_or_default(),
            synopsis,
        }
    }
}

impl From<SynopsisObject> for Synopsis {
    fn from(obj: SynopsisObject) -> Self {
        let movie = obj
            .for_movie
            .and_then(|refs| refs.into_iter().next())
            .map(|m| MovieRef {
                title: m.title.unwrap_or_default(),
                movie_id: m.movie_id.unwrap_or_default(),
                description: m.description.unwrap_or_default(),
            });
        Self {
            body: obj.body.unwrap_or_default(),
            movie,
        }
    }
}
