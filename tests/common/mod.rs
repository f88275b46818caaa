//! In-memory stand-in for the Weaviate catalog.

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use movie_search::catalog::query::{MovieQuery, RecommendQuery, Retrieval};
use movie_search::catalog::{MovieCatalog, movie_uuid};
use movie_search::config::{Config, WeaviateConfig};
use movie_search::models::{Movie, MovieRef, Recommendation, Synopsis};

/// Honours the rating filter and limits; ranks by naive term matching.
#[derive(Default)]
pub struct FakeCatalog {
    pub movies: Vec<Movie>,
    pub fail_with: Option<String>,
    pub searches: Mutex<Vec<MovieQuery>>,
    pub recommendations: Mutex<Vec<RecommendQuery>>,
}

impl FakeCatalog {
    pub fn with_sample_movies() -> Self {
        Self {
            movies: sample_movies(),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        match &self.fail_with {
            Some(msg) => anyhow::bail!("{msg}"),
            None => Ok(()),
        }
    }
}

fn matches_terms(movie: &Movie, text: &str) -> bool {
    let haystack = format!(
        "{} {}",
        movie.title,
        movie.synopsis.as_ref().map(|s| s.body.as_str()).unwrap_or("")
    )
    .to_lowercase();
    text.to_lowercase()
        .split_whitespace()
        .any(|term| haystack.contains(term))
}

#[async_trait]
impl MovieCatalog for FakeCatalog {
    async fn search(&self, query: &MovieQuery) -> Result<Vec<Movie>> {
        self.check()?;
        self.searches.lock().push(query.clone());
        let hits = self
            .movies
            .iter()
            .filter(|m| query.rating.contains(m.rating))
            .filter(|m| match &query.retrieval {
                Retrieval::NearText(text) | Retrieval::Hybrid(text) => matches_terms(m, text),
                Retrieval::List => true,
            })
            .take(query.limit)
            .cloned()
            .collect();
        Ok(hits)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Movie>> {
        self.check()?;
        Ok(self.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn recommend(&self, query: &RecommendQuery) -> Result<Recommendation> {
        self.check()?;
        self.recommendations.lock().push(query.clone());
        let sources: Vec<Synopsis> = self
            .movies
            .iter()
            .filter(|m| matches_terms(m, &query.subject))
            .filter_map(|m| {
                m.synopsis.as_ref().map(|s| Synopsis {
                    body: s.body.clone(),
                    movie: Some(MovieRef {
                        title: m.title.clone(),
                        movie_id: m.movie_id,
                        description: format!("{} ({})", m.title, m.year),
                    }),
                })
            })
            .take(query.limit)
            .collect();
        let generated = match sources.first().and_then(|s| s.movie.as_ref()) {
            Some(movie) => format!("For {}, watch {}.", query.context, movie.title),
            None => String::new(),
        };
        Ok(Recommendation { generated, sources })
    }
}

fn movie(row: u32, title: &str, director: &str, rating: f64, year: i64, body: Option<&str>) -> Movie {
    Movie {
        id: movie_uuid(row),
        title: title.to_string(),
        director: director.to_string(),
        rating,
        movie_id: 1000 + i64::from(row),
        year,
        synopsis: body.map(|b| Synopsis {
            body: b.to_string(),
            movie: None,
        }),
    }
}

pub fn sample_movies() -> Vec<Movie> {
    vec![
        movie(3, "Galaxy Quest", "Dean Parisot", 4.2, 1999, Some("Actors from a space adventure show are mistaken for real heroes.")),
        movie(7, "Space Cadets", "Ann Other", 3.1, 2004, Some("A clumsy crew blunders through a space adventure.")),
        movie(12, "Quiet Harbor", "Lena Holt", 2.4, 2011, Some("A fisherman rebuilds his life in a small town.")),
        movie(19, "Dino Valley", "Sam Reyes", 4.8, 1996, Some("Dinosaurs roam a hidden valley full of adventure.")),
        movie(42, "Orbit Runner", "Maya Chen", 3.7, 2016, Some("A courier races across orbital stations in a space adventure.")),
        movie(57, "Laugh Track", "Tom Ivers", 1.9, 2008, Some("A sitcom writer loses his sense of humor.")),
        movie(88, "Starfall", "Iris Vega", 4.5, 2020, Some("Survivors of a crashed starship cross an alien desert.")),
        movie(101, "The Long Winter", "Olaf Berg", 0.5, 1985, Some("Two brothers wait out a brutal winter.")),
        movie(110, "Deep Blue Nothing", "Ray Moss", 7.5, 2001, None),
    ]
}

pub fn test_config() -> Config {
    Config {
        bind_addr: "127.0.0.1:0".to_string(),
        weaviate: WeaviateConfig {
            url: "http://127.0.0.1:0".to_string(),
            api_key: "test-key".to_string(),
            cohere_api_key: "test-cohere".to_string(),
            timeout_secs: 5,
        },
    }
}
