//! Turns catalog records into the expandable text blocks the UI shows.

use std::fmt::Write;

use serde::Serialize;

use crate::models::{Movie, Recommendation, Synopsis};

const MISSING_SYNOPSIS: &str = "(No synopsis linked to this movie.)";
const MISSING_MOVIE: &str = "(No movie linked to this synopsis.)";

/// One collapsible block: a heading and its expanded text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayBlock {
    pub title: String,
    pub body: String,
}

pub fn movie_block(movie: &Movie) -> DisplayBlock {
    let mut body = String::new();
    writeln!(body, "Movie ID: {}", movie.movie_id).unwrap();
    writeln!(body, "Year: {}", movie.year).unwrap();
    writeln!(body, "Rating: {:.1}", movie.rating).unwrap();
    writeln!(body, "Director: {}", movie.director).unwrap();
    body.push('\n');
    body.push_str(synopsis_text(movie.synopsis.as_ref()));

    DisplayBlock {
        title: movie.title.clone(),
        body,
    }
}

pub fn movie_blocks(movies: &[Movie]) -> Vec<DisplayBlock> {
    movies.iter().map(movie_block).collect()
}

/// The generated text first, then one block per supporting synopsis.
pub fn recommendation_blocks(recommendation: &Recommendation) -> Vec<DisplayBlock> {
    let mut blocks = Vec::with_capacity(recommendation.sources.len() + 1);
    blocks.push(DisplayBlock {
        title: "Recommendation".to_string(),
        body: recommendation.generated.clone(),
    });
    blocks.extend(
        recommendation
            .sources
            .iter()
            .enumerate()
            .map(|(i, s)| source_block(i + 1, s)),
    );
    blocks
}

fn source_block(position: usize, synopsis: &Synopsis) -> DisplayBlock {
    match &synopsis.movie {
        Some(movie) => DisplayBlock {
            title: format!("Source {position}: {}", movie.title),
            body: format!(
                "Movie ID: {}\nDescription: {}\n\n{}",
                movie.movie_id,
                movie.description,
                synopsis_text(Some(synopsis))
            ),
        },
        None => DisplayBlock {
            title: format!("Source {position}"),
            body: format!("{MISSING_MOVIE}\n\n{}", synopsis_text(Some(synopsis))),
        },
    }
}

fn synopsis_text(synopsis: Option<&Synopsis>) -> &str {
    match synopsis {
        Some(s) if !s.body.trim().is_empty() => s.body.as_str(),
        _ => MISSING_SYNOPSIS,
    }
}
