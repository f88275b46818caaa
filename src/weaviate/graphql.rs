//! Renders typed catalog queries as Weaviate GraphQL `Get` queries.

use uuid::Uuid;

use crate::catalog::query::{MovieQuery, RatingRange, RecommendQuery, Retrieval};

pub const MOVIE_COLLECTION: &str = "Movie";
pub const SYNOPSIS_COLLECTION: &str = "Synopsis";

const MOVIE_FIELDS: &str = "title director rating movie_id year \
     hasSynopsis { ... on Synopsis { body } } \
     _additional { id }";

const SYNOPSIS_FIELDS: &str = "body \
     forMovie { ... on Movie { title movie_id description } }";

/// GraphQL string literal. JSON escaping is a subset GraphQL accepts.
fn string_literal(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

fn rating_filter(range: &RatingRange) -> String {
    format!(
        "{{operator: And, operands: [\
         {{path: [\"rating\"], operator: GreaterThanEqual, valueNumber: {:?}}}, \
         {{path: [\"rating\"], operator: LessThanEqual, valueNumber: {:?}}}]}}",
        range.low(),
        range.high()
    )
}

pub fn movie_search(query: &MovieQuery) -> String {
    let mut args = Vec::with_capacity(3);
    match &query.retrieval {
        Retrieval::NearText(text) => {
            args.push(format!("nearText: {{concepts: [{}]}}", string_literal(text)));
        }
        Retrieval::Hybrid(text) => {
            args.push(format!("hybrid: {{query: {}}}", string_literal(text)));
        }
        Retrieval::List => {}
    }
    args.push(format!("where: {}", rating_filter(&query.rating)));
    args.push(format!("limit: {}", query.limit));

    format!(
        "{{ Get {{ {MOVIE_COLLECTION}({}) {{ {MOVIE_FIELDS} }} }} }}",
        args.join(", ")
    )
}

pub fn movie_by_id(id: Uuid) -> String {
    format!(
        "{{ Get {{ {MOVIE_COLLECTION}(where: {{path: [\"id\"], operator: Equal, valueText: {}}}, limit: 1) \
         {{ {MOVIE_FIELDS} }} }} }}",
        string_literal(&id.to_string())
    )
}

pub fn recommend(query: &RecommendQuery) -> String {
    format!(
        "{{ Get {{ {SYNOPSIS_COLLECTION}(hybrid: {{query: {}}}, limit: {}) {{ {SYNOPSIS_FIELDS} \
         _additional {{ generate(groupedResult: {{task: {}}}) {{ groupedResult error }} }} }} }} }}",
        string_literal(&query.subject),
        query.limit,
        string_literal(&query.task)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchMode;

    fn range(low: f64, high: f64) -> RatingRange {
        RatingRange::new(low, high).unwrap()
    }

    #[test]
    fn test_listing_has_filter_and_limit_but_no_ranking() {
        let q = MovieQuery::build("", SearchMode::Vector, range(0.0, 5.0)).unwrap();
        let gql = movie_search(&q);
        assert!(gql.contains("Movie(where:"));
        assert!(gql.contains("GreaterThanEqual, valueNumber: 0.0"));
        assert!(gql.contains("LessThanEqual, valueNumber: 5.0"));
        assert!(gql.contains("limit: 5"));
        assert!(!gql.contains("nearText"));
        assert!(!gql.contains("hybrid"));
    }

    #[test]
    fn test_near_text_query() {
        let q = MovieQuery::build("space adventure", SearchMode::Vector, range(3.0, 5.0)).unwrap();
        let gql = movie_search(&q);
        assert!(gql.contains(r#"nearText: {concepts: ["space adventure"]}"#));
        assert!(gql.contains("hasSynopsis { ... on Synopsis { body } }"));
    }

    #[test]
    fn test_hybrid_query() {
        let q = MovieQuery::build("space adventure", SearchMode::Hybrid, range(3.0, 5.0)).unwrap();
        let gql = movie_search(&q);
        assert!(gql.contains(r#"hybrid: {query: "space adventure"}"#));
        assert!(gql.contains("valueNumber: 3.0"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let q = MovieQuery::build(r#"the "thing") { evil }"#, SearchMode::Hybrid, range(0.0, 10.0)).unwrap();
        let gql = movie_search(&q);
        assert!(gql.contains(r#"hybrid: {query: "the \"thing\") { evil }"}"#));
    }

    #[test]
    fn test_fractional_bounds_render_exactly() {
        let q = MovieQuery::build("", SearchMode::Vector, range(2.5, 7.25)).unwrap();
        let gql = movie_search(&q);
        assert!(gql.contains("valueNumber: 2.5"));
        assert!(gql.contains("valueNumber: 7.25"));
    }

    #[test]
    fn test_movie_by_id() {
        let id = crate::catalog::movie_uuid(42);
        let gql = movie_by_id(id);
        assert!(gql.contains(&format!("valueText: \"{id}\"")));
        assert!(gql.contains("limit: 1"));
        assert!(gql.contains("hasSynopsis"));
    }

    #[test]
    fn test_recommend_query() {
        let q = RecommendQuery::build("dinosaurs", Some("a rainy afternoon")).unwrap();
        let gql = recommend(&q);
        assert!(gql.contains(r#"Synopsis(hybrid: {query: "dinosaurs"}, limit: 3)"#));
        assert!(gql.contains("forMovie { ... on Movie { title movie_id description } }"));
        assert!(gql.contains("generate(groupedResult: {task: "));
        assert!(gql.contains("a rainy afternoon"));
        // task newlines are escaped inside the literal
        assert!(!gql.contains('\n'));
    }
}
