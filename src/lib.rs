//! # movie-search
//!
//! A small web application for browsing a movie catalog hosted in Weaviate.
//! Embedding, ranking and generation all happen inside the Weaviate cluster;
//! this crate builds the queries, forwards them, and renders what comes back.
//!
//! ## Architecture
//!
//! Each UI panel maps to one HTTP handler and one round trip:
//!
//! ```text
//!    Search panel          Detail panel          Recommend panel
//!  text, mode, rating        row id            subject, context
//!         │                    │                      │
//!         ▼                    ▼                      ▼
//!  ┌──────────────┐   ┌────────────────┐   ┌────────────────────┐
//!  │  MovieQuery   │   │ uuid5(row id)  │   │   RecommendQuery   │
//!  │ nearText /    │   │ fetch by id    │   │ hybrid on Synopsis │
//!  │ hybrid / list │   │                │   │ + grouped task     │
//!  │ rating filter │   │                │   │ limit 3            │
//!  │ limit 5       │   │                │   │                    │
//!  └──────┬───────┘   └───────┬────────┘   └─────────┬──────────┘
//!         └───────────────────┼──────────────────────┘
//!                             ▼
//!                ┌────────────────────────┐
//!                │ MovieCatalog (Weaviate │
//!                │ GraphQL over reqwest)  │
//!                └───────────┬────────────┘
//!                            ▼
//!                ┌────────────────────────┐
//!                │ render: DisplayBlocks  │
//!                └────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration; required Weaviate and Cohere credentials
//! - [`models`] - `Movie`, `Synopsis`, and the request/response types of each panel
//! - [`catalog`] - The `MovieCatalog` trait, row-id derivation, and typed queries
//! - [`weaviate`] - Weaviate session, GraphQL rendering and response parsing
//! - [`render`] - Expandable display blocks for movies and recommendations
//! - [`api`] - Axum handlers, one per panel
//! - [`error`] - HTTP error type with status mapping
//! - [`state`] - Shared application state holding config and the catalog handle

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod state;
pub mod weaviate;
