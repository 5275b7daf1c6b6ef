//! Query-string endpoints spanning more than one resource

use crate::{AppState, WebError};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use lectern_core::{Comparison, PassageRange, PassageVerse};
use serde::Deserialize;

pub fn passage_routes() -> Router<AppState> {
    Router::new()
        .route("/passage", get(get_passage))
        .route("/compare", get(compare_translations))
}

#[derive(Debug, Deserialize)]
struct PassageQuery {
    translation: String,
    book: i64,
    start_chapter: i64,
    start_verse: i64,
    end_chapter: i64,
    end_verse: i64,
}

async fn get_passage(
    State(state): State<AppState>,
    query: Result<Query<PassageQuery>, QueryRejection>,
) -> Result<Json<Vec<PassageVerse>>, WebError> {
    let Query(query) = query?;
    let range = PassageRange {
        book_id: query.book,
        start_chapter: query.start_chapter,
        start_verse: query.start_verse,
        end_chapter: query.end_chapter,
        end_verse: query.end_verse,
    };
    Ok(Json(
        state.resolver.get_passage(&query.translation, range).await?,
    ))
}

#[derive(Debug, Deserialize)]
struct CompareQuery {
    translation1: String,
    translation2: String,
    book: i64,
    chapter: i64,
    verse: Option<i64>,
}

async fn compare_translations(
    State(state): State<AppState>,
    query: Result<Query<CompareQuery>, QueryRejection>,
) -> Result<Json<Comparison>, WebError> {
    let Query(query) = query?;
    Ok(Json(
        state
            .resolver
            .compare(
                &query.translation1,
                &query.translation2,
                query.book,
                query.chapter,
                query.verse,
            )
            .await?,
    ))
}
