//! The translation → book → chapter → verse resource tree

use crate::{AppState, WebError};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use lectern_core::{BookSummary, ChapterCount, TranslationStats, TranslationSummary, VerseRecord};

pub fn translation_routes() -> Router<AppState> {
    Router::new()
        .route("/translations", get(list_translations))
        .route("/translations/{translation}/books", get(list_books))
        .route("/translations/{translation}/stats", get(translation_stats))
        .route(
            "/translations/{translation}/books/{book_id}/chapters",
            get(count_chapters),
        )
        .route(
            "/translations/{translation}/books/{book_id}/chapters/{chapter}/verses",
            get(list_verses),
        )
        .route(
            "/translations/{translation}/books/{book_id}/chapters/{chapter}/verses/{verse}",
            get(get_verse),
        )
}

async fn list_translations(
    State(state): State<AppState>,
) -> Result<Json<Vec<TranslationSummary>>, WebError> {
    Ok(Json(state.resolver.list_translations().await?))
}

async fn list_books(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<BookSummary>>, WebError> {
    let Path(translation) = path?;
    Ok(Json(state.resolver.list_books(&translation).await?))
}

async fn translation_stats(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<TranslationStats>, WebError> {
    let Path(translation) = path?;
    Ok(Json(state.resolver.translation_stats(&translation).await?))
}

async fn count_chapters(
    State(state): State<AppState>,
    path: Result<Path<(String, i64)>, PathRejection>,
) -> Result<Json<ChapterCount>, WebError> {
    let Path((translation, book_id)) = path?;
    Ok(Json(state.resolver.count_chapters(&translation, book_id).await?))
}

async fn list_verses(
    State(state): State<AppState>,
    path: Result<Path<(String, i64, i64)>, PathRejection>,
) -> Result<Json<Vec<VerseRecord>>, WebError> {
    let Path((translation, book_id, chapter)) = path?;
    Ok(Json(
        state
            .resolver
            .list_verses(&translation, book_id, chapter)
            .await?,
    ))
}

async fn get_verse(
    State(state): State<AppState>,
    path: Result<Path<(String, i64, i64, i64)>, PathRejection>,
) -> Result<Json<VerseRecord>, WebError> {
    let Path((translation, book_id, chapter, verse)) = path?;
    Ok(Json(
        state
            .resolver
            .get_verse(&translation, book_id, chapter, verse)
            .await?,
    ))
}
