use axum::{Json, body::Bytes, extract::Extension, http::StatusCode};
use std::sync::Arc;

use super::protocol::SaveResponse;
use crate::collection::types::{HeroCollection, HeroRecord};
use crate::selector;
use crate::storage::store::HeroStore;

/// Returns the record selected for the current UTC day, or JSON `null`
/// while the collection is empty. This operation always succeeds.
pub async fn handle_daily_hero(
    Extension(store): Extension<Arc<HeroStore>>,
) -> Json<Option<HeroRecord>> {
    let snapshot = store.snapshot().await;
    let date = selector::today_utc_key();
    Json(selector::pick_for_date(&snapshot, &date).cloned())
}

/// Returns the full collection as a JSON array, in stored order.
pub async fn handle_list_heroes(
    Extension(store): Extension<Arc<HeroStore>>,
) -> Json<HeroCollection> {
    let snapshot = store.snapshot().await;
    Json((*snapshot).clone())
}

/// Replaces the whole collection from a raw JSON array body.
///
/// The body is parsed here rather than through the `Json` extractor so a
/// malformed payload still produces the acknowledgement shape, carrying the
/// parse error message.
pub async fn handle_save_heroes(
    Extension(store): Extension<Arc<HeroStore>>,
    body: Bytes,
) -> (StatusCode, Json<SaveResponse>) {
    let records: Vec<HeroRecord> = match serde_json::from_slice(&body) {
        Ok(records) => records,
        Err(err) => {
            tracing::error!("Rejecting save request: {}", err);
            return (
                StatusCode::BAD_REQUEST,
                Json(SaveResponse {
                    ok: false,
                    error: Some(err.to_string()),
                }),
            );
        }
    };

    match store.replace(records).await {
        Ok(()) => (
            StatusCode::OK,
            Json(SaveResponse {
                ok: true,
                error: None,
            }),
        ),
        Err(err) => {
            tracing::error!("Failed to persist hero collection: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SaveResponse {
                    ok: false,
                    error: Some(err.to_string()),
                }),
            )
        }
    }
}
