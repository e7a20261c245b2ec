use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::{JoinWaitlistRequest, WaitlistUseCases},
};

#[derive(Serialize)]
struct CountResponse {
    success: bool,
    count: i64,
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    data: WaitlistEntry,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::post(join_waitlist))
        .route("/count", get(waitlist_count))
}

async fn waitlist_count(
    State(waitlist): State<Arc<WaitlistUseCases>>,
) -> AppResult<impl IntoResponse> {
    let count = waitlist.count().await?;
    Ok(Json(CountResponse {
        success: true,
        count,
    }))
}

async fn join_waitlist(
    State(waitlist): State<Arc<WaitlistUseCases>>,
    payload: Result<Json<JoinWaitlistRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

    let entry = waitlist.join(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            data: entry,
        }),
    ))
}
