use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use crate::{adapters::http::app_state::AppState, app_error::AppError};

fn header_str<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Logs who is calling: origin, referer and user agent of every request.
pub async fn request_log_middleware(request: Request, next: Next) -> Response {
    let headers = request.headers();
    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        origin = header_str(headers, header::ORIGIN).unwrap_or("(no origin)"),
        referer = header_str(headers, header::REFERER).unwrap_or("(no referer)"),
        user_agent = header_str(headers, header::USER_AGENT).unwrap_or("(no user agent)"),
        "Incoming request"
    );

    next.run(request).await
}

/// Rejects browser requests from origins outside the allow-list.
///
/// Requests without an `Origin` header (curl, server-side rendering) and the
/// opaque `null` origin (file://, sandboxed frames) pass through.
pub async fn origin_guard_middleware(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        if origin != "null" && !app_state.config.is_allowed_origin(origin) {
            let origin = origin.to_str().unwrap_or("(non-ascii origin)").to_string();
            return Err(AppError::OriginNotAllowed(origin));
        }
    }

    Ok(next.run(request).await)
}
