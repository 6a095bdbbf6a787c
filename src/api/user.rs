use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::warn;

use crate::{
    api::pages, lastfm::ScrobbleApi, server::AppState, snapshot::build_snapshot_today, utils,
};

/// Renders the snapshot of `username`.
///
/// An unknown user yields a 404 page. Every other failure is shown inline on
/// an otherwise normal page.
pub async fn user_page<A: ScrobbleApi + 'static>(
    State(state): State<AppState<A>>,
    Path(username): Path<String>,
) -> Response {
    match build_snapshot_today(state.api.as_ref(), &username, &state.windows).await {
        Ok(snapshot) => Html(pages::user(&username, Some(&snapshot), None)).into_response(),
        Err(e) if e.is_user_not_found() => {
            (StatusCode::NOT_FOUND, Html(pages::not_found())).into_response()
        }
        Err(e) => {
            warn!(user = %username, error = %e, "snapshot failed");
            Html(pages::user(&username, None, Some(&e.to_string()))).into_response()
        }
    }
}

pub async fn user_redirect(Path(username): Path<String>) -> Redirect {
    Redirect::permanent(&utils::user_path(&username))
}
