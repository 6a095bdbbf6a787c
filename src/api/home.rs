use axum::{
    Form,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{api::pages, utils};

#[derive(Debug, Deserialize)]
pub struct UsernameForm {
    #[serde(default)]
    pub username: String,
}

pub async fn home() -> Html<String> {
    Html(pages::home())
}

/// Sends a submitted user name on to its snapshot page. Blank names land on
/// the home page again.
pub async fn submit(Form(form): Form<UsernameForm>) -> Response {
    let username = form.username.trim();
    if username.is_empty() {
        return Html(pages::home()).into_response();
    }

    Redirect::to(&utils::user_path(username)).into_response()
}
