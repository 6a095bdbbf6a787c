//! # API Module
//!
//! HTTP endpoints of the scrobblesnap web server.
//!
//! ## Endpoints
//!
//! - [`home`] / [`submit`] - `GET /` shows the username form, `POST /` sends
//!   the visitor on to `/{username}/`
//! - [`user_page`] - `GET /{username}/` renders the user's top albums for
//!   every configured lookback window
//! - [`user_redirect`] - `GET /{username}` adds the trailing slash
//! - [`health`] - `GET /health` status and version for monitoring
//!
//! ## Error Pages
//!
//! When Last.fm does not know the user, the user page answers with
//! `404 Not Found`. Any other failure (no chart for a window, Last.fm errors,
//! network trouble) keeps the `200` status and prints the error message on
//! the page.
//!
//! ## Markup
//!
//! Pages are assembled in [`pages`]. Every piece of text that originates from
//! the visitor or from Last.fm is HTML-escaped.

mod health;
mod home;
pub mod pages;
mod user;

pub use health::health;
pub use home::{UsernameForm, home, submit};
pub use user::{user_page, user_redirect};
