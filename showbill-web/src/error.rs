//! Web-layer error mapping
//!
//! Handlers return `Result<_, PageError>`; the conversion from the
//! library error decides which error page the client sees. Persistence
//! failures on the create/update/delete paths never reach this type -
//! those handlers recover with a flash banner instead.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use showbill_common::Error;
use tracing::error;

use crate::views;

/// Error wrapper rendering the dedicated 404/500 pages
#[derive(Debug)]
pub struct PageError(pub Error);

impl<E> From<E> for PageError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        PageError(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::NotFound(what) => {
                (StatusCode::NOT_FOUND, Html(views::not_found_page(&what))).into_response()
            }
            err => {
                error!("Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(views::server_error_page()))
                    .into_response()
            }
        }
    }
}

/// Shorthand for handler signatures
pub type PageResult<T> = std::result::Result<T, PageError>;
