pub mod entries;
pub mod home;
pub mod strapi;
pub mod users;

use reqwest::{Response, StatusCode};
use tracing::error;

use crate::Error;
use dto::pagination::ErrorBodyDto;

/// Turns a non-success Strapi response into an error.
///
/// Strapi error bodies carry a human readable message which is preferred over
/// the raw body text.
pub async fn handle_response_error(response: Response, resource: &str, not_found: Error) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBodyDto>(&body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body,
    };

    response_error(status, resource, message, not_found)
}

fn response_error(status: StatusCode, resource: &str, message: String, not_found: Error) -> Error {
    match status {
        StatusCode::BAD_REQUEST => Error::Validation {
            msg: non_empty(message, "Invalid request"),
        },
        StatusCode::UNAUTHORIZED => Error::RequiresAuth,
        StatusCode::FORBIDDEN => Error::Forbidden {
            msg: non_empty(message, "Forbidden"),
        },
        StatusCode::NOT_FOUND => not_found,
        _ => {
            error!("Strapi error on {} ({}): {}", resource, status, message);
            Error::Service {
                msg: format!("Unable to process {}. Try again later.", resource),
            }
        }
    }
}

fn non_empty(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
