use axum::http::{self, StatusCode};
use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use snafu::{Backtrace, ErrorCompat, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Error reading config file: {}", source))]
    ConfigFile {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Error parsing config file: {}", source))]
    ConfigParse {
        source: toml::de::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Config error: {}", msg))]
    Config { msg: String },

    #[snafu(display("Failed to render template: {}", source))]
    Template {
        source: askama::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Response builder error: {}", source))]
    ResponseBuilder {
        source: http::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Unable to bind server address: {}", source))]
    ServerBind {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Server error: {}", source))]
    Server {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("{}", msg))]
    Validation { msg: String },

    #[snafu(display("{}", msg))]
    Forbidden { msg: String },

    #[snafu(display("{}", msg))]
    NotFound { msg: String },

    #[snafu(display("Requires authentication"))]
    RequiresAuth,

    #[snafu(display("{}: {}", msg, source))]
    HttpClient {
        msg: String,
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("{}: {}", msg, source))]
    HttpResponseParse {
        msg: String,
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("{}", msg))]
    Service { msg: String },

    #[snafu(display("Entry not found"))]
    EntryNotFound,

    #[snafu(display("Home page not found"))]
    HomePageNotFound,

    #[snafu(display("User not found"))]
    UserNotFound,

    #[snafu(display("{}", msg))]
    Whatever { msg: String },
}

// Allow string slices to be converted to Error
impl From<&str> for Error {
    fn from(val: &str) -> Self {
        Self::Whatever {
            msg: val.to_string(),
        }
    }
}

impl From<String> for Error {
    fn from(val: String) -> Self {
        Self::Whatever { msg: val }
    }
}

/// Allow Error to be converted to StatusCode
impl From<&Error> for StatusCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::Forbidden { .. } => StatusCode::FORBIDDEN,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::RequiresAuth => StatusCode::UNAUTHORIZED,
            Error::EntryNotFound => StatusCode::NOT_FOUND,
            Error::HomePageNotFound => StatusCode::NOT_FOUND,
            Error::UserNotFound => StatusCode::NOT_FOUND,
            Error::HttpClient { .. } => StatusCode::BAD_GATEWAY,
            Error::HttpResponseParse { .. } => StatusCode::BAD_GATEWAY,
            Error::Service { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Allow errors to be rendered as response
impl IntoResponse for Error {
    fn into_response(self) -> Response<Body> {
        let mut info = ErrorInfo::from(&self);
        if let Some(bt) = ErrorCompat::backtrace(&self) {
            info.backtrace = Some(format!("{}", bt));
        }

        // The response mapper renders the actual page
        let mut res = Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::empty())
            .expect("Response builder must succeed");

        res.extensions_mut().insert(info);
        res
    }
}

#[derive(Clone, Debug)]
pub struct ErrorInfo {
    pub status_code: StatusCode,
    pub title: String,
    pub message: String,
    pub backtrace: Option<String>,
}

impl From<&Error> for ErrorInfo {
    fn from(e: &Error) -> Self {
        let status_code: StatusCode = e.into();
        Self {
            status_code,
            title: status_code
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: e.to_string(),
            backtrace: None,
        }
    }
}

impl ErrorInfo {
    pub fn not_found() -> Self {
        Self::from(&Error::NotFound {
            msg: "Page not found".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = Error::Validation {
            msg: "App name required".to_string(),
        };
        assert_eq!(StatusCode::from(&err), StatusCode::BAD_REQUEST);
        assert_eq!(StatusCode::from(&Error::RequiresAuth), StatusCode::UNAUTHORIZED);

        let err = Error::Service {
            msg: "Strapi is down".to_string(),
        };
        assert_eq!(StatusCode::from(&err), StatusCode::BAD_GATEWAY);

        let err: Error = "boom".into();
        assert_eq!(StatusCode::from(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_info() {
        let info = ErrorInfo::from(&Error::EntryNotFound);
        assert_eq!(info.status_code, StatusCode::NOT_FOUND);
        assert_eq!(info.title, "Not Found");
        assert_eq!(info.message, "Entry not found");
    }
}
