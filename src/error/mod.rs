mod constants;

pub use constants::*;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use sea_orm::DbErr;
use serde_json::json;
use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct Error {
    status: Option<StatusCode>,
    code: &'static str,
    message: Cow<'static, str>,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    const fn new(status: Option<StatusCode>, code: &'static str, message: &'static str) -> Error {
        Self {
            status,
            code,
            message: Cow::Borrowed(message),
        }
    }

    /// Same error kind, but with a message describing this particular failure.
    #[inline]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// A non-success status from a third-party API.
    pub fn upstream(context: &str, status: StatusCode) -> Self {
        warn!(%status, "{context}");

        constants::UPSTREAM_HTTP.with_message(format!(
            "{context}. Received: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
        ))
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> Option<StatusCode> {
        self.status
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(128).writer();

        serde_json::to_writer(
            &mut buf,
            &json!({
                "code": self.code(),
                "error": self.message(),
            }),
        )
        .expect("failed to serialize error");

        buf.into_inner().freeze()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    #[inline]
    fn into_response(self) -> Response {
        let Some(status) = self.status else {
            panic!("cannot convert an error without status to a response")
        };

        let buf = self.to_bytes();
        let mut res = (status, buf).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<DbErr> for Error {
    #[inline]
    fn from(error: DbErr) -> Self {
        error!("database error: {:?}", error);
        constants::DATABASE_ERROR
    }
}

impl From<serde_json::Error> for Error {
    #[inline]
    fn from(error: serde_json::Error) -> Self {
        error!("failed to deserialize json: {:?}", error);
        constants::JSON_DESERIALIZE
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        error!("upstream error: {:?}", error);

        if let Some(status) = error.status() {
            return Error::upstream("Upstream request failed", status);
        }

        if error.is_decode() {
            constants::UPSTREAM_BODY
        } else {
            constants::UPSTREAM_UNREACHABLE
        }
    }
}

macro_rules! const_error {
    ($name:ident, $status:ident, $code:literal, $msg:literal $(,)?) => {
        pub const $name: $crate::error::Error = $crate::error::Error::new(
            Some(::axum::http::StatusCode::$status),
            $code,
            $msg,
        );
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_has_json_content_type() {
        let error = Error::new(Some(StatusCode::OK), "", "");
        let response = error.into_response();
        let content_type = response.headers().get(header::CONTENT_TYPE);

        assert!(content_type.is_some(), "response");
        assert_eq!(content_type.unwrap(), "application/json");
    }

    #[test]
    fn upstream_error_carries_status_and_reason() {
        let error = Error::upstream("Failed to fetch search results", StatusCode::NOT_FOUND);

        assert_eq!(error.code(), UPSTREAM_HTTP.code());
        assert_eq!(error.status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(
            error.message(),
            "Failed to fetch search results. Received: 404 Not Found"
        );
    }

    #[test]
    fn body_contains_code_and_message() {
        let error = NOT_FOUND.with_message("No movie found for the name: nothing");
        let body: serde_json::Value = serde_json::from_slice(&error.to_bytes()).unwrap();

        assert_eq!(body["code"], "E020");
        assert_eq!(body["error"], "No movie found for the name: nothing");
    }
}
