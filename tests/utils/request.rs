use super::response::TestResponse;
use axum::{body::Body, Router};
use http::{
    header::{HeaderName, HeaderValue, CONTENT_TYPE},
    Request,
};
use serde::Serialize;
use tower::ServiceExt;

const BODY_LIMIT: usize = 4 * 1024 * 1024;

#[derive(Debug)]
pub struct RequestBuilder {
    router: Router,
    builder: http::request::Builder,
    body: Body,
}

#[allow(unused)]
impl RequestBuilder {
    pub(super) fn new(router: Router, builder: http::request::Builder) -> Self {
        RequestBuilder {
            router,
            builder,
            body: Body::empty(),
        }
    }

    pub async fn send(self) -> TestResponse {
        let request: Request<Body> = self.builder.body(self.body).expect("failed to build request");

        let response = self
            .router
            .oneshot(request)
            .await
            .expect("router should respond");

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .expect("failed to read body");

        TestResponse::new(status, body)
    }

    pub fn json<T>(mut self, value: &T) -> RequestBuilder
    where
        T: Serialize,
    {
        self.builder = self.builder.header(CONTENT_TYPE, "application/json");
        self.body = Body::from(serde_json::to_vec(value).expect("failed to serialize"));
        self
    }

    pub fn raw(mut self, body: &'static str) -> RequestBuilder {
        self.body = Body::from(body);
        self
    }

    pub fn header<K, V>(mut self, key: K, value: V) -> RequestBuilder
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        self.builder = self.builder.header(key, value);
        self
    }
}
