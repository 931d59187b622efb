use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub struct TestResponse {
    status: StatusCode,
    body: Bytes,
}

#[allow(unused)]
impl TestResponse {
    pub(super) fn new(status: StatusCode, body: Bytes) -> Self {
        TestResponse { status, body }
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).expect("failed to deserialize to json")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}
