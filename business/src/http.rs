//! Send-safe HTTP client for the parse endpoint.
//!
//! On WASM `reqwest::Response` is not `Send` (it wraps `JsValue`/`JsFuture`), so there
//! the request runs on the JS thread via `wasm_bindgen_futures::spawn_local` and the
//! finished `Response` comes back over a `flume` channel. Native builds call reqwest
//! directly. Either way `RequestBuilder::send` is a `Send` future, which is what the
//! loader task needs.

use std::collections::HashMap;

/// Status and body of a finished request, both `Send`.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failure: no response was received at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP error: {}", self.message)
    }
}

impl std::error::Error for HttpError {}

pub type HttpResult<T> = Result<T, HttpError>;

/// A bodiless POST.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Declares a JSON payload without attaching a body.
    ///
    /// The parse endpoint takes no arguments but still expects the JSON content type.
    pub fn json_content_type(self) -> Self {
        self.header("content-type", "application/json")
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.execute().await
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.send_wasm().await
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_wasm(self) -> HttpResult<Response> {
        let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);

        // The closure is not Send, spawn_local does not require it.
        wasm_bindgen_futures::spawn_local(async move {
            let result = self.execute().await;
            // Receiver is gone when the loader was torn down.
            let _ = tx.send_async(result).await;
        });

        rx.recv_async()
            .await
            .map_err(|_disconnected| HttpError::new("Request cancelled"))?
    }

    async fn execute(self) -> HttpResult<Response> {
        let mut request = reqwest::Client::new().post(&self.url);

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        // Status must be read before the body consumes the response.
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .to_vec();

        Ok(Response { status, body })
    }
}

pub struct Client;

impl Client {
    pub fn post(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            status,
            body: body.to_vec(),
        }
    }

    #[test]
    fn only_2xx_is_success() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(304, b"").is_success());
        assert!(!response(500, b"").is_success());
    }

    #[test]
    fn json_decodes_body() {
        let value: serde_json::Value = response(200, br#"{"pdf_cntnt": []}"#)
            .json()
            .expect("body is valid JSON");
        assert_eq!(value["pdf_cntnt"], serde_json::json!([]));
    }

    #[test]
    fn post_declares_json_content_type() {
        let builder = Client::post("http://localhost/parse_pdf").json_content_type();

        assert_eq!(builder.url, "http://localhost/parse_pdf");
        assert_eq!(
            builder.headers.get("content-type"),
            Some(&"application/json".to_owned())
        );
    }
}
