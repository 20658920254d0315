//! HTTP utilities for resource-manager REST API calls

use crate::error::{Error, Result};
use crate::payload::Payload;
use reqwest::multipart;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        // Back up to a char boundary so multibyte UTF-8 never splits
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for resource-manager API calls
///
/// Cheap to clone: the underlying reqwest client is reference-counted, so
/// every sub-client shares one connection pool.
#[derive(Clone)]
pub struct ApiTransport {
    client: Client,
    token: String,
}

impl std::fmt::Debug for ApiTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The bearer token must never reach logs or panic messages
        f.debug_struct("ApiTransport").field("token", &"[redacted]").finish()
    }
}

impl ApiTransport {
    /// Create a new transport authenticating with the given bearer token
    pub fn new(token: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("resman/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, token: token.to_string() })
    }

    /// Make a GET request
    pub async fn get(&self, url: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);
        self.execute(self.client.get(url)).await
    }

    /// Make a POST request with an optional JSON body
    pub async fn post(&self, url: &str, body: Option<&Value>) -> Result<Value> {
        tracing::debug!("POST {}", url);
        let mut request = self.client.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }

    /// Make a PUT request with an optional JSON body
    pub async fn put(&self, url: &str, body: Option<&Value>) -> Result<Value> {
        tracing::debug!("PUT {}", url);
        let mut request = self.client.put(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }

    /// Make a PATCH request with a JSON body
    pub async fn patch(&self, url: &str, body: &Value) -> Result<Value> {
        tracing::debug!("PATCH {}", url);
        self.execute(self.client.patch(url).json(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, url: &str) -> Result<Value> {
        tracing::debug!("DELETE {}", url);
        self.execute(self.client.delete(url)).await
    }

    /// Make a multipart POST or PUT: one `file` part plus every payload
    /// field as a text part
    pub async fn send_multipart(
        &self,
        method: Method,
        url: &str,
        fields: Payload,
        file: Vec<u8>,
    ) -> Result<Value> {
        tracing::debug!("{} {} (multipart)", method, url);

        let mut form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(file).file_name("file"),
        );
        for (key, value) in fields.into_form_fields() {
            form = form.text(key, value);
        }

        let request = self.client.request(method, url).multipart(form);
        self.execute(request).await
    }

    /// Send the request and decode the response.
    ///
    /// Non-success statuses map to typed errors carrying the server's
    /// message; empty success bodies decode to `Null`.
    async fn execute(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.bearer_auth(&self.token).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Security: only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(Error::from_status(status.as_u16(), &body));
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| Error::Api {
            status: status.as_u16(),
            message: format!("response is not valid JSON: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_truncates_long_bodies() {
        let body = "x".repeat(300);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains("truncated, 300 bytes total"));
        assert!(sanitized.len() < body.len());
    }

    #[test]
    fn sanitize_strips_control_characters() {
        let sanitized = sanitize_for_log("token\x1b[31m leak\n");
        assert_eq!(sanitized, "token[31m leak");
    }

    #[test]
    fn sanitize_handles_multibyte_at_truncation_point() {
        // 'é' is two bytes and straddles the truncation offset
        let body = format!("{}é and more after the cut", "x".repeat(MAX_LOG_BODY_LENGTH - 1));
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains("truncated"));
        assert!(sanitized.starts_with(&"x".repeat(MAX_LOG_BODY_LENGTH - 1)));
    }

    #[test]
    fn debug_output_redacts_token() {
        let transport = ApiTransport::new("super-secret-token").unwrap();
        let rendered = format!("{transport:?}");
        assert!(!rendered.contains("super-secret-token"));
        assert!(rendered.contains("[redacted]"));
    }
}
